use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

/// One stored row per request to the greeting endpoint. Rows are append-only
/// and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccessLog {
    pub id: String,
    pub name: Option<String>,
    pub message: Option<String>,
    pub timestamp: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub path: String,
}

impl AccessLog {
    /// Append one visit. Name and message are stored raw, before any display
    /// normalization; empty strings are stored as NULL.
    pub async fn record(
        pool: &SqlitePool,
        name: &str,
        message: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
        path: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO access_log (id, name, message, timestamp, ip_address, user_agent, path)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(Some(name).filter(|s| !s.is_empty()))
        .bind(Some(message).filter(|s| !s.is_empty()))
        .bind(Utc::now().to_rfc3339())
        .bind(ip_address)
        .bind(user_agent)
        .bind(path)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Most recently inserted visits, newest first.
    pub async fn recent(pool: &SqlitePool, limit: i64) -> Result<Vec<AccessLog>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM access_log ORDER BY rowid DESC LIMIT ?")
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
