//! Read-only aggregation over the access log, feeding the admin dashboard.

use serde::Serialize;
use sqlx::SqlitePool;

/// One point in the visits-per-day series, shaped for the chart library.
#[derive(Debug, Serialize)]
pub struct DailyCount {
    pub x: String,
    pub y: i64,
}

/// One bar in a labeled count series.
#[derive(Debug, Serialize)]
pub struct LabeledCount {
    pub label: String,
    pub data: i64,
}

pub struct VisitStats {
    /// Sparse: days without visits have no entry. Ascending by day.
    pub daily_counts: Vec<DailyCount>,
    pub top_paths: Vec<LabeledCount>,
    pub top_name_messages: Vec<LabeledCount>,
}

const TOP_LIMIT: i64 = 10;

/// Compute the three dashboard summaries. Never mutates any row; reads are
/// not isolated from concurrent inserts and don't need to be.
pub async fn aggregate(pool: &SqlitePool) -> Result<VisitStats, sqlx::Error> {
    // timestamp is RFC 3339 text, so the first ten bytes are the UTC date
    let daily: Vec<(String, i64)> = sqlx::query_as(
        "SELECT substr(timestamp, 1, 10) AS day, COUNT(*) AS count
         FROM access_log
         GROUP BY day
         ORDER BY day ASC",
    )
    .fetch_all(pool)
    .await?;

    // Ties broken by first encounter so repeated reports stay stable
    let paths: Vec<(String, i64)> = sqlx::query_as(
        "SELECT path, COUNT(*) AS count
         FROM access_log
         GROUP BY path
         ORDER BY count DESC, MIN(rowid) ASC
         LIMIT ?",
    )
    .bind(TOP_LIMIT)
    .fetch_all(pool)
    .await?;

    let pairs: Vec<(Option<String>, Option<String>, i64)> = sqlx::query_as(
        "SELECT name, message, COUNT(*) AS count
         FROM access_log
         GROUP BY name, message
         ORDER BY count DESC, MIN(rowid) ASC
         LIMIT ?",
    )
    .bind(TOP_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(VisitStats {
        daily_counts: daily
            .into_iter()
            .map(|(day, count)| DailyCount { x: day, y: count })
            .collect(),
        top_paths: paths
            .into_iter()
            .map(|(path, count)| LabeledCount {
                label: path,
                data: count,
            })
            .collect(),
        top_name_messages: pairs
            .into_iter()
            .map(|(name, message, count)| LabeledCount {
                // Placeholders are display-only, stored rows keep their NULLs
                label: format!(
                    "{}: {}",
                    name.as_deref().unwrap_or("Anonymous"),
                    message.as_deref().unwrap_or("No message"),
                ),
                data: count,
            })
            .collect(),
    })
}
