use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use bouquet::config::Config;

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(Config::default()).await
    }

    /// App with a configured fallback signature name.
    #[allow(dead_code)]
    pub async fn with_default_sender(sender: &str) -> Self {
        let config = Config {
            default_sender: Some(sender.to_string()),
            ..Config::default()
        };
        Self::with_config(config).await
    }

    async fn with_config(config: Config) -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to create in-memory SQLite pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let router = bouquet::build_app(pool.clone(), config);

        Self { router, db: pool }
    }

    /// Send a request through the app and return the response.
    pub async fn request(&self, req: Request<Body>) -> Response {
        tower::ServiceExt::oneshot(self.router.clone(), req)
            .await
            .unwrap()
    }

    /// Send a GET request to the given URI.
    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.request(req).await
    }

    #[allow(dead_code)]
    pub async fn count_visits(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM access_log")
            .fetch_one(&self.db)
            .await
            .expect("Failed to count visits");
        count
    }

    /// Insert a visit row directly, bypassing the handler.
    #[allow(dead_code)]
    pub async fn insert_visit(
        &self,
        name: Option<&str>,
        message: Option<&str>,
        path: &str,
        timestamp: &str,
    ) {
        sqlx::query(
            "INSERT INTO access_log (id, name, message, timestamp, path) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(name)
        .bind(message)
        .bind(timestamp)
        .bind(path)
        .execute(&self.db)
        .await
        .expect("Failed to insert test visit");
    }
}

/// Read the full response body as a String.
pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
