use askama::Template;
use axum::{Router, extract::State, response::Html, routing::get};

use crate::AppState;
use crate::error::AppError;
use crate::models::AccessLog;
use crate::stats;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    // Pre-serialized JSON series, embedded verbatim for the chart scripts
    chart_data: String,
    paths_data: String,
    name_message_data: String,
    recent: Vec<AccessLog>,
    static_hash: &'static str,
}

const RECENT_LIMIT: i64 = 50;

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/dashboard", get(dashboard))
}

async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let stats = stats::aggregate(&state.db).await?;
    let recent = AccessLog::recent(&state.db, RECENT_LIMIT).await?;

    let template = DashboardTemplate {
        chart_data: serde_json::to_string(&stats.daily_counts)?,
        paths_data: serde_json::to_string(&stats.top_paths)?,
        name_message_data: serde_json::to_string(&stats.top_name_messages)?,
        recent,
        static_hash: crate::STATIC_HASH,
    };
    Ok(Html(template.render()?))
}
