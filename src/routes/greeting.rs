use askama::Template;
use axum::{
    Router,
    extract::{Path, Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;

use crate::AppState;
use crate::client::ClientMeta;
use crate::error::AppError;
use crate::greeting::{Greeting, format_greeting};
use crate::models::AccessLog;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    greeting: Greeting,
    static_hash: &'static str,
}

#[derive(Deserialize, Default)]
pub struct GreetingQuery {
    name: Option<String>,
    message: Option<String>,
    sender: Option<String>,
}

/// Captures pulled out of the path portion of a greeting URL.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub name: Option<String>,
    pub message: Option<String>,
    pub sender: Option<String>,
}

impl RouteParams {
    /// Split a greeting path into its captures, most specific shape first:
    /// one segment is a name, two are name and message, three or more make
    /// the last segment the sender and everything in between the message,
    /// slashes included. Trailing slashes don't count as segments.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::default(),
            [name] => Self {
                name: Some(name.to_string()),
                ..Self::default()
            },
            [name, message] => Self {
                name: Some(name.to_string()),
                message: Some(message.to_string()),
                sender: None,
            },
            [name, middle @ .., sender] => Self {
                name: Some(name.to_string()),
                message: Some(middle.join("/")),
                sender: Some(sender.to_string()),
            },
        }
    }
}

/// Path capture wins over the query parameter of the same name; empty values
/// never win. Falls back to the empty string.
fn resolve(path_value: Option<String>, query_value: Option<String>) -> String {
    path_value
        .filter(|v| !v.is_empty())
        .or(query_value.filter(|v| !v.is_empty()))
        .unwrap_or_default()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{*path}", get(index_with_path))
}

async fn index(
    State(state): State<AppState>,
    Query(query): Query<GreetingQuery>,
    client: ClientMeta,
) -> Result<Html<String>, AppError> {
    respond(&state, RouteParams::default(), query, client, "/").await
}

async fn index_with_path(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<GreetingQuery>,
    client: ClientMeta,
) -> Result<Html<String>, AppError> {
    let request_path = format!("/{path}");
    respond(
        &state,
        RouteParams::parse(&path),
        query,
        client,
        &request_path,
    )
    .await
}

async fn respond(
    state: &AppState,
    params: RouteParams,
    query: GreetingQuery,
    client: ClientMeta,
    request_path: &str,
) -> Result<Html<String>, AppError> {
    let name = resolve(params.name, query.name);
    let message = resolve(params.message, query.message);
    let sender = resolve(params.sender, query.sender);

    // Configured fallback applies only when no sender arrived at all
    let sender = if sender.is_empty() {
        state.config.default_sender.clone().unwrap_or_default()
    } else {
        sender
    };

    // The visit is logged before rendering; a failed insert fails the request
    AccessLog::record(
        &state.db,
        &name,
        &message,
        client.ip,
        client.user_agent,
        request_path,
    )
    .await?;

    let template = IndexTemplate {
        greeting: format_greeting(&name, &message, &sender),
        static_hash: crate::STATIC_HASH,
    };
    Ok(Html(template.render()?))
}
