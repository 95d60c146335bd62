use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use log::warn;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::airtable::cache::RecordCache;
use crate::prelude::{eprintln, *};
use showreel_core::content::{bundle, transform_records, Record};

/// HTTP API server
#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the portfolio content API over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

struct ServerState {
    cache: RecordCache,
    revalidate_token: Option<String>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Starting content API on {}:{}...", app.host, app.port);
    }

    let addr = f!("{}:{}", app.host, app.port);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(ServerState {
        cache: RecordCache::default(),
        revalidate_token: std::env::var("REVALIDATE_TOKEN").ok(),
    });

    let app_router = Router::new()
        .route("/api/content", get(content_handler))
        .route("/api/content/{id}", get(record_handler))
        .route("/api/skills", get(skills_handler))
        .route(
            "/api/revalidate",
            get(revalidate_get_handler).post(revalidate_post_handler),
        )
        .layer(cors)
        .with_state(state);

    if global.verbose {
        eprintln!("Content API listening on http://{}", addr);
        eprintln!("Content endpoint: http://{}/api/content", addr);
        eprintln!("Revalidate endpoint: http://{}/api/revalidate", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// The current record batch: cached when fresh, fetched and cached on a
/// miss, placeholder data when the upstream fetch fails. Failed fetches are
/// never cached, so the next request retries upstream.
async fn cached_records(state: &ServerState) -> Vec<Record> {
    if let Some(records) = state.cache.get() {
        return records;
    }

    match crate::airtable::try_fetch_records().await {
        Ok(records) => {
            state.cache.put(records.clone());
            records
        }
        Err(err) => {
            warn!("Airtable fetch failed, serving fallback data: {err}");
            use crate::airtable::RecordSource;
            crate::fallback::StaticFallback.records()
        }
    }
}

async fn content_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let records = cached_records(&state).await;
    let now_millis = chrono::Utc::now().timestamp_millis();
    Json(bundle(transform_records(&records, now_millis)))
}

async fn record_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let records = cached_records(&state).await;
    let now_millis = chrono::Utc::now().timestamp_millis();
    let items = transform_records(&records, now_millis);

    match items.into_iter().find(|item| item.id == id) {
        Some(item) => Json(item).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": f!("Content not found: {id}") })),
        )
            .into_response(),
    }
}

async fn skills_handler() -> impl IntoResponse {
    Json(crate::airtable::fetch_skills().await)
}

/// A revalidation request is authorized when it presents the configured
/// token. With no token configured, revalidation is open.
fn token_is_valid(expected: Option<&str>, provided: Option<&str>) -> bool {
    match expected {
        Some(expected) => provided == Some(expected),
        None => true,
    }
}

fn revalidate(state: &ServerState, provided: Option<&str>) -> axum::response::Response {
    if !token_is_valid(state.revalidate_token.as_deref(), provided) {
        warn!("{}", Error::InvalidToken);
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid token" })),
        )
            .into_response();
    }

    state.cache.invalidate();

    let now = chrono::Utc::now();
    Json(json!({
        "revalidated": true,
        "now": now.timestamp_millis(),
        "date": now.to_rfc3339(),
    }))
    .into_response()
}

async fn revalidate_get_handler(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    revalidate(&state, params.get("token").map(String::as_str))
}

async fn revalidate_post_handler(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let provided = headers
        .get("x-revalidate-token")
        .and_then(|value| value.to_str().ok());
    revalidate(&state, provided)
}
