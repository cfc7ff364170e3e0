// File: src/routes.rs
// Purpose: HTTP endpoints exposing breadcrumb trails to the dashboard

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use parkir_nav::{canonicalize, BreadcrumbTrail, RouteMap};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteMap>,
    pub normalize_paths: bool,
}

#[derive(Debug, Deserialize)]
struct BreadcrumbQuery {
    path: Option<String>,
}

#[derive(Debug, Serialize)]
struct BreadcrumbResponse {
    path: String,
    trail: BreadcrumbTrail,
}

#[derive(Debug, Serialize)]
struct RouteListing<'a> {
    path: &'a str,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<&'a str>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/breadcrumbs", get(breadcrumbs))
        .route("/api/routes", get(list_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn breadcrumbs(
    State(state): State<AppState>,
    Query(query): Query<BreadcrumbQuery>,
) -> Response {
    let Some(raw) = query.path else {
        return error_response(StatusCode::BAD_REQUEST, "Missing query parameter: path");
    };

    let path = if state.normalize_paths {
        canonicalize(&raw).into_owned()
    } else {
        raw
    };

    let trail = state.routes.trail(&path);
    debug!("Breadcrumb trail for {} has {} items", path, trail.len());

    Json(BreadcrumbResponse { path, trail }).into_response()
}

async fn list_routes(State(state): State<AppState>) -> Response {
    let listing: Vec<RouteListing<'_>> = state
        .routes
        .iter()
        .map(|(path, entry)| RouteListing {
            path,
            label: &entry.label,
            parent: entry.parent.as_deref(),
        })
        .collect();

    Json(listing).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({ "error": message });
    (status, Json(body)).into_response()
}
