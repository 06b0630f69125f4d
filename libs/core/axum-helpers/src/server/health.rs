use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Bare liveness probe: 200 with an empty body.
pub async fn healthcheck_handler() -> StatusCode {
    StatusCode::OK
}

/// Liveness endpoint reporting the app name and version.
pub async fn health_handler(State(app): State<AppInfo>) -> Response {
    let response = HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Router with `/_healthcheck` and `/health`.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/_healthcheck", get(healthcheck_handler))
        .route("/health", get(health_handler))
        .with_state(app_info)
}
