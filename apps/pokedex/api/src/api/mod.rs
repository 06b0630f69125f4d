use axum::{Json, Router, routing::get};

use crate::openapi;
use crate::state::AppState;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates all API routes.
///
/// Domain routers carry their own state, so the result is ready to merge.
pub fn routes(state: &AppState) -> Router {
    let pokemon = domain_pokemon::handlers::router(state.fetcher.clone(), state.translator.clone());

    Router::new()
        .merge(pokemon)
        .route(OPENAPI_PATH, get(|| async { Json(openapi::openapi()) }))
}
