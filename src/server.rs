//! HTTP router assembly.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{require_api_key, AuthPolicy};
use crate::notion::NotionClient;
use crate::search::handlers::{handle_search, handle_total_count};
use crate::snapshot::SnapshotStore;
use crate::words::handlers::{handle_get_words, handle_update_word};

pub const ENDPOINT_SEARCH: &str = "/search";
pub const ENDPOINT_TOTAL_COUNT: &str = "/total-count";
pub const ENDPOINT_GET_WORDS: &str = "/get-words";
pub const ENDPOINT_UPDATE_WORD: &str = "/update-word";
pub const ENDPOINT_HEALTH: &str = "/health";

/// Builds the router. Every route except `/health` sits behind the API-key
/// policy, including method mismatches on those routes.
pub fn build_router(
    store: Arc<SnapshotStore>,
    notion: Arc<NotionClient>,
    auth: AuthPolicy,
) -> Router {
    let guarded = Router::new()
        .route(ENDPOINT_SEARCH, get(handle_search))
        .route(ENDPOINT_TOTAL_COUNT, get(handle_total_count))
        .route(ENDPOINT_GET_WORDS, get(handle_get_words))
        .route(ENDPOINT_UPDATE_WORD, post(handle_update_word))
        .layer(middleware::from_fn_with_state(auth, require_api_key));

    Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .merge(guarded)
        .layer(Extension(store))
        .layer(Extension(notion))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn handle_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
