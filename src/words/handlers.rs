use super::service::{fetch_words, update_word, DEFAULT_WORDS_LIMIT};
use super::types::{GetWordsParams, GetWordsResponse, UpdateWordRequest, UpdateWordResponse};
use crate::error::ApiError;
use crate::notion::NotionClient;
use crate::search::engine::parse_limit;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_get_words(
    Extension(client): Extension<Arc<NotionClient>>,
    params: Result<Query<GetWordsParams>, QueryRejection>,
) -> Result<Json<GetWordsResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let limit = parse_limit(params.limit.as_deref(), DEFAULT_WORDS_LIMIT);

    let results = fetch_words(&client, limit).await?;
    tracing::debug!("Fetched {} words from Notion", results.len());
    Ok(Json(GetWordsResponse { results }))
}

pub async fn handle_update_word(
    Extension(client): Extension<Arc<NotionClient>>,
    body: Result<Json<UpdateWordRequest>, JsonRejection>,
) -> Result<Json<UpdateWordResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;

    let response = update_word(&client, request).await?;
    Ok(Json(response))
}
