use super::engine::{search_snapshot, SearchQuery};
use super::types::{SearchParams, SearchResponse, TotalCountResponse};
use crate::error::ApiError;
use crate::snapshot::SnapshotStore;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Extension(store): Extension<Arc<SnapshotStore>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let query = SearchQuery::from_params(&params)?;

    let response = search_snapshot(&store, &query).await?;
    Ok(Json(response))
}

pub async fn handle_total_count(
    Extension(store): Extension<Arc<SnapshotStore>>,
) -> Result<Json<TotalCountResponse>, ApiError> {
    match store.count().await {
        Ok(total) => Ok(Json(TotalCountResponse {
            total,
            cached: true,
        })),
        Err(err) if err.is_missing() => Err(ApiError::NotFound(
            "index not found. Run the reindex binary to build the snapshot".to_string(),
        )),
        Err(err) => Err(err.into()),
    }
}
