//! Word Proxy Data Types
//!
//! DTOs for the endpoints that talk to Notion directly instead of the
//! snapshot.

use serde::{Deserialize, Serialize};

use crate::snapshot::Document;

#[derive(Debug, Default, Deserialize)]
pub struct GetWordsParams {
    pub limit: Option<String>,
}

/// Live page of words, least-reviewed first. Each entry carries `raw`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetWordsResponse {
    pub results: Vec<Document>,
}

/// Body of `POST /update-word`.
///
/// `increment` asks for the current count plus one; an explicit
/// `set_review_count` takes precedence over that result, although the
/// current page is still read.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWordRequest {
    pub page_id: Option<String>,
    /// `null` and absent both mean no increment.
    pub increment: Option<bool>,
    pub set_review_count: Option<u64>,
    pub set_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWordResponse {
    pub ok: bool,
    pub page_id: String,
    pub review_count: Option<u64>,
    pub date: String,
}
