use serde::{Deserialize, Serialize};

use crate::snapshot::Document;

/// Raw query string of `GET /search`.
///
/// Everything is kept as text so that a bad `limit` falls back to the default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    /// Comma-separated tag list.
    #[serde(rename = "type")]
    pub tags: Option<String>,
    pub limit: Option<String>,
}

/// A document as returned by search, without the upstream passthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: String,
    pub page_id: String,
    pub word: String,
    pub description: String,
    pub example: String,
    pub review_count: u64,
    pub date: Option<String>,
    pub relevance: Option<String>,
    pub tags: Vec<String>,
}

impl From<&Document> for DocumentView {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            page_id: doc.page_id.clone(),
            word: doc.word.clone(),
            description: doc.description.clone(),
            example: doc.example.clone(),
            review_count: doc.review_count,
            date: doc.date.clone(),
            relevance: doc.relevance.clone(),
            tags: doc.tags.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub hits: Vec<DocumentView>,
    /// Matches across the whole snapshot, not capped by `limit`.
    pub nb_hits: usize,
    pub offset: usize,
    pub limit: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TotalCountResponse {
    pub total: usize,
    pub cached: bool,
}
