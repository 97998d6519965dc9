//! Notion API wire types.
//!
//! Only the envelope is typed; page `properties` stay as raw JSON so they can
//! be passed through untouched and probed field-by-field during normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest `page_size` the database query endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Property names in the vocabulary database.
pub const PROP_WORD: &str = "word";
pub const PROP_DESCRIPTION: &str = "Description";
pub const PROP_EXAMPLE: &str = "Example";
pub const PROP_REVIEW_COUNT: &str = "ReviewCount";
pub const PROP_DATE: &str = "Date";
pub const PROP_RELEVANCE: &str = "Relevance";
pub const PROP_TYPE: &str = "Type";

/// A single database row as returned by the query and page endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPage {
    pub id: String,
    #[serde(default)]
    pub properties: Value,
}

/// One page of a database query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryPage {
    #[serde(default)]
    pub results: Vec<RawPage>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sort {
    pub property: String,
    pub direction: SortDirection,
}

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseQuery {
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
}

impl DatabaseQuery {
    pub fn page(page_size: u32, start_cursor: Option<String>) -> Self {
        Self {
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            start_cursor,
            sorts: Vec::new(),
        }
    }

    pub fn sorted_by(mut self, property: &str, direction: SortDirection) -> Self {
        self.sorts.push(Sort {
            property: property.to_string(),
            direction,
        });
        self
    }
}

/// Property changes sent with `PATCH /pages/{id}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageUpdate {
    pub review_count: Option<u64>,
    pub date: Option<String>,
}

impl PageUpdate {
    pub fn to_body(&self) -> Value {
        let mut properties = serde_json::Map::new();
        if let Some(count) = self.review_count {
            properties.insert(
                PROP_REVIEW_COUNT.to_string(),
                serde_json::json!({ "number": count }),
            );
        }
        if let Some(date) = &self.date {
            properties.insert(
                PROP_DATE.to_string(),
                serde_json::json!({ "date": { "start": date } }),
            );
        }
        serde_json::json!({ "properties": properties })
    }
}
