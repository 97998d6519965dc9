use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One vocabulary entry as stored in the snapshot.
///
/// Created only by normalizing an upstream page; a rebuild produces a fresh
/// sequence rather than editing documents in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub page_id: String,
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub review_count: u64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub relevance: Option<String>,
    #[serde(default, alias = "types")]
    pub tags: Vec<String>,
    /// Upstream `properties`, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

impl Document {
    /// Lowercased `word description example`, the haystack for term matching.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.word, self.description, self.example).to_lowercase()
    }

    pub fn has_any_tag(&self, wanted: &std::collections::HashSet<String>) -> bool {
        self.tags
            .iter()
            .any(|tag| wanted.contains(&tag.to_lowercase()))
    }
}
