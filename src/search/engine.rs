use std::collections::HashSet;
use std::num::IntErrorKind;

use super::types::{DocumentView, SearchParams, SearchResponse};
use crate::error::ApiError;
use crate::snapshot::{Document, SnapshotStore};

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// A validated search request.
///
/// At least one of the term or the tag set is non-empty; the limit is already
/// clamped into `[1, MAX_LIMIT]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    term: String,
    tags: HashSet<String>,
    limit: usize,
}

impl SearchQuery {
    pub fn new<I, T>(term: Option<&str>, tags: I, limit: usize) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let term = term.unwrap_or_default().trim().to_lowercase();
        let tags: HashSet<String> = tags
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();

        if term.is_empty() && tags.is_empty() {
            return Err(ApiError::InvalidQuery(
                "q or type query parameter required".to_string(),
            ));
        }

        Ok(Self {
            term,
            tags,
            limit: limit.clamp(1, MAX_LIMIT),
        })
    }

    pub fn from_params(params: &SearchParams) -> Result<Self, ApiError> {
        Self::new(
            params.q.as_deref(),
            split_tags(params.tags.as_deref()),
            parse_limit(params.limit.as_deref(), DEFAULT_LIMIT),
        )
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Term substring match AND (if any tags were requested) at least one
    /// shared tag.
    pub fn matches(&self, doc: &Document) -> bool {
        let term_match = self.term.is_empty() || doc.search_text().contains(&self.term);
        term_match && (self.tags.is_empty() || doc.has_any_tag(&self.tags))
    }
}

/// Parses a user-supplied limit and clamps it into `[1, MAX_LIMIT]`.
///
/// Missing or non-numeric input yields `default`. Integers too large for
/// `i64` still clamp by sign.
pub fn parse_limit(raw: Option<&str>, default: usize) -> usize {
    let requested = match raw.map(|s| s.trim().parse::<i64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) if *e.kind() == IntErrorKind::PosOverflow => MAX_LIMIT as i64,
        Some(Err(e)) if *e.kind() == IntErrorKind::NegOverflow => 1,
        _ => default as i64,
    };
    requested.clamp(1, MAX_LIMIT as i64) as usize
}

pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Filtered view over a snapshot.
#[derive(Debug)]
pub struct SearchOutcome<'a> {
    /// First `limit` matches in snapshot order.
    pub hits: Vec<&'a Document>,
    pub total_matches: usize,
}

pub fn search<'a>(documents: &'a [Document], query: &SearchQuery) -> SearchOutcome<'a> {
    let mut hits = Vec::with_capacity(query.limit.min(documents.len()));
    let mut total_matches = 0usize;

    for doc in documents.iter().filter(|doc| query.matches(doc)) {
        if hits.len() < query.limit {
            hits.push(doc);
        }
        total_matches += 1;
    }

    SearchOutcome {
        hits,
        total_matches,
    }
}

/// Loads the snapshot and runs `query` against it.
pub async fn search_snapshot(
    store: &SnapshotStore,
    query: &SearchQuery,
) -> Result<SearchResponse, ApiError> {
    let documents = store.load().await?;
    let outcome = search(&documents, query);

    tracing::debug!(
        "Search matched {} documents (returning {})",
        outcome.total_matches,
        outcome.hits.len()
    );

    Ok(SearchResponse {
        hits: outcome.hits.into_iter().map(DocumentView::from).collect(),
        nb_hits: outcome.total_matches,
        offset: 0,
        limit: query.limit,
    })
}
