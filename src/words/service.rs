use chrono::{SecondsFormat, Utc};

use super::types::{UpdateWordRequest, UpdateWordResponse};
use crate::error::ApiError;
use crate::notion::normalize::review_count;
use crate::notion::types::{DatabaseQuery, PageUpdate, SortDirection, PROP_REVIEW_COUNT};
use crate::notion::{normalize_page, NotionClient};
use crate::snapshot::Document;

pub const DEFAULT_WORDS_LIMIT: usize = 10;

/// Fetches up to `limit` words straight from Notion, least-reviewed first.
pub async fn fetch_words(client: &NotionClient, limit: usize) -> Result<Vec<Document>, ApiError> {
    let query = DatabaseQuery::page(limit as u32, None)
        .sorted_by(PROP_REVIEW_COUNT, SortDirection::Ascending);
    let page = client.query_database(&query).await?;

    Ok(page.results.iter().map(normalize_page).collect())
}

/// Applies a review update to a page.
///
/// The date defaults to the current time when `setDate` is absent or blank.
pub async fn update_word(
    client: &NotionClient,
    request: UpdateWordRequest,
) -> Result<UpdateWordResponse, ApiError> {
    let page_id = request
        .page_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::InvalidQuery("pageId required".to_string()))?;

    let mut new_count = None;
    if request.increment.unwrap_or(false) {
        let page = client.get_page(&page_id).await?;
        new_count = Some(review_count(&page.properties) + 1);
    }
    if request.set_review_count.is_some() {
        new_count = request.set_review_count;
    }

    let date = request
        .set_date
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(now_iso);

    let update = PageUpdate {
        review_count: new_count,
        date: Some(date.clone()),
    };
    client.update_page(&page_id, &update).await?;

    tracing::info!(
        "Updated word {} (reviewCount={:?}, date={})",
        page_id,
        new_count,
        date
    );

    Ok(UpdateWordResponse {
        ok: true,
        page_id,
        review_count: new_count,
        date,
    })
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
