use serde_json::Value;

use super::types::*;
use crate::snapshot::types::Document;

/// Turns a raw Notion page into a [`Document`].
///
/// Shared by the live `/get-words` proxy and the snapshot builder. Missing
/// properties never fail: text falls back to `""`, the review count to 0,
/// the nullable fields to `None` and the tags to an empty list.
pub fn normalize_page(page: &RawPage) -> Document {
    let props = &page.properties;

    Document {
        id: page.id.clone(),
        page_id: page.id.clone(),
        word: first_plain_text(props, PROP_WORD, "title"),
        description: first_plain_text(props, PROP_DESCRIPTION, "rich_text"),
        example: first_plain_text(props, PROP_EXAMPLE, "rich_text"),
        review_count: review_count(props),
        date: props
            .pointer(&format!("/{}/date/start", PROP_DATE))
            .and_then(Value::as_str)
            .map(str::to_string),
        relevance: props
            .pointer(&format!("/{}/select/name", PROP_RELEVANCE))
            .and_then(Value::as_str)
            .map(str::to_string),
        tags: multi_select_names(props, PROP_TYPE),
        raw: Some(if props.is_null() {
            Value::Object(Default::default())
        } else {
            props.clone()
        }),
    }
}

/// Reads `props[name][kind][0].plain_text`.
fn first_plain_text(props: &Value, name: &str, kind: &str) -> String {
    props
        .get(name)
        .and_then(|p| p.get(kind))
        .and_then(|fragments| fragments.get(0))
        .and_then(|fragment| fragment.get("plain_text"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Reads the review count, coercing it into a non-negative integer.
pub fn review_count(props: &Value) -> u64 {
    let number = props
        .get(PROP_REVIEW_COUNT)
        .and_then(|p| p.get("number"));

    match number {
        Some(n) => match n.as_u64() {
            Some(count) => count,
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && *f > 0.0)
                .map(|f| f.trunc() as u64)
                .unwrap_or(0),
        },
        None => 0,
    }
}

fn multi_select_names(props: &Value, name: &str) -> Vec<String> {
    props
        .get(name)
        .and_then(|p| p.get("multi_select"))
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .filter_map(|option| option.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
