//! Word Proxy Tests
//!
//! Runs the `get-words` / `update-word` logic against a mocked Notion API.

#[cfg(test)]
mod tests {
    use crate::config::NotionConfig;
    use crate::error::ApiError;
    use crate::notion::NotionClient;
    use crate::words::service::{fetch_words, now_iso, update_word};
    use crate::words::types::UpdateWordRequest;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> NotionClient {
        NotionClient::new(&NotionConfig {
            token: "secret_x".to_string(),
            database_id: "db1".to_string(),
            base_url: server.uri(),
        })
    }

    async fn mount_page_with_count(server: &MockServer, page_id: &str, count: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/pages/{}", page_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": page_id,
                "properties": { "ReviewCount": { "number": count } }
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    // ============================================================
    // GET-WORDS
    // ============================================================

    #[tokio::test]
    async fn test_fetch_words_sorts_by_review_count() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/databases/db1/query"))
            .and(body_json(json!({
                "page_size": 3,
                "sorts": [{ "property": "ReviewCount", "direction": "ascending" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "id": "a", "properties": { "word": { "title": [{ "plain_text": "cogent" }] } } },
                    { "id": "b", "properties": { "ReviewCount": { "number": 4 } } }
                ],
                "has_more": true,
                "next_cursor": "zzz"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let words = fetch_words(&client_for(&server).await, 3).await.unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "cogent");
        assert_eq!(words[1].review_count, 4);
        assert!(words[0].raw.is_some());
    }

    #[tokio::test]
    async fn test_fetch_words_passes_upstream_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/databases/db1/query"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "code": "validation_error" })),
            )
            .mount(&server)
            .await;

        let err = fetch_words(&client_for(&server).await, 10).await.unwrap_err();

        match err {
            ApiError::Upstream { status, body } => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(body["code"], "validation_error");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    // ============================================================
    // UPDATE-WORD
    // ============================================================

    #[tokio::test]
    async fn test_update_requires_page_id() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        let err = update_word(&client, UpdateWordRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidQuery(ref m) if m == "pageId required"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_increment_reads_then_patches() {
        let server = MockServer::start().await;
        mount_page_with_count(&server, "p1", 4).await;
        Mock::given(method("PATCH"))
            .and(path("/pages/p1"))
            .and(body_json(json!({
                "properties": {
                    "ReviewCount": { "number": 5 },
                    "Date": { "date": { "start": "2024-06-01" } }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "p1" })))
            .expect(1)
            .mount(&server)
            .await;

        let response = update_word(
            &client_for(&server).await,
            UpdateWordRequest {
                page_id: Some("p1".to_string()),
                increment: Some(true),
                set_review_count: None,
                set_date: Some("2024-06-01".to_string()),
            },
        )
        .await
        .unwrap();

        assert!(response.ok);
        assert_eq!(response.page_id, "p1");
        assert_eq!(response.review_count, Some(5));
        assert_eq!(response.date, "2024-06-01");
    }

    #[tokio::test]
    async fn test_explicit_count_wins_but_read_still_happens() {
        let server = MockServer::start().await;
        mount_page_with_count(&server, "p1", 4).await;
        Mock::given(method("PATCH"))
            .and(path("/pages/p1"))
            .and(body_json(json!({
                "properties": {
                    "ReviewCount": { "number": 9 },
                    "Date": { "date": { "start": "2024-06-01" } }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "p1" })))
            .expect(1)
            .mount(&server)
            .await;

        let response = update_word(
            &client_for(&server).await,
            UpdateWordRequest {
                page_id: Some("p1".to_string()),
                increment: Some(true),
                set_review_count: Some(9),
                set_date: Some("2024-06-01".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.review_count, Some(9));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_date_only_update_defaults_to_now() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/pages/p2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "p2" })))
            .expect(1)
            .mount(&server)
            .await;

        let response = update_word(
            &client_for(&server).await,
            UpdateWordRequest {
                page_id: Some("p2".to_string()),
                set_date: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(response.review_count, None);
        assert!(chrono::DateTime::parse_from_rfc3339(&response.date).is_ok());
        assert!(response.date.ends_with('Z'));

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body["properties"].get("ReviewCount").is_none());
        assert_eq!(body["properties"]["Date"]["date"]["start"], response.date.as_str());
    }

    #[tokio::test]
    async fn test_failed_read_aborts_before_patch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pages/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "code": "object_not_found" })))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = update_word(
            &client_for(&server).await,
            UpdateWordRequest {
                page_id: Some("gone".to_string()),
                increment: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code().as_u16(), 404);
    }

    #[test]
    fn test_null_increment_is_treated_as_false() {
        let request: UpdateWordRequest = serde_json::from_value(json!({
            "pageId": "p1",
            "increment": null,
            "setReviewCount": 2
        }))
        .unwrap();

        assert_eq!(request.increment, None);
        assert_eq!(request.set_review_count, Some(2));
    }

    #[tokio::test]
    async fn test_null_increment_skips_page_read() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/pages/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "p1" })))
            .expect(1)
            .mount(&server)
            .await;

        let request: UpdateWordRequest = serde_json::from_value(json!({
            "pageId": "p1",
            "increment": null,
            "setDate": "2024-06-01"
        }))
        .unwrap();
        let response = update_word(&client_for(&server).await, request).await.unwrap();

        assert_eq!(response.review_count, None);
        server.verify().await;
    }

    #[test]
    fn test_now_iso_has_millisecond_precision() {
        let now = now_iso();
        // 2024-01-01T00:00:00.000Z
        assert_eq!(now.len(), 24);
        assert_eq!(&now[19..20], ".");
    }
}
