use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::*;
use super::{NotionError, PageSource};
use crate::config::NotionConfig;

pub const NOTION_VERSION: &str = "2022-06-28";

/// Thin HTTP client for the Notion REST API, bound to one database.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    database_id: String,
}

impl NotionClient {
    pub fn new(config: &NotionConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: &NotionConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            database_id: config.database_id.clone(),
        }
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
    }

    /// `POST /databases/{id}/query`
    pub async fn query_database(&self, query: &DatabaseQuery) -> Result<QueryPage, NotionError> {
        let path = format!("/databases/{}/query", self.database_id);
        let request = self.request(Method::POST, &path).json(query);
        send(request).await
    }

    /// `GET /pages/{id}`
    pub async fn get_page(&self, page_id: &str) -> Result<RawPage, NotionError> {
        let request = self.request(Method::GET, &format!("/pages/{}", page_id));
        send(request).await
    }

    /// `PATCH /pages/{id}` with the given property changes.
    pub async fn update_page(&self, page_id: &str, update: &PageUpdate) -> Result<Value, NotionError> {
        let request = self
            .request(Method::PATCH, &format!("/pages/{}", page_id))
            .json(&update.to_body());
        send(request).await
    }
}

#[async_trait]
impl PageSource for NotionClient {
    async fn fetch_page(
        &self,
        cursor: Option<String>,
        page_size: u32,
    ) -> Result<QueryPage, NotionError> {
        self.query_database(&DatabaseQuery::page(page_size, cursor))
            .await
    }
}

/// Sends the request and decodes the JSON body.
///
/// Any non-success status becomes [`NotionError::Upstream`] carrying the
/// upstream body (parsed as JSON when possible, raw text otherwise).
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, NotionError> {
    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let body = serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        tracing::warn!("Notion API returned {}: {}", status, body);
        return Err(NotionError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
