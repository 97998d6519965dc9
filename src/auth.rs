//! Shared-secret API key guard.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Whether requests must present the configured `x-api-key`.
///
/// `Open` is chosen when no secret is configured; that is an operator
/// decision, not a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPolicy {
    Open,
    RequireKey(String),
}

impl AuthPolicy {
    pub fn from_secret(secret: Option<String>) -> Self {
        match secret {
            Some(key) if !key.is_empty() => Self::RequireKey(key),
            _ => Self::Open,
        }
    }

    pub fn check(&self, presented: Option<&str>) -> Result<(), ApiError> {
        match self {
            Self::Open => Ok(()),
            Self::RequireKey(expected) if presented == Some(expected.as_str()) => Ok(()),
            Self::RequireKey(_) => Err(ApiError::Unauthorized),
        }
    }
}

/// Router middleware applying the policy to every guarded route.
pub async fn require_api_key(
    State(policy): State<AuthPolicy>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match policy.check(presented) {
        Ok(()) => next.run(request).await,
        Err(err) => {
            tracing::warn!("Rejected request to {}: bad or missing api key", request.uri().path());
            err.into_response()
        }
    }
}
