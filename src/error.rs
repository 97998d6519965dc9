//! HTTP-facing error taxonomy.
//!
//! Every failure that reaches a handler is turned into an [`ApiError`], which
//! renders as `{ "error": ... }` with a matching status code. Lower layers
//! (`notion`, `snapshot`) keep their own error enums and convert here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::notion::NotionError;
use crate::snapshot::SnapshotError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or wrong `x-api-key` while a key is configured.
    #[error("unauthorized")]
    Unauthorized,

    /// Request parameters do not describe a valid operation.
    #[error("{0}")]
    InvalidQuery(String),

    /// The snapshot file does not exist or cannot be read.
    #[error("{0}")]
    IndexUnavailable(String),

    /// The snapshot file exists but is not a valid document array.
    #[error("{0}")]
    IndexCorrupt(String),

    #[error("{0}")]
    NotFound(String),

    /// The remote source answered with a non-success status.
    #[error("upstream returned {status}")]
    Upstream { status: StatusCode, body: Value },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { status, .. } => *status,
            Self::IndexUnavailable(_) | Self::IndexCorrupt(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status, self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        let body = match self {
            Self::Upstream { body, .. } => json!({ "error": body }),
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<NotionError> for ApiError {
    fn from(err: NotionError) -> Self {
        match err {
            NotionError::Upstream { status, body } => Self::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                body,
            },
            other => Self::internal(other),
        }
    }
}

impl From<SnapshotError> for ApiError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::Unavailable { .. } => Self::IndexUnavailable(err.to_string()),
            SnapshotError::Corrupt { .. } => Self::IndexCorrupt(err.to_string()),
            SnapshotError::Write { .. } => Self::internal(err),
        }
    }
}
