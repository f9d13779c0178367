//! Error types and handling for `CityScout`

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the `CityScout` application
///
/// The three upstream failure classes (transport, non-2xx status, decode)
/// are deliberately kept flat: handlers treat them identically and render
/// each one as a gateway error.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure reaching an upstream provider
    #[error("upstream request failed: {source}")]
    Upstream {
        #[from]
        source: reqwest::Error,
    },

    /// Upstream provider answered with a non-success status
    #[error("upstream responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Upstream body could not be decoded into the expected shape
    #[error("failed to decode upstream response: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },

    /// A well-formed upstream body that cannot be mapped to an output record
    #[error("mapping error: {message}")]
    Mapping { message: String },

    /// Configuration-related errors
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl ApiError {
    /// Create a new mapping error
    pub fn mapping<S: Into<String>>(message: S) -> Self {
        Self::Mapping {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!(error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
