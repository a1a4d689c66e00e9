//! Uniform success/error JSON envelope returned to clients.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error payload embedded in an error envelope.
///
/// `path` and `method` are omitted when no request context exists, matching
/// the failure-log contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    /// Classified HTTP status code.
    pub status_code: u16,
    /// RFC 3339 UTC timestamp of the failure.
    pub timestamp: String,
    /// Request path, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Request method, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Fixed human-readable category label.
    pub category: String,
}

impl ErrorDetail {
    /// Build an error detail with a fresh timestamp.
    pub fn new(
        status_code: u16,
        path: Option<String>,
        method: Option<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            status_code,
            timestamp: now(),
            path,
            method,
            category: category.into(),
        }
    }
}

/// Envelope wrapping every response body.
///
/// ## Invariants
/// - `success == true` implies `error` is absent and vice versa.
/// - `timestamp` is freshly generated at construction, never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T = serde_json::Value> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// Payload, present on success only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error detail, present on failure only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
    /// RFC 3339 UTC timestamp of envelope construction.
    pub timestamp: String,
    /// Request path, when the builder had one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Build a success envelope around `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            timestamp: now(),
            path: None,
        }
    }

    /// Build an error envelope around `detail`.
    pub fn error(message: impl Into<String>, detail: ErrorDetail) -> Self {
        let path = detail.path.clone();
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(detail),
            timestamp: now(),
            path,
        }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
