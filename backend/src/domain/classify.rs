//! Failure classification.
//!
//! Maps any raised failure (typed [`Failure`], generic error, or an opaque
//! value that is not error-shaped) onto a normalised descriptor carrying the
//! HTTP status, a fixed human category label, and a stable machine-readable
//! code that clients branch on. The status is held as a bare `u16` so the
//! domain stays free of transport types.

use crate::domain::failure::{Dependency, Failure};

/// Stable machine-readable code for a database outage.
pub const DB_CONNECTION_FAILED: &str = "DB_CONNECTION_FAILED";
/// Stable machine-readable code for a Redis outage.
pub const REDIS_CONNECTION_FAILED: &str = "REDIS_CONNECTION_FAILED";
/// Stable machine-readable code for a failed aggregate health determination.
pub const HEALTH_CHECK_FAILED: &str = "HEALTH_CHECK_FAILED";
/// Stable machine-readable code for a named unavailable service.
pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
/// Stable machine-readable code for a generic, error-shaped failure.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
/// Stable machine-readable code for a raised value that is not an error.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

const INTERNAL_CATEGORY: &str = "Internal Server Error";

/// Normalised descriptor of a classified failure.
///
/// ## Invariants
/// - `status` is always a valid HTTP status in `[400, 599]`.
/// - `code` and `category` come from the fixed table below and never vary for
///   a given failure kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// HTTP status to respond with.
    pub status: u16,
    /// Human-readable message, passed through from the failure.
    pub message: String,
    /// Fixed human-readable category label.
    pub category: &'static str,
    /// Stable machine-readable code for client-side branching.
    pub code: &'static str,
}

impl Classification {
    /// Classify a recognised failure kind via the canonical table.
    pub fn of_failure(failure: &Failure) -> Self {
        match failure {
            Failure::DependencyUnavailable {
                dependency: Dependency::Database,
                message,
            } => Self {
                status: 503,
                message: message.clone(),
                category: "Database Connection Error",
                code: DB_CONNECTION_FAILED,
            },
            Failure::DependencyUnavailable {
                dependency: Dependency::Cache,
                message,
            } => Self {
                status: 503,
                message: message.clone(),
                category: "Redis Connection Error",
                code: REDIS_CONNECTION_FAILED,
            },
            Failure::HealthCheckFailed { message, status } => Self {
                status: *status,
                message: message.clone(),
                category: "Health Check Error",
                code: HEALTH_CHECK_FAILED,
            },
            Failure::ServiceUnavailable { message, .. } => Self {
                status: 503,
                message: message.clone(),
                category: "Service Unavailable",
                code: SERVICE_UNAVAILABLE,
            },
            Failure::Unclassified { message } => Self::internal(message.clone()),
        }
    }

    /// Classify any error value.
    ///
    /// Recognised [`Failure`]s keep their canonical mapping; everything else
    /// takes the generic branch with its message passed through.
    pub fn of_error(error: &(dyn std::error::Error + 'static)) -> Self {
        match error.downcast_ref::<Failure>() {
            Some(failure) => Self::of_failure(failure),
            None => Self::internal(error.to_string()),
        }
    }

    /// The generic branch: an error-shaped failure with only a message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
            category: INTERNAL_CATEGORY,
            code: INTERNAL_ERROR,
        }
    }

    /// The fallback branch for raised values that are not error-shaped.
    ///
    /// The original payload is intentionally discarded so non-error values
    /// never leak to clients.
    pub fn opaque() -> Self {
        Self {
            status: 500,
            message: "An unexpected error occurred".into(),
            category: INTERNAL_CATEGORY,
            code: UNKNOWN_ERROR,
        }
    }

    /// Whether the root cause is a transient dependency outage.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.code,
            DB_CONNECTION_FAILED | REDIS_CONNECTION_FAILED | SERVICE_UNAVAILABLE
        )
    }

    /// Whether the classified status is a 4xx client error.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Whether the classified status is a 5xx server error.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

#[cfg(test)]
mod tests;
