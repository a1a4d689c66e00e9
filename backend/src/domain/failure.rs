//! Domain failure taxonomy.
//!
//! Failures are raised as close to their detection point as possible and are
//! transport agnostic: the API layer maps them onto HTTP responses. The set
//! of kinds is closed: adding a new kind means adding a variant here so the
//! classification in [`crate::domain::classify`] stays exhaustive.

use thiserror::Error;

/// External dependency that can become unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// The primary data store.
    Database,
    /// The Redis cache.
    Cache,
}

impl Dependency {
    /// Human-readable dependency name used in messages and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Cache => "cache",
        }
    }
}

/// Closed set of failure kinds raised by this service.
///
/// Instances are created at the point of detection, never mutated, and are
/// either caught higher in the call chain or allowed to reach the boundary
/// translator, which is their terminal consumer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// An external dependency (store or cache) is down or unreachable.
    #[error("{message}")]
    DependencyUnavailable {
        /// Which dependency failed.
        dependency: Dependency,
        /// Human-readable description of the failure.
        message: String,
    },

    /// The aggregate health determination failed.
    ///
    /// Carries its own HTTP status because callers may raise it with a
    /// non-default one; the default is 503.
    #[error("{message}")]
    HealthCheckFailed {
        /// Human-readable description of the failure.
        message: String,
        /// HTTP status to surface, defaulting to 503.
        status: u16,
    },

    /// A named external service is currently unavailable.
    #[error("{message}")]
    ServiceUnavailable {
        /// Name of the unavailable service.
        service: String,
        /// Human-readable description of the failure.
        message: String,
    },

    /// A failure that did not match any recognised kind.
    ///
    /// Produced by the pipeline interceptor when an opaque error flows out of
    /// business logic; carries the original message unchanged.
    #[error("{message}")]
    Unclassified {
        /// Message of the original, untyped failure.
        message: String,
    },
}

impl Failure {
    /// The primary data store is down or its state cannot be determined.
    pub fn database(message: impl Into<String>) -> Self {
        Self::DependencyUnavailable {
            dependency: Dependency::Database,
            message: message.into(),
        }
    }

    /// The Redis cache is down or not answering.
    pub fn cache(message: impl Into<String>) -> Self {
        Self::DependencyUnavailable {
            dependency: Dependency::Cache,
            message: message.into(),
        }
    }

    /// Aggregate health determination failed with the default 503 status.
    pub fn health_check(message: impl Into<String>) -> Self {
        Self::health_check_with_status(message, 503)
    }

    /// Aggregate health determination failed with an explicit status.
    pub fn health_check_with_status(message: impl Into<String>, status: u16) -> Self {
        Self::HealthCheckFailed {
            message: message.into(),
            status,
        }
    }

    /// A named external service is unavailable, with the default message.
    pub fn service_unavailable(service: impl Into<String>) -> Self {
        let service = service.into();
        let message = format!("{service} service is currently unavailable");
        Self::ServiceUnavailable { service, message }
    }

    /// A named external service is unavailable, with an explicit message.
    pub fn service_unavailable_with(
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ServiceUnavailable {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Wrap an opaque failure's message in a typed kind.
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::Unclassified {
            message: message.into(),
        }
    }

    /// Human-readable message carried by this failure.
    pub fn message(&self) -> &str {
        match self {
            Self::DependencyUnavailable { message, .. }
            | Self::HealthCheckFailed { message, .. }
            | Self::ServiceUnavailable { message, .. }
            | Self::Unclassified { message } => message.as_str(),
        }
    }
}
