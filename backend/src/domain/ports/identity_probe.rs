//! Port for the identity provider's liveness call.

use async_trait::async_trait;

/// Errors surfaced by the identity-provider liveness adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityProbeError {
    /// The provider could not be reached at the transport level.
    #[error("identity provider unreachable: {message}")]
    Transport {
        /// Description of the underlying transport failure.
        message: String,
    },
    /// The provider answered with a non-success HTTP status.
    #[error("identity provider answered with status {status}")]
    Status {
        /// HTTP status returned by the provider.
        status: u16,
    },
}

impl IdentityProbeError {
    /// Create a transport error with the given message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a status error for the given HTTP status.
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }
}

/// Identity-provider client used purely as a liveness probe.
///
/// The underlying call is an authenticated "get current user" equivalent;
/// only success/failure matters, the response payload is unused.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProbe: Send + Sync {
    /// Probe the provider; succeeds when it answers, errors otherwise.
    async fn probe(&self) -> Result<(), IdentityProbeError>;
}
