//! Port for the cache's zero-argument liveness call.

use async_trait::async_trait;

/// Errors surfaced by the cache liveness adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CachePingError {
    /// The cache backend is unreachable or refused the ping.
    #[error("cache ping failed: {message}")]
    Backend {
        /// Description of the underlying client failure.
        message: String,
    },
}

impl CachePingError {
    /// Create a backend error with the given message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Cache client capable of a zero-argument liveness call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CachePing: Send + Sync {
    /// Ping the cache; succeeds when the cache answers, errors otherwise.
    async fn ping(&self) -> Result<(), CachePingError>;
}
