//! Redis-backed cache liveness probe.

use async_trait::async_trait;
use bb8_redis::{RedisConnectionManager, bb8, redis};

use crate::domain::ports::{CachePing, CachePingError};

const DEFAULT_MAX_CONNECTIONS: u32 = 4;

/// Cache adapter answering pings over a pooled Redis connection.
///
/// The pool is built unchecked so startup never blocks on Redis; the first
/// ping pays the connection cost instead.
#[derive(Clone)]
pub struct RedisCachePing {
    pool: bb8::Pool<RedisConnectionManager>,
}

impl RedisCachePing {
    /// Build a pooled client for `redis_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CachePingError::Backend`] when the URL does not parse.
    pub fn new(redis_url: &str) -> Result<Self, CachePingError> {
        let manager = RedisConnectionManager::new(redis_url)
            .map_err(|error| CachePingError::backend(error.to_string()))?;
        let pool = bb8::Pool::builder()
            .max_size(DEFAULT_MAX_CONNECTIONS)
            .build_unchecked(manager);
        Ok(Self { pool })
    }
}

#[async_trait]
impl CachePing for RedisCachePing {
    async fn ping(&self) -> Result<(), CachePingError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|error| CachePingError::backend(error.to_string()))?;
        let reply: String = redis::cmd("PING")
            .query_async(&mut *conn)
            .await
            .map_err(|error| CachePingError::backend(error.to_string()))?;
        if reply == "PONG" {
            Ok(())
        } else {
            Err(CachePingError::backend(format!(
                "unexpected ping reply: {reply}"
            )))
        }
    }
}
