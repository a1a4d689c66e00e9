//! Postgres-backed connection state source.
//!
//! Wraps a `diesel-async`/`bb8` pool and reports store reachability from the
//! pool's live connection count. The pool is built unchecked so startup never
//! blocks on the database; [`PgStateSource::warm`] establishes the first
//! connection in the background.

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use tracing::warn;

use crate::domain::ports::{ConnectionState, ConnectionStateSource};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connection pool for PostgreSQL exposing its state to health checks.
#[derive(Clone)]
pub struct PgStateSource {
    pool: Pool<AsyncPgConnection>,
}

impl PgStateSource {
    /// Build a pool for `database_url` without connecting eagerly.
    pub fn new(database_url: &str) -> Self {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(DEFAULT_MAX_CONNECTIONS)
            .build_unchecked(manager);
        Self { pool }
    }

    /// Establish an initial connection so the first state poll reflects
    /// reality. Failure is logged, not fatal; the pool retries on use.
    pub async fn warm(&self) {
        if let Err(error) = self.pool.get().await {
            warn!(%error, "database warm-up connection failed");
        }
    }
}

impl ConnectionStateSource for PgStateSource {
    // Counts open pooled connections. After a successful warm-up a dead
    // database keeps counting until bb8 reaps the stale connections, so the
    // verdict can lag an outage by up to the pool's idle timeout. This
    // adapter never yields `Indeterminate`; the pool either holds an open
    // connection or it does not.
    fn connection_state(&self) -> ConnectionState {
        if self.pool.state().connections > 0 {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }
}
