//! Dependency health probe.
//!
//! Checks each monitored external dependency with a minimal liveness call and
//! aggregates the results into a single report. Probing fails fast: the
//! first dependency found down raises its typed [`Failure`] immediately, so a
//! caller learns *which* dependency broke rather than receiving a partial
//! report.

use std::sync::Arc;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::failure::Failure;
use crate::domain::ports::{CachePing, ConnectionState, ConnectionStateSource, IdentityProbe};

/// Liveness status of one monitored dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
    /// The dependency answered its liveness call.
    Connected,
    /// The dependency definitively reported itself down.
    Disconnected,
    /// The liveness call itself failed.
    Error,
}

/// Overall verdict derived from the per-dependency statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    /// Every monitored dependency is connected.
    Healthy,
    /// At least one dependency is not connected.
    Unhealthy,
}

/// Aggregated health report, constructed fresh per health request.
///
/// ## Invariants
/// - `status` is [`OverallStatus::Healthy`] iff every per-dependency status
///   is exactly [`DependencyStatus::Connected`]; the probe raises a typed
///   failure instead of returning any other combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    /// Overall verdict.
    pub status: OverallStatus,
    /// RFC 3339 UTC timestamp of the probe.
    pub timestamp: String,
    /// Whole seconds since the service started.
    pub uptime: u64,
    /// Primary store status.
    pub database: DependencyStatus,
    /// Cache status.
    pub redis: DependencyStatus,
    /// Identity provider status.
    pub auth: DependencyStatus,
}

/// Orchestrates liveness checks against the monitored dependencies.
pub struct HealthService {
    store: Arc<dyn ConnectionStateSource>,
    cache: Arc<dyn CachePing>,
    identity: Arc<dyn IdentityProbe>,
    started_at: Instant,
}

impl HealthService {
    /// Build a probe over the three monitored dependencies.
    pub fn new(
        store: Arc<dyn ConnectionStateSource>,
        cache: Arc<dyn CachePing>,
        identity: Arc<dyn IdentityProbe>,
    ) -> Self {
        Self {
            store,
            cache,
            identity,
            started_at: Instant::now(),
        }
    }

    /// Probe every dependency and aggregate the verdict.
    ///
    /// # Errors
    ///
    /// Returns the first failing dependency's typed [`Failure`]; remaining
    /// dependencies are not probed once one has failed.
    pub async fn check_health(&self) -> Result<HealthReport, Failure> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let uptime = self.started_at.elapsed().as_secs();

        let database = match self.store.connection_state() {
            ConnectionState::Connected => DependencyStatus::Connected,
            ConnectionState::Disconnected => {
                return Err(Failure::database("database is disconnected"));
            }
            ConnectionState::Indeterminate => {
                return Err(Failure::database("database connection check failed"));
            }
        };

        let redis = match self.cache.ping().await {
            Ok(()) => DependencyStatus::Connected,
            Err(_) => return Err(Failure::cache("cache connection check failed")),
        };

        let auth = match self.identity.probe().await {
            Ok(()) => DependencyStatus::Connected,
            Err(_) => return Err(Failure::service_unavailable("identity provider")),
        };

        // Unreachable while each probe above fails fast; kept as a final
        // guard so an unhealthy combination can never leave this function as
        // a success.
        if [database, redis, auth]
            .iter()
            .any(|status| *status != DependencyStatus::Connected)
        {
            return Err(Failure::health_check("One or more services are unavailable"));
        }

        Ok(HealthReport {
            status: OverallStatus::Healthy,
            timestamp,
            uptime,
            database,
            redis,
            auth,
        })
    }
}
