//! Domain layer: failure taxonomy, classification, and the health probe.
//!
//! Everything here is transport agnostic. The API layer maps these types
//! onto HTTP responses; outbound adapters implement the ports.

pub mod classify;
pub mod failure;
pub mod health;
pub mod ports;

pub use classify::Classification;
pub use failure::{Dependency, Failure};
pub use health::{DependencyStatus, HealthReport, HealthService, OverallStatus};
