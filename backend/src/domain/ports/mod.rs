//! Narrow interfaces to the external dependencies this service monitors.
//!
//! In hexagonal terms these are *driven* ports: the domain calls them without
//! knowing the backing infrastructure, and outbound adapters in
//! [`crate::outbound`] implement them. Each port carries its own error type
//! so adapters never leak client-library errors into the domain.

mod cache_ping;
mod connection_state;
mod identity_probe;

pub use cache_ping::{CachePing, CachePingError};
pub use connection_state::{ConnectionState, ConnectionStateSource};
pub use identity_probe::{IdentityProbe, IdentityProbeError};

#[cfg(test)]
pub use cache_ping::MockCachePing;
#[cfg(test)]
pub use connection_state::MockConnectionStateSource;
#[cfg(test)]
pub use identity_probe::MockIdentityProbe;
