//! Outbound adapters for external dependencies.
//!
//! Each adapter implements one domain port and owns the transport details
//! for its dependency. Nothing in here makes classification decisions;
//! adapters report raw reachability and the domain decides what it means.

pub mod cache;
pub mod identity;
pub mod store;

pub use cache::RedisCachePing;
pub use identity::{HttpIdentityProbe, IdentityProbeBuildError, IdentitySettings};
pub use store::PgStateSource;
