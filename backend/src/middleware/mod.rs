//! Actix middleware for the failure-handling pipeline.

pub mod normalize;
pub mod translate;

pub use normalize::Normalize;
pub use translate::Translate;
