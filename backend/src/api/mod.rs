//! REST API modules.

pub mod envelope;
pub mod error;
pub mod health;

pub use envelope::{ApiResponse, ErrorDetail};
pub use error::ApiResult;
