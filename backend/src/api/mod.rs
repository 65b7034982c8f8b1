//! REST API modules.

pub mod error;
pub mod health;
pub mod restaurants;

pub use error::{ApiError, ApiResult};
