//! Transport-agnostic restaurant core.
//!
//! Purpose: validation of write payloads, reconciliation of updates onto
//! stored records, and the read-query contract, all expressed against the
//! [`ports::RestaurantRepository`] boundary. Adapters on either side stay
//! free of business rules.

pub mod error;
pub mod ports;
pub mod reconcile;
pub mod restaurant;
pub mod service;
pub mod validation;

pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::reconcile::reconcile;
pub use self::restaurant::{Restaurant, RestaurantDraft};
pub use self::service::RestaurantService;
