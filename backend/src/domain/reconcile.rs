//! Update reconciliation: merge an inbound payload onto a stored record.
//!
//! Each field follows its own merge rule:
//!
//! - `name` and `zip_code` are equality gated: assigned only when the
//!   incoming value differs from the stored one. The comparison is null safe
//!   and the assignment is unconditional on inequality, so an absent incoming
//!   value does replace a present stored one. This reproduces the service's
//!   historical behaviour; see DESIGN.md for the open question around it.
//! - `country` is presence gated: an absent incoming value leaves the stored
//!   value untouched.
//! - `city`, the identifier, and every score field pass through unchanged.
//!   Scores are owned by the external aggregation process.

use super::{Restaurant, RestaurantDraft};

/// Merge `incoming` onto `stored` and return the record to persist.
///
/// Pure and total: validation has already happened and no failure path
/// exists here.
///
/// ```
/// use backend::domain::{reconcile, Restaurant, RestaurantDraft};
///
/// let stored = Restaurant {
///     id: 1,
///     name: Some("A".into()),
///     zip_code: Some("1".into()),
///     country: Some("US".into()),
///     city: None,
///     average_score_egg: None,
///     average_score_dairy: None,
///     average_score_peanut: None,
///     overall_score: None,
/// };
/// let incoming = RestaurantDraft {
///     name: Some("A".into()),
///     zip_code: Some("2".into()),
///     country: None,
///     city: None,
/// };
///
/// let merged = reconcile(stored, &incoming);
/// assert_eq!(merged.zip_code.as_deref(), Some("2"));
/// assert_eq!(merged.country.as_deref(), Some("US"));
/// ```
pub fn reconcile(mut stored: Restaurant, incoming: &RestaurantDraft) -> Restaurant {
    if stored.name != incoming.name {
        stored.name = incoming.name.clone();
    }
    if stored.zip_code != incoming.zip_code {
        stored.zip_code = incoming.zip_code.clone();
    }
    if incoming.country.is_some() {
        stored.country = incoming.country.clone();
    }
    stored
}
