//! Restaurant aggregate and write payloads.
//!
//! Field names in the serialised form (`zipCode`, `averageScoreEgg`, ...) are
//! the canonical contract surface shared with clients and must not drift.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A restaurant record as stored and returned to clients.
///
/// The backing columns carry no NOT NULL constraints, so every attribute
/// other than the identifier is optional. The score fields are derived by an
/// external aggregation process; the create and update paths never write
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Store-assigned identifier; immutable and never taken from a payload.
    #[schema(example = 42)]
    pub id: i64,
    #[schema(example = "Trattoria Da Enzo")]
    pub name: Option<String>,
    #[schema(example = "90210")]
    pub zip_code: Option<String>,
    #[schema(example = "US")]
    pub country: Option<String>,
    #[schema(example = "Beverly Hills")]
    pub city: Option<String>,
    /// Derived egg-allergy average; read-only for this service.
    pub average_score_egg: Option<f64>,
    /// Derived dairy-allergy average; read-only for this service.
    pub average_score_dairy: Option<f64>,
    /// Derived peanut-allergy average; read-only for this service.
    pub average_score_peanut: Option<f64>,
    /// Derived overall score; read-only for this service.
    pub overall_score: Option<f64>,
}

impl Restaurant {
    /// True when at least one of the per-allergen averages is present.
    ///
    /// The "with scores" listing filters on exactly this predicate.
    pub fn has_any_average_score(&self) -> bool {
        self.average_score_egg.is_some()
            || self.average_score_dairy.is_some()
            || self.average_score_peanut.is_some()
    }
}

/// Client-supplied restaurant payload for create and update requests.
///
/// Score fields are deliberately absent: they are derived elsewhere and an
/// inbound payload cannot set them. Every field is optional so partial
/// update bodies deserialise; the reconciliation rules in
/// [`crate::domain::reconcile`] decide what an absent field means per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDraft {
    #[schema(example = "Trattoria Da Enzo")]
    pub name: Option<String>,
    #[schema(example = "90210")]
    pub zip_code: Option<String>,
    #[schema(example = "US")]
    pub country: Option<String>,
    #[schema(example = "Beverly Hills")]
    pub city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_restaurant() -> Restaurant {
        Restaurant {
            id: 1,
            name: Some("Trattoria".to_owned()),
            zip_code: Some("90210".to_owned()),
            country: None,
            city: None,
            average_score_egg: None,
            average_score_dairy: None,
            average_score_peanut: None,
            overall_score: None,
        }
    }

    #[test]
    fn serialises_with_camel_case_field_names() {
        let mut restaurant = bare_restaurant();
        restaurant.average_score_egg = Some(4.5);

        let value = serde_json::to_value(&restaurant).expect("serialise restaurant");
        assert_eq!(value["zipCode"], "90210");
        assert_eq!(value["averageScoreEgg"], 4.5);
    }

    #[test]
    fn has_any_average_score_ignores_overall_score() {
        let mut restaurant = bare_restaurant();
        restaurant.overall_score = Some(3.0);
        assert!(!restaurant.has_any_average_score());

        restaurant.average_score_peanut = Some(2.0);
        assert!(restaurant.has_any_average_score());
    }

    #[test]
    fn draft_ignores_score_fields_in_the_payload() {
        let draft: RestaurantDraft = serde_json::from_str(
            r#"{ "name": "Trattoria", "zipCode": "90210", "averageScoreEgg": 5.0 }"#,
        )
        .expect("deserialise draft");

        assert_eq!(draft.name.as_deref(), Some("Trattoria"));
        assert_eq!(draft.zip_code.as_deref(), Some("90210"));
        assert_eq!(draft.country, None);
    }

    #[test]
    fn draft_accepts_partial_payloads() {
        let draft: RestaurantDraft =
            serde_json::from_str(r#"{ "country": "FR" }"#).expect("deserialise draft");
        assert_eq!(draft.country.as_deref(), Some("FR"));
        assert_eq!(draft.name, None);
    }
}
