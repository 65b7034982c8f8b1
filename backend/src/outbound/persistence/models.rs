//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Restaurant, RestaurantDraft};

use super::schema::restaurants;

/// Row struct for reading from the restaurants table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RestaurantRow {
    pub id: i64,
    pub name: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub average_score_egg: Option<f64>,
    pub average_score_dairy: Option<f64>,
    pub average_score_peanut: Option<f64>,
    pub overall_score: Option<f64>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            zip_code: row.zip_code,
            country: row.country,
            city: row.city,
            average_score_egg: row.average_score_egg,
            average_score_dairy: row.average_score_dairy,
            average_score_peanut: row.average_score_peanut,
            overall_score: row.overall_score,
        }
    }
}

/// Insertable struct for creating new restaurant records.
///
/// Score columns are absent: a freshly created restaurant has no derived
/// scores yet and the create path never writes them.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = restaurants)]
pub(crate) struct NewRestaurantRow<'a> {
    pub name: Option<&'a str>,
    pub zip_code: Option<&'a str>,
    pub country: Option<&'a str>,
    pub city: Option<&'a str>,
}

impl<'a> NewRestaurantRow<'a> {
    pub fn from_draft(draft: &'a RestaurantDraft) -> Self {
        Self {
            name: draft.name.as_deref(),
            zip_code: draft.zip_code.as_deref(),
            country: draft.country.as_deref(),
            city: draft.city.as_deref(),
        }
    }
}

/// Changeset struct for updating existing restaurant records.
///
/// `treat_none_as_null` is required: reconciliation may legitimately clear a
/// stored name or postal code, so a `None` here must reach the database as
/// NULL instead of being skipped. Score columns are excluded so updates can
/// never touch them.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = restaurants)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct RestaurantChangeset<'a> {
    pub name: Option<&'a str>,
    pub zip_code: Option<&'a str>,
    pub country: Option<&'a str>,
    pub city: Option<&'a str>,
}

impl<'a> RestaurantChangeset<'a> {
    pub fn from_restaurant(restaurant: &'a Restaurant) -> Self {
        Self {
            name: restaurant.name.as_deref(),
            zip_code: restaurant.zip_code.as_deref(),
            country: restaurant.country.as_deref(),
            city: restaurant.city.as_deref(),
        }
    }
}
