//! Port abstraction for restaurant persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Restaurant, RestaurantDraft};

/// Persistence errors raised by restaurant repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RestaurantRepositoryError {
    /// Repository connection could not be established.
    #[error("restaurant repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("restaurant repository query failed: {message}")]
    Query { message: String },
}

impl RestaurantRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for restaurant storage and retrieval.
///
/// The list operations order by restaurant name in the requested direction,
/// except [`RestaurantRepository::list_with_scores_by_zip_code`], which
/// orders by postal code descending. An empty result from any list or name
/// lookup is a successful outcome, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Insert a new record; the store assigns the identifier.
    async fn insert(&self, draft: &RestaurantDraft)
        -> Result<Restaurant, RestaurantRepositoryError>;

    /// Persist an updated record, matched by its identifier.
    async fn save(&self, restaurant: &Restaurant)
        -> Result<Restaurant, RestaurantRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, RestaurantRepositoryError>;

    /// Fetch a record by exact name.
    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Restaurant>, RestaurantRepositoryError>;

    /// True when a record with this identity pair already exists.
    ///
    /// Comparison is null safe: an absent name matches an absent stored name.
    async fn exists_by_name_and_zip(
        &self,
        name: Option<String>,
        zip_code: Option<String>,
    ) -> Result<bool, RestaurantRepositoryError>;

    /// All records for a country, ordered by name.
    async fn list_by_country(
        &self,
        country: &str,
        ascending: bool,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;

    /// All records for a city, ordered by name.
    async fn list_by_city(
        &self,
        city: &str,
        ascending: bool,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;

    /// All records for a postal code, ordered by name.
    async fn list_by_zip_code(
        &self,
        zip_code: &str,
        ascending: bool,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;

    /// Records for a postal code carrying at least one per-allergen average,
    /// ordered by postal code descending.
    async fn list_with_scores_by_zip_code(
        &self,
        zip_code: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;

    /// Every record in store iteration order.
    async fn list_all(&self) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;
}
