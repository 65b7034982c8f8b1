//! Restaurant domain service.
//!
//! Drives the [`RestaurantRepository`] port: validates write payloads,
//! reconciles updates onto stored records, and dispatches the read queries.
//! Transport concerns stay out; adapters translate the returned
//! [`DomainError`] values.

use std::sync::Arc;

use serde_json::json;

use super::ports::{RestaurantRepository, RestaurantRepositoryError};
use super::reconcile::reconcile;
use super::validation::validate_zip_code;
use super::{DomainError, Restaurant, RestaurantDraft};

/// Service implementing the restaurant write and read operations.
#[derive(Clone)]
pub struct RestaurantService {
    repository: Arc<dyn RestaurantRepository>,
}

impl RestaurantService {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        Self { repository }
    }

    fn map_repository_error(error: RestaurantRepositoryError) -> DomainError {
        match error {
            RestaurantRepositoryError::Connection { message } => DomainError::service_unavailable(
                format!("restaurant repository unavailable: {message}"),
            ),
            RestaurantRepositoryError::Query { message } => {
                DomainError::internal(format!("restaurant repository error: {message}"))
            }
        }
    }

    /// Validate a write payload: postal-code format first, then the
    /// duplicate check on the identity pair. The first failure wins and the
    /// duplicate lookup is skipped for a malformed code.
    ///
    /// The duplicate window is advisory only: the check and the subsequent
    /// write are separate statements, so two concurrent writes for the same
    /// identity pair can both pass. See the behaviour tests.
    async fn validate_candidate(&self, candidate: &RestaurantDraft) -> Result<(), DomainError> {
        validate_zip_code(candidate.zip_code.as_deref())?;

        let exists = self
            .repository
            .exists_by_name_and_zip(candidate.name.clone(), candidate.zip_code.clone())
            .await
            .map_err(Self::map_repository_error)?;
        if exists {
            return Err(DomainError::duplicate_restaurant(
                "The provided restaurant already exists in the database. \
                 Please enter a different one.",
            )
            .with_details(json!({
                "name": candidate.name,
                "zipCode": candidate.zip_code,
            })));
        }
        Ok(())
    }

    /// Create a restaurant after full validation.
    pub async fn create(&self, candidate: RestaurantDraft) -> Result<Restaurant, DomainError> {
        self.validate_candidate(&candidate).await?;
        self.repository
            .insert(&candidate)
            .await
            .map_err(Self::map_repository_error)
    }

    /// Update the restaurant at `id` by reconciling `incoming` onto the
    /// stored record.
    ///
    /// Validation runs against the incoming payload before the target is
    /// looked up, so an update that keeps its own name and postal code is
    /// rejected as a duplicate of itself. That is observable historical
    /// behaviour, kept deliberately; DESIGN.md flags it as a defect
    /// candidate.
    pub async fn update(
        &self,
        id: i64,
        incoming: RestaurantDraft,
    ) -> Result<Restaurant, DomainError> {
        self.validate_candidate(&incoming).await?;

        let stored = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| {
                DomainError::not_found("The provided id doesn't exist in the database.")
            })?;

        let merged = reconcile(stored, &incoming);
        self.repository
            .save(&merged)
            .await
            .map_err(Self::map_repository_error)
    }

    /// Fetch a restaurant by identifier; a miss is a [`DomainError`] of kind
    /// not-found.
    pub async fn get_by_id(&self, id: i64) -> Result<Restaurant, DomainError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| DomainError::not_found("Restaurant not found in database."))
    }

    /// Fetch a restaurant by exact name; a miss is a successful empty
    /// result, not an error.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Restaurant>, DomainError> {
        self.repository
            .find_by_name(name)
            .await
            .map_err(Self::map_repository_error)
    }

    /// List restaurants for a country, ordered by name.
    pub async fn list_by_country(
        &self,
        country: &str,
        ascending: bool,
    ) -> Result<Vec<Restaurant>, DomainError> {
        self.repository
            .list_by_country(country, ascending)
            .await
            .map_err(Self::map_repository_error)
    }

    /// List restaurants for a city, ordered by name.
    pub async fn list_by_city(
        &self,
        city: &str,
        ascending: bool,
    ) -> Result<Vec<Restaurant>, DomainError> {
        self.repository
            .list_by_city(city, ascending)
            .await
            .map_err(Self::map_repository_error)
    }

    /// List restaurants for a postal code, ordered by name.
    ///
    /// The filter value goes through the format check before the query runs.
    pub async fn list_by_zip_code(
        &self,
        zip_code: &str,
        ascending: bool,
    ) -> Result<Vec<Restaurant>, DomainError> {
        validate_zip_code(Some(zip_code))?;
        self.repository
            .list_by_zip_code(zip_code, ascending)
            .await
            .map_err(Self::map_repository_error)
    }

    /// List restaurants for a postal code that carry at least one
    /// per-allergen average score, ordered by postal code descending.
    pub async fn list_with_scores_by_zip_code(
        &self,
        zip_code: &str,
    ) -> Result<Vec<Restaurant>, DomainError> {
        validate_zip_code(Some(zip_code))?;
        self.repository
            .list_with_scores_by_zip_code(zip_code)
            .await
            .map_err(Self::map_repository_error)
    }

    /// List every restaurant in store iteration order.
    pub async fn list_all(&self) -> Result<Vec<Restaurant>, DomainError> {
        self.repository
            .list_all()
            .await
            .map_err(Self::map_repository_error)
    }
}
