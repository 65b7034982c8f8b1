//! PostgreSQL-backed `RestaurantRepository` implementation using Diesel ORM.
//!
//! A thin adapter: translates between Diesel rows and domain types and maps
//! database failures to the port error. No business logic lives here; the
//! duplicate check and any subsequent write run as separate statements.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{RestaurantRepository, RestaurantRepositoryError};
use crate::domain::{Restaurant, RestaurantDraft};

use super::models::{NewRestaurantRow, RestaurantChangeset, RestaurantRow};
use super::pool::{DbPool, PoolError};
use super::schema::restaurants;

/// Diesel-backed implementation of the `RestaurantRepository` port.
#[derive(Clone)]
pub struct DieselRestaurantRepository {
    pool: DbPool,
}

impl DieselRestaurantRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RestaurantRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RestaurantRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> RestaurantRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => RestaurantRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RestaurantRepositoryError::connection("database connection error")
        }
        _ => RestaurantRepositoryError::query("database error"),
    }
}

#[async_trait]
impl RestaurantRepository for DieselRestaurantRepository {
    async fn insert(
        &self,
        draft: &RestaurantDraft,
    ) -> Result<Restaurant, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: RestaurantRow = diesel::insert_into(restaurants::table)
            .values(NewRestaurantRow::from_draft(draft))
            .returning(RestaurantRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn save(
        &self,
        restaurant: &Restaurant,
    ) -> Result<Restaurant, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: RestaurantRow = diesel::update(restaurants::table.find(restaurant.id))
            .set(RestaurantChangeset::from_restaurant(restaurant))
            .returning(RestaurantRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RestaurantRow> = restaurants::table
            .find(id)
            .select(RestaurantRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RestaurantRow> = restaurants::table
            .filter(restaurants::name.eq(name))
            .select(RestaurantRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Into::into))
    }

    async fn exists_by_name_and_zip(
        &self,
        name: Option<String>,
        zip_code: Option<String>,
    ) -> Result<bool, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // IS NOT DISTINCT FROM: an absent name matches an absent stored name.
        let query = restaurants::table
            .filter(restaurants::name.is_not_distinct_from(name))
            .filter(restaurants::zip_code.is_not_distinct_from(zip_code));

        diesel::select(diesel::dsl::exists(query))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn list_by_country(
        &self,
        country: &str,
        ascending: bool,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = restaurants::table
            .filter(restaurants::country.eq(country))
            .select(RestaurantRow::as_select())
            .into_boxed();
        query = if ascending {
            query.order(restaurants::name.asc())
        } else {
            query.order(restaurants::name.desc())
        };

        let rows: Vec<RestaurantRow> =
            query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_city(
        &self,
        city: &str,
        ascending: bool,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = restaurants::table
            .filter(restaurants::city.eq(city))
            .select(RestaurantRow::as_select())
            .into_boxed();
        query = if ascending {
            query.order(restaurants::name.asc())
        } else {
            query.order(restaurants::name.desc())
        };

        let rows: Vec<RestaurantRow> =
            query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_zip_code(
        &self,
        zip_code: &str,
        ascending: bool,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = restaurants::table
            .filter(restaurants::zip_code.eq(zip_code))
            .select(RestaurantRow::as_select())
            .into_boxed();
        query = if ascending {
            query.order(restaurants::name.asc())
        } else {
            query.order(restaurants::name.desc())
        };

        let rows: Vec<RestaurantRow> =
            query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_with_scores_by_zip_code(
        &self,
        zip_code: &str,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RestaurantRow> = restaurants::table
            .filter(restaurants::zip_code.eq(zip_code))
            .filter(
                restaurants::average_score_egg
                    .is_not_null()
                    .or(restaurants::average_score_dairy.is_not_null())
                    .or(restaurants::average_score_peanut.is_not_null()),
            )
            .order(restaurants::zip_code.desc())
            .select(RestaurantRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RestaurantRow> = restaurants::table
            .select(RestaurantRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
