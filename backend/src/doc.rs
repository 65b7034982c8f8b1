//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API:
//! restaurant endpoints, health probes, and the shared error envelope. The
//! generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::api::error::ApiError;
use crate::domain::{ErrorCode, Restaurant, RestaurantDraft};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dining review restaurant API",
        description = "HTTP interface for restaurant records and their derived allergen scores."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::restaurants::create_restaurant,
        crate::api::restaurants::update_restaurant,
        crate::api::restaurants::list_restaurants,
        crate::api::restaurants::list_restaurants_by_country,
        crate::api::restaurants::list_restaurants_by_city,
        crate::api::restaurants::list_restaurants_by_zip_code,
        crate::api::restaurants::list_scored_restaurants,
        crate::api::restaurants::get_restaurant_by_id,
        crate::api::restaurants::get_restaurant_by_name,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(Restaurant, RestaurantDraft, ApiError, ErrorCode)),
    tags(
        (name = "restaurants", description = "Restaurant records and list queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn document_registers_every_restaurant_path() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for expected in [
            "/restaurant/create-restaurant",
            "/restaurant/update-restaurant/{id}",
            "/restaurant/",
            "/restaurant/country/{country}/{ascending_order}",
            "/restaurant/city/{city}",
            "/restaurant/zipcode/{zip_code}",
            "/restaurant/scores",
            "/restaurant/id/{id}",
            "/restaurant/name/{name}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(expected), "missing path {expected}");
        }
    }

    #[test]
    fn document_registers_the_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        for expected in ["Restaurant", "RestaurantDraft", "ApiError", "ErrorCode"] {
            assert!(
                components.schemas.contains_key(expected),
                "missing schema {expected}"
            );
        }
    }
}
