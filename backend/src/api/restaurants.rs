//! Restaurant API handlers.
//!
//! Thin adapters: deserialise the request, call the domain service, map the
//! outcome. The direction flag rides in the path for the country listing and
//! as a query parameter elsewhere, matching the historical route shapes.

use actix_web::{HttpResponse, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use super::error::ApiResult;
use crate::domain::{Restaurant, RestaurantDraft, RestaurantService};

/// Name-ordering direction for list queries: ascending when true.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct OrderParams {
    /// Order ascending by name when true, descending when false.
    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

const fn default_ascending() -> bool {
    true
}

/// Query parameters for the scores listing.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ScoresParams {
    /// Postal code to filter on.
    pub zip_code: String,
}

/// Create a restaurant.
#[utoipa::path(
    post,
    path = "/restaurant/create-restaurant",
    request_body = RestaurantDraft,
    responses(
        (status = 201, description = "Restaurant created", body = Restaurant),
        (status = 400, description = "Postal code is malformed"),
        (status = 409, description = "Name and postal code already taken")
    ),
    tags = ["restaurants"],
    operation_id = "createRestaurant"
)]
#[post("/create-restaurant")]
pub async fn create_restaurant(
    service: web::Data<RestaurantService>,
    payload: web::Json<RestaurantDraft>,
) -> ApiResult<HttpResponse> {
    let created = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Update a restaurant by identifier.
///
/// The path identifier is the only accepted source of identity for the
/// target; any identifier inside the payload is ignored by construction.
#[utoipa::path(
    put,
    path = "/restaurant/update-restaurant/{id}",
    request_body = RestaurantDraft,
    responses(
        (status = 200, description = "Merged restaurant", body = Restaurant),
        (status = 400, description = "Postal code is malformed"),
        (status = 404, description = "No restaurant with this identifier"),
        (status = 409, description = "Name and postal code already taken")
    ),
    tags = ["restaurants"],
    operation_id = "updateRestaurant"
)]
#[put("/update-restaurant/{id}")]
pub async fn update_restaurant(
    service: web::Data<RestaurantService>,
    id: web::Path<i64>,
    payload: web::Json<RestaurantDraft>,
) -> ApiResult<web::Json<Restaurant>> {
    let merged = service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(web::Json(merged))
}

/// List every restaurant.
#[utoipa::path(
    get,
    path = "/restaurant/",
    responses((status = 200, description = "All restaurants", body = [Restaurant])),
    tags = ["restaurants"],
    operation_id = "listRestaurants"
)]
#[get("/")]
pub async fn list_restaurants(
    service: web::Data<RestaurantService>,
) -> ApiResult<web::Json<Vec<Restaurant>>> {
    Ok(web::Json(service.list_all().await?))
}

/// List restaurants for a country, ordered by name.
#[utoipa::path(
    get,
    path = "/restaurant/country/{country}/{ascending_order}",
    responses((status = 200, description = "Restaurants in the country", body = [Restaurant])),
    tags = ["restaurants"],
    operation_id = "listRestaurantsByCountry"
)]
#[get("/country/{country}/{ascending_order}")]
pub async fn list_restaurants_by_country(
    service: web::Data<RestaurantService>,
    path: web::Path<(String, bool)>,
) -> ApiResult<web::Json<Vec<Restaurant>>> {
    let (country, ascending) = path.into_inner();
    Ok(web::Json(service.list_by_country(&country, ascending).await?))
}

/// List restaurants for a city, ordered by name.
#[utoipa::path(
    get,
    path = "/restaurant/city/{city}",
    params(OrderParams),
    responses((status = 200, description = "Restaurants in the city", body = [Restaurant])),
    tags = ["restaurants"],
    operation_id = "listRestaurantsByCity"
)]
#[get("/city/{city}")]
pub async fn list_restaurants_by_city(
    service: web::Data<RestaurantService>,
    city: web::Path<String>,
    order: web::Query<OrderParams>,
) -> ApiResult<web::Json<Vec<Restaurant>>> {
    Ok(web::Json(
        service.list_by_city(&city, order.ascending).await?,
    ))
}

/// List restaurants for a postal code, ordered by name.
#[utoipa::path(
    get,
    path = "/restaurant/zipcode/{zip_code}",
    params(OrderParams),
    responses(
        (status = 200, description = "Restaurants with the postal code", body = [Restaurant]),
        (status = 400, description = "Postal code is malformed")
    ),
    tags = ["restaurants"],
    operation_id = "listRestaurantsByZipCode"
)]
#[get("/zipcode/{zip_code}")]
pub async fn list_restaurants_by_zip_code(
    service: web::Data<RestaurantService>,
    zip_code: web::Path<String>,
    order: web::Query<OrderParams>,
) -> ApiResult<web::Json<Vec<Restaurant>>> {
    Ok(web::Json(
        service.list_by_zip_code(&zip_code, order.ascending).await?,
    ))
}

/// List restaurants for a postal code that carry at least one per-allergen
/// average score, ordered by postal code descending.
#[utoipa::path(
    get,
    path = "/restaurant/scores",
    params(ScoresParams),
    responses(
        (status = 200, description = "Scored restaurants", body = [Restaurant]),
        (status = 400, description = "Postal code is malformed")
    ),
    tags = ["restaurants"],
    operation_id = "listScoredRestaurantsByZipCode"
)]
#[get("/scores")]
pub async fn list_scored_restaurants(
    service: web::Data<RestaurantService>,
    params: web::Query<ScoresParams>,
) -> ApiResult<web::Json<Vec<Restaurant>>> {
    Ok(web::Json(
        service.list_with_scores_by_zip_code(&params.zip_code).await?,
    ))
}

/// Fetch a restaurant by identifier.
#[utoipa::path(
    get,
    path = "/restaurant/id/{id}",
    responses(
        (status = 200, description = "Restaurant", body = Restaurant),
        (status = 404, description = "No restaurant with this identifier")
    ),
    tags = ["restaurants"],
    operation_id = "getRestaurantById"
)]
#[get("/id/{id}")]
pub async fn get_restaurant_by_id(
    service: web::Data<RestaurantService>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<Restaurant>> {
    Ok(web::Json(service.get_by_id(id.into_inner()).await?))
}

/// Fetch a restaurant by exact name. A miss yields a `null` body, not an
/// error; only the identifier lookup treats absence as a failure.
#[utoipa::path(
    get,
    path = "/restaurant/name/{name}",
    responses(
        (status = 200, description = "Restaurant, or a null body when unknown", body = Restaurant)
    ),
    tags = ["restaurants"],
    operation_id = "getRestaurantByName"
)]
#[get("/name/{name}")]
pub async fn get_restaurant_by_name(
    service: web::Data<RestaurantService>,
    name: web::Path<String>,
) -> ApiResult<web::Json<Option<Restaurant>>> {
    Ok(web::Json(service.get_by_name(&name).await?))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    use super::*;
    use crate::domain::ports::MockRestaurantRepository;

    fn app_service(
        repository: MockRestaurantRepository,
    ) -> web::Data<RestaurantService> {
        web::Data::new(RestaurantService::new(Arc::new(repository)))
    }

    #[actix_web::test]
    async fn create_returns_201_with_the_created_record() {
        let mut repository = MockRestaurantRepository::new();
        repository
            .expect_exists_by_name_and_zip()
            .returning(|_, _| Ok(false));
        repository.expect_insert().returning(|draft| {
            Ok(Restaurant {
                id: 1,
                name: draft.name.clone(),
                zip_code: draft.zip_code.clone(),
                country: draft.country.clone(),
                city: draft.city.clone(),
                average_score_egg: None,
                average_score_dairy: None,
                average_score_peanut: None,
                overall_score: None,
            })
        });

        let app = test::init_service(
            App::new()
                .app_data(app_service(repository))
                .service(web::scope("/restaurant").service(create_restaurant)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/restaurant/create-restaurant")
            .set_json(serde_json::json!({ "name": "Trattoria", "zipCode": "90210" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["zipCode"], "90210");
    }

    #[actix_web::test]
    async fn create_with_a_malformed_zip_returns_400() {
        let mut repository = MockRestaurantRepository::new();
        repository.expect_exists_by_name_and_zip().times(0);
        repository.expect_insert().times(0);

        let app = test::init_service(
            App::new()
                .app_data(app_service(repository))
                .service(web::scope("/restaurant").service(create_restaurant)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/restaurant/create-restaurant")
            .set_json(serde_json::json!({ "name": "Trattoria", "zipCode": "90210 " }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_zip_format");
    }

    #[actix_web::test]
    async fn get_by_name_miss_returns_a_null_body() {
        let mut repository = MockRestaurantRepository::new();
        repository.expect_find_by_name().returning(|_| Ok(None));

        let app = test::init_service(
            App::new()
                .app_data(app_service(repository))
                .service(web::scope("/restaurant").service(get_restaurant_by_name)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/restaurant/name/Nowhere")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert!(body.is_null());
    }

    #[actix_web::test]
    async fn country_listing_takes_the_direction_flag_from_the_path() {
        let mut repository = MockRestaurantRepository::new();
        repository
            .expect_list_by_country()
            .withf(|country, &ascending| country == "FR" && !ascending)
            .returning(|_, _| Ok(vec![]));

        let app = test::init_service(
            App::new()
                .app_data(app_service(repository))
                .service(web::scope("/restaurant").service(list_restaurants_by_country)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/restaurant/country/FR/false")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
