//! Backend entry-point: wires REST endpoints, persistence, and OpenAPI docs.

use std::env;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::Trace;
use backend::api::health::{HealthState, live, ready};
use backend::api::restaurants::{
    create_restaurant, get_restaurant_by_id, get_restaurant_by_name, list_restaurants,
    list_restaurants_by_city, list_restaurants_by_country, list_restaurants_by_zip_code,
    list_scored_restaurants, update_restaurant,
};
use backend::domain::RestaurantService;
use backend::outbound::persistence::{DbPool, DieselRestaurantRepository, PoolConfig};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Apply pending schema migrations before the pool starts serving traffic.
fn apply_migrations(database_url: &str) -> std::io::Result<()> {
    let mut connection = PgConnection::establish(database_url)
        .map_err(|e| std::io::Error::other(format!("failed to connect for migrations: {e}")))?;
    connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| std::io::Error::other(format!("failed to run migrations: {e}")))?;
    Ok(())
}

fn http_port() -> u16 {
    env::var("HTTP_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8080)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;
    apply_migrations(&database_url)?;

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(std::io::Error::other)?;
    let service = web::Data::new(RestaurantService::new(Arc::new(
        DieselRestaurantRepository::new(pool),
    )));

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let restaurant_scope = web::scope("/restaurant")
            .service(create_restaurant)
            .service(update_restaurant)
            .service(list_restaurants_by_country)
            .service(list_restaurants_by_city)
            .service(list_restaurants_by_zip_code)
            .service(list_scored_restaurants)
            .service(get_restaurant_by_id)
            .service(get_restaurant_by_name)
            .service(list_restaurants);

        let mut app = App::new()
            .app_data(server_health_state.clone())
            .app_data(service.clone())
            .wrap(Trace)
            .service(restaurant_scope)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        {
            app = app
                .service(
                    SwaggerUi::new("/docs/{_:.*}")
                        .url("/api-docs/openapi.json", ApiDoc::openapi()),
                );
        }

        app
    })
    .bind(("0.0.0.0", http_port()))?;

    health_state.mark_ready();
    server.run().await
}
