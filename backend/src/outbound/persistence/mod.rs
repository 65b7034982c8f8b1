//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the restaurant repository port backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling. Row structs
//! and schema definitions are internal; the domain only ever sees its own
//! types and the port error.

mod diesel_restaurant_repository;
mod models;
mod pool;
mod schema;

pub use diesel_restaurant_repository::DieselRestaurantRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
