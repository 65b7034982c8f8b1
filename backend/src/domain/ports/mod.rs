//! Domain ports for the hexagonal boundary.

mod restaurant_repository;

#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
pub use restaurant_repository::{RestaurantRepository, RestaurantRepositoryError};
