//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`HotelRepository`] - Hotel listing CRUD and search
//! - [`UserRepository`] - User account lookup
//! - [`TokenRepository`] - API token authentication

pub mod hotel_repository;
pub mod token_repository;
pub mod user_repository;

pub use hotel_repository::HotelRepository;
pub use token_repository::{ApiToken, TokenRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use hotel_repository::MockHotelRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
