//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgHotelRepository`] - Hotel storage, listing and search
//! - [`PgUserRepository`] - User accounts
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_hotel_repository;
pub mod pg_token_repository;
pub mod pg_user_repository;

pub use pg_hotel_repository::PgHotelRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
