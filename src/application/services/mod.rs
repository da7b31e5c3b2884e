//! Business logic services for the application layer.

pub mod auth_service;
pub mod hotel_service;

pub use auth_service::AuthService;
pub use hotel_service::{HotelService, RECENT_HOTELS_LIMIT};
