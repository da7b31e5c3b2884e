//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the operations HTTP
//! handlers call.
//!
//! # Available Services
//!
//! - [`services::hotel_service::HotelService`] - Hotel listing operations
//! - [`services::auth_service::AuthService`] - Token authentication and admin checks

pub mod services;
