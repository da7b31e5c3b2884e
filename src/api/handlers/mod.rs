//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod hotels;

pub use health::health_handler;
pub use hotels::{
    add_hotels_handler, delete_all_hotels_handler, delete_hotel_handler, hotel_by_id_handler,
    list_hotels_handler, recent_hotels_handler, search_hotels_handler, total_hotels_handler,
    update_hotel_handler,
};
