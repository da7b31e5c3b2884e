//! Hotel API route configuration.

use crate::api::handlers::{
    add_hotels_handler, delete_all_hotels_handler, delete_hotel_handler, hotel_by_id_handler,
    list_hotels_handler, recent_hotels_handler, search_hotels_handler, total_hotels_handler,
    update_hotel_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Read-only routes, open to everyone.
///
/// # Endpoints
///
/// - `GET /get-all-hotels`         - All hotels, newest first
/// - `GET /get-recent-hotels`      - Four newest hotels
/// - `GET /get-hotel-by-id/{id}`   - One hotel or `data: null`
/// - `GET /search?query=<text>`    - Case-insensitive name search
/// - `GET /total-hotels`           - Number of hotels
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/get-all-hotels", get(list_hotels_handler))
        .route("/get-recent-hotels", get(recent_hotels_handler))
        .route("/get-hotel-by-id/{id}", get(hotel_by_id_handler))
        .route("/search", get(search_hotels_handler))
        .route("/total-hotels", get(total_hotels_handler))
}

/// Mutating routes. Callers must layer bearer authentication on top; every
/// handler additionally requires the admin role.
///
/// # Endpoints
///
/// - `POST   /add-hotel`          - Bulk add hotels
/// - `PUT    /update-hotel`       - Partial update (header `hotelid`)
/// - `DELETE /delete-hotel`       - Delete one hotel (header `hotelid`)
/// - `DELETE /delete-all-hotels`  - Delete every hotel
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/add-hotel", post(add_hotels_handler))
        .route("/update-hotel", put(update_hotel_handler))
        .route("/delete-hotel", delete(delete_hotel_handler))
        .route("/delete-all-hotels", delete(delete_all_hotels_handler))
}
