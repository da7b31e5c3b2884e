//! Handlers for hotel endpoints.
//!
//! Mutating endpoints sit behind the bearer-token middleware, which places the
//! authenticated [`Actor`] into request extensions. Each of them then requires
//! the actor to be an admin before touching the collection.

use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::HeaderMap,
};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::envelope::{ApiResponse, MessageResponse};
use crate::api::dto::hotel::{HotelItem, NewHotelRequest, SearchParams, UpdateHotelRequest};
use crate::domain::entities::{Actor, Hotel};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::hotel_id::{hotel_id_from_headers, parse_hotel_id};

fn to_items(hotels: Vec<Hotel>) -> Vec<HotelItem> {
    hotels.into_iter().map(HotelItem::from).collect()
}

/// Adds a batch of hotels.
///
/// # Endpoint
///
/// `POST /add-hotel`
///
/// # Batch Processing
///
/// Items are validated and persisted one by one. An item that fails is logged
/// and skipped; the others are still saved. Nothing spans the batch, so a
/// failed item never rolls back earlier ones.
///
/// # Request Body
///
/// ```json
/// [
///   {
///     "name": "Grand Hotel",
///     "location": "Budapest",
///     "description": "Historic rooms by the river",
///     "pricePerNight": 180.0,
///     "facilities": ["spa", "wifi"],
///     "images": ["https://img.example.com/grand.jpg"],
///     "roomsAvailable": 20,
///     "category": "luxury",
///     "rating": 4.7
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 404 if the token's user no longer exists.
/// Returns 403 if the user is not an admin.
/// Returns 400 if the body is not a JSON array.
/// Returns 400 if no hotel could be saved.
pub async fn add_hotels_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<HotelItem>>>, AppError> {
    let admin = state.auth_service.require_admin(actor).await?;

    let Json(body) = payload?;
    let Value::Array(items) = body else {
        return Err(AppError::bad_request(
            "Request body must be an array of hotels",
            json!({}),
        ));
    };

    let total = items.len();
    let mut saved = Vec::with_capacity(total);

    for (index, item) in items.into_iter().enumerate() {
        match process_single_hotel(&state, admin.id, item).await {
            Ok(hotel) => saved.push(HotelItem::from(hotel)),
            Err(err) => {
                let info = err.to_error_info();
                tracing::warn!(
                    index,
                    code = info.code,
                    details = %info.details,
                    "Error saving hotel: {}",
                    info.message
                );
            }
        }
    }

    if saved.is_empty() {
        return Err(AppError::bad_request(
            "No hotels were added due to errors",
            json!({ "total": total }),
        ));
    }

    tracing::info!(total, saved = saved.len(), user_id = admin.id, "Hotels added");

    Ok(Json(
        ApiResponse::success(saved).with_message("Hotels added successfully"),
    ))
}

/// Parses, validates and persists one batch item.
async fn process_single_hotel(
    state: &AppState,
    default_owner: i64,
    item: Value,
) -> Result<Hotel, AppError> {
    let request: NewHotelRequest = serde_json::from_value(item).map_err(|e| {
        AppError::bad_request("Invalid hotel", json!({ "reason": e.to_string() }))
    })?;

    request.validate()?;

    state
        .hotel_service
        .create_hotel(request.into_new_hotel(default_owner))
        .await
}

/// Partially updates a hotel.
///
/// # Endpoint
///
/// `PUT /update-hotel` with header `hotelid: <id>`
///
/// Only `name`, `location`, `description`, `pricePerNight`, `facilities`,
/// `images`, `roomsAvailable` and `category` are applied. `owner` and `rating`
/// are never changed. An unknown id still answers 200.
///
/// # Errors
///
/// Returns 403/404 if the actor is not an existing admin.
/// Returns 400 if `hotelid` is missing or malformed, or the body is invalid.
pub async fn update_hotel_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    headers: HeaderMap,
    payload: Result<Json<UpdateHotelRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    state.auth_service.require_admin(actor).await?;

    let id = hotel_id_from_headers(&headers)?;
    let Json(request) = payload?;
    request.validate()?;

    state.hotel_service.update_hotel(id, request.into()).await?;

    Ok(Json(MessageResponse::success("Hotel updated successfully!")))
}

/// Deletes one hotel.
///
/// # Endpoint
///
/// `DELETE /delete-hotel` with header `hotelid: <id>`
///
/// # Errors
///
/// Returns 403/404 if the actor is not an existing admin.
/// Returns 400 if `hotelid` is missing or malformed.
pub async fn delete_hotel_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    state.auth_service.require_admin(actor).await?;

    let id = hotel_id_from_headers(&headers)?;
    state.hotel_service.delete_hotel(id).await?;

    Ok(Json(MessageResponse::success("Hotel deleted successfully!")))
}

/// Deletes every hotel.
///
/// # Endpoint
///
/// `DELETE /delete-all-hotels`
pub async fn delete_all_hotels_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<MessageResponse>, AppError> {
    state.auth_service.require_admin(actor).await?;

    state.hotel_service.delete_all_hotels().await?;

    Ok(Json(MessageResponse::success(
        "All hotels deleted successfully!",
    )))
}

/// Lists every hotel, newest first.
///
/// # Endpoint
///
/// `GET /get-all-hotels`
pub async fn list_hotels_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<HotelItem>>>, AppError> {
    let hotels = state.hotel_service.list_hotels().await?;

    Ok(Json(ApiResponse::success(to_items(hotels))))
}

/// Lists the four most recently added hotels.
///
/// # Endpoint
///
/// `GET /get-recent-hotels`
pub async fn recent_hotels_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<HotelItem>>>, AppError> {
    let hotels = state.hotel_service.recent_hotels().await?;

    Ok(Json(ApiResponse::success(to_items(hotels))))
}

/// Fetches a hotel by id.
///
/// # Endpoint
///
/// `GET /get-hotel-by-id/{id}`
///
/// Always answers 200. `data` is `null` when no hotel has this id, including
/// ids that are not integers.
pub async fn hotel_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Option<HotelItem>>>, AppError> {
    let hotel = match parse_hotel_id(&id) {
        Some(id) => state.hotel_service.get_hotel(id).await?,
        None => None,
    };

    Ok(Json(ApiResponse::success(hotel.map(HotelItem::from))))
}

/// Searches hotels by name, ignoring case.
///
/// # Endpoint
///
/// `GET /search?query=<text>`
///
/// # Errors
///
/// Returns 400 if `query` is missing or empty.
/// Returns 404 if no hotel matches.
pub async fn search_hotels_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<HotelItem>>>, AppError> {
    let Query(params) = params?;
    let query = params.query.unwrap_or_default();

    let hotels = state.hotel_service.search_hotels(&query).await?;

    Ok(Json(ApiResponse::success(to_items(hotels))))
}

/// Returns the number of hotels.
///
/// # Endpoint
///
/// `GET /total-hotels`
pub async fn total_hotels_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<i64>>, AppError> {
    let count = state.hotel_service.count_hotels().await?;

    Ok(Json(ApiResponse::success(count)))
}
