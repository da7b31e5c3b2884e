//! DTOs for hotel endpoints.
//!
//! Field names are camelCase on the wire (`pricePerNight`, `roomsAvailable`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Hotel, HotelPatch, NewHotel};

/// Rejects values containing NUL, which Postgres text cannot store.
fn no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_byte"));
    }
    Ok(())
}

fn no_nul_items(values: &[String]) -> Result<(), ValidationError> {
    values.iter().try_for_each(|v| no_nul(v))
}

/// One hotel in a bulk-add request body.
///
/// The constraints mirror the storage schema: an item failing them is
/// skipped rather than persisted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewHotelRequest {
    #[validate(
        length(min = 1, message = "Name is required"),
        custom(function = "no_nul")
    )]
    pub name: String,

    #[validate(
        length(min = 1, message = "Location is required"),
        custom(function = "no_nul")
    )]
    pub location: String,

    #[validate(
        length(min = 1, message = "Description is required"),
        custom(function = "no_nul")
    )]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price_per_night: f64,

    #[serde(default)]
    #[validate(custom(function = "no_nul_items"))]
    pub facilities: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "no_nul_items"))]
    pub images: Vec<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Room count must not be negative"))]
    pub rooms_available: i32,

    #[validate(
        length(min = 1, message = "Category is required"),
        custom(function = "no_nul")
    )]
    pub category: String,

    /// Owning user; defaults to the admin adding the hotel.
    pub owner: Option<i64>,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f64,
}

impl NewHotelRequest {
    /// Converts the request into a domain entity, owned by `default_owner`
    /// unless the item names an owner.
    pub fn into_new_hotel(self, default_owner: i64) -> NewHotel {
        NewHotel {
            name: self.name,
            location: self.location,
            description: self.description,
            price_per_night: self.price_per_night,
            facilities: self.facilities,
            images: self.images,
            rooms_available: self.rooms_available,
            category: self.category,
            owner_id: self.owner.unwrap_or(default_owner),
            rating: self.rating,
        }
    }
}

/// Partial update body. Unknown fields (including `owner` and `rating`) are ignored.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotelRequest {
    #[validate(
        length(min = 1, message = "Name must not be empty"),
        custom(function = "no_nul")
    )]
    pub name: Option<String>,

    #[validate(
        length(min = 1, message = "Location must not be empty"),
        custom(function = "no_nul")
    )]
    pub location: Option<String>,

    #[validate(
        length(min = 1, message = "Description must not be empty"),
        custom(function = "no_nul")
    )]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price_per_night: Option<f64>,

    #[validate(custom(function = "no_nul_items"))]
    pub facilities: Option<Vec<String>>,

    #[validate(custom(function = "no_nul_items"))]
    pub images: Option<Vec<String>>,

    #[validate(range(min = 0, message = "Room count must not be negative"))]
    pub rooms_available: Option<i32>,

    #[validate(
        length(min = 1, message = "Category must not be empty"),
        custom(function = "no_nul")
    )]
    pub category: Option<String>,
}

impl From<UpdateHotelRequest> for HotelPatch {
    fn from(r: UpdateHotelRequest) -> Self {
        HotelPatch {
            name: r.name,
            location: r.location,
            description: r.description,
            price_per_night: r.price_per_night,
            facilities: r.facilities,
            images: r.images,
            rooms_available: r.rooms_available,
            category: r.category,
        }
    }
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Hotel representation returned by every read endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelItem {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_per_night: f64,
    pub facilities: Vec<String>,
    pub images: Vec<String>,
    pub rooms_available: i32,
    pub category: String,
    pub owner: i64,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelItem {
    fn from(h: Hotel) -> Self {
        HotelItem {
            id: h.id,
            name: h.name,
            location: h.location,
            description: h.description,
            price_per_night: h.price_per_night,
            facilities: h.facilities,
            images: h.images,
            rooms_available: h.rooms_available,
            category: h.category,
            owner: h.owner_id,
            rating: h.rating,
            created_at: h.created_at,
            updated_at: h.updated_at,
        }
    }
}
