//! Domain entity representing a hotel listing.

use chrono::{DateTime, Utc};

/// A persisted hotel listing.
///
/// `owner_id` is a back-reference to the user the listing belongs to; it does
/// not grant that user any rights over the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_per_night: f64,
    pub facilities: Vec<String>,
    pub images: Vec<String>,
    pub rooms_available: i32,
    pub category: String,
    pub owner_id: i64,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHotel {
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_per_night: f64,
    pub facilities: Vec<String>,
    pub images: Vec<String>,
    pub rooms_available: i32,
    pub category: String,
    pub owner_id: i64,
    pub rating: f64,
}

/// Partial update of a hotel.
///
/// `None` leaves a field unchanged. `owner_id` and `rating` are not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<f64>,
    pub facilities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub rooms_available: Option<i32>,
    pub category: Option<String>,
}

impl HotelPatch {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.price_per_night.is_none()
            && self.facilities.is_none()
            && self.images.is_none()
            && self.rooms_available.is_none()
            && self.category.is_none()
    }
}
