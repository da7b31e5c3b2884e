//! Hotel listing service.

use crate::domain::entities::{Hotel, HotelPatch, NewHotel};
use crate::domain::repositories::HotelRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Number of hotels returned by [`HotelService::recent_hotels`].
pub const RECENT_HOTELS_LIMIT: i64 = 4;

/// Service for the hotel collection.
///
/// Each method performs at most one repository call.
pub struct HotelService<R: HotelRepository> {
    repository: Arc<R>,
}

impl<R: HotelRepository> HotelService<R> {
    /// Creates a new hotel service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persists a single hotel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the storage schema rejects the record.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_hotel(&self, new_hotel: NewHotel) -> Result<Hotel, AppError> {
        self.repository.create(new_hotel).await
    }

    /// Applies a partial update.
    ///
    /// An unknown `id` is not an error: the update simply affects nothing.
    /// An empty patch skips storage entirely.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a new value violates the storage schema.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_hotel(&self, id: i64, patch: HotelPatch) -> Result<(), AppError> {
        if patch.is_empty() {
            tracing::debug!(hotel_id = id, "Empty update, nothing to apply");
            return Ok(());
        }

        let updated = self.repository.update(id, patch).await?;
        if !updated {
            tracing::debug!(hotel_id = id, "Update matched no hotel");
        }
        Ok(())
    }

    /// Deletes a hotel. An unknown `id` is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_hotel(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            tracing::debug!(hotel_id = id, "Delete matched no hotel");
        }
        Ok(())
    }

    /// Deletes every hotel and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_all_hotels(&self) -> Result<u64, AppError> {
        let removed = self.repository.delete_all().await?;
        tracing::info!(removed, "Deleted all hotels");
        Ok(removed)
    }

    /// Lists every hotel, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        self.repository.list().await
    }

    /// Lists the [`RECENT_HOTELS_LIMIT`] most recently created hotels.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn recent_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        self.repository.list_recent(RECENT_HOTELS_LIMIT).await
    }

    /// Retrieves a hotel by ID, `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_hotel(&self, id: i64) -> Result<Option<Hotel>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Case-insensitive substring search on hotel names.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `query` is empty.
    /// Returns [`AppError::NotFound`] if nothing matches, including queries
    /// containing NUL, which no stored name can.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search_hotels(&self, query: &str) -> Result<Vec<Hotel>, AppError> {
        if query.is_empty() {
            return Err(AppError::bad_request("Query is required", json!({})));
        }

        let hotels = if query.contains('\0') {
            Vec::new()
        } else {
            self.repository.search_by_name(query).await?
        };

        if hotels.is_empty() {
            return Err(AppError::not_found(
                "No hotels found",
                json!({ "query": query }),
            ));
        }

        Ok(hotels)
    }

    /// Counts all hotels.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_hotels(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
