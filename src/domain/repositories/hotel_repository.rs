//! Repository trait for hotel listings.

use crate::domain::entities::{Hotel, HotelPatch, NewHotel};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the hotel collection.
///
/// Every method maps to exactly one storage call.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgHotelRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_hotel.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Persists a new hotel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the record violates a storage
    /// constraint (unknown owner, negative price, rating out of range).
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_hotel: NewHotel) -> Result<Hotel, AppError>;

    /// Finds a hotel by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Hotel>, AppError>;

    /// Lists every hotel, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Hotel>, AppError>;

    /// Lists at most `limit` hotels, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Hotel>, AppError>;

    /// Applies a partial update.
    ///
    /// Returns `false` if no hotel has this ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a new value violates a storage constraint.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: HotelPatch) -> Result<bool, AppError>;

    /// Deletes a hotel. Returns `false` if no hotel has this ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Deletes every hotel and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_all(&self) -> Result<u64, AppError>;

    /// Counts all hotels.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Finds hotels whose name contains `query`, ignoring case.
    ///
    /// `query` is matched literally; wildcard characters carry no meaning.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search_by_name(&self, query: &str) -> Result<Vec<Hotel>, AppError>;
}
