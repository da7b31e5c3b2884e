//! PostgreSQL implementation of the hotel repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Hotel, HotelPatch, NewHotel};
use crate::domain::repositories::HotelRepository;
use crate::error::AppError;

const HOTEL_COLUMNS: &str = "id, name, location, description, price_per_night, facilities, \
     images, rooms_available, category, owner_id, rating, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i64,
    name: String,
    location: String,
    description: String,
    price_per_night: f64,
    facilities: Vec<String>,
    images: Vec<String>,
    rooms_available: i32,
    category: String,
    owner_id: i64,
    rating: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(r: HotelRow) -> Self {
        Hotel {
            id: r.id,
            name: r.name,
            location: r.location,
            description: r.description,
            price_per_night: r.price_per_night,
            facilities: r.facilities,
            images: r.images,
            rooms_available: r.rooms_available,
            category: r.category,
            owner_id: r.owner_id,
            rating: r.rating,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Escapes `%`, `_` and `\` so the value is matched literally by `ILIKE`.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// PostgreSQL repository for hotel listings.
///
/// Listing order is `created_at DESC, id DESC` so rows inserted within the
/// same transaction timestamp still sort deterministically.
pub struct PgHotelRepository {
    pool: Arc<PgPool>,
}

impl PgHotelRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelRepository for PgHotelRepository {
    async fn create(&self, new_hotel: NewHotel) -> Result<Hotel, AppError> {
        let sql = format!(
            r#"
            INSERT INTO hotels (
                name, location, description, price_per_night, facilities,
                images, rooms_available, category, owner_id, rating
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {HOTEL_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(new_hotel.name)
            .bind(new_hotel.location)
            .bind(new_hotel.description)
            .bind(new_hotel.price_per_night)
            .bind(new_hotel.facilities)
            .bind(new_hotel.images)
            .bind(new_hotel.rooms_available)
            .bind(new_hotel.category)
            .bind(new_hotel.owner_id)
            .bind(new_hotel.rating)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Hotel>, AppError> {
        let sql = format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE id = $1");

        let row = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Hotel::from))
    }

    async fn list(&self) -> Result<Vec<Hotel>, AppError> {
        let sql = format!("SELECT {HOTEL_COLUMNS} FROM hotels ORDER BY created_at DESC, id DESC");

        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Hotel>, AppError> {
        let sql = format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels ORDER BY created_at DESC, id DESC LIMIT $1"
        );

        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn update(&self, id: i64, patch: HotelPatch) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE hotels SET
                name            = COALESCE($2::TEXT, name),
                location        = COALESCE($3::TEXT, location),
                description     = COALESCE($4::TEXT, description),
                price_per_night = COALESCE($5::DOUBLE PRECISION, price_per_night),
                facilities      = COALESCE($6::TEXT[], facilities),
                images          = COALESCE($7::TEXT[], images),
                rooms_available = COALESCE($8::INTEGER, rooms_available),
                category        = COALESCE($9::TEXT, category),
                updated_at      = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.location)
        .bind(patch.description)
        .bind(patch.price_per_night)
        .bind(patch.facilities)
        .bind(patch.images)
        .bind(patch.rooms_available)
        .bind(patch.category)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM hotels")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Hotel>, AppError> {
        let sql = format!(
            r#"
            SELECT {HOTEL_COLUMNS}
            FROM hotels
            WHERE name ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY created_at DESC, id DESC
            "#
        );

        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(escape_like(query))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain() {
        assert_eq!(escape_like("Grand Hotel"), "Grand Hotel");
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_escape_like_unicode() {
        assert_eq!(escape_like("Hôtel_Ü"), "Hôtel\\_Ü");
    }
}
