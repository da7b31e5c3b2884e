#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use hotel_listing::application::services::auth_service::hash_token;
use hotel_listing::routes::build_router;
use hotel_listing::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SECRET.to_string())
}

pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(build_router(create_test_state(pool))).unwrap()
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

pub fn hotel_id_header() -> HeaderName {
    HeaderName::from_static("hotelid")
}

pub fn hotel_id_value(id: i64) -> HeaderValue {
    HeaderValue::from_str(&id.to_string()).unwrap()
}

pub async fn create_user(pool: &PgPool, name: &str, role: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, role) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(role)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Issues a token for `user_id` and returns the raw value.
pub async fn create_token(pool: &PgPool, user_id: i64, raw: &str) -> String {
    sqlx::query("INSERT INTO api_tokens (name, user_id, token_hash) VALUES ($1, $2, $3)")
        .bind(format!("token-{raw}"))
        .bind(user_id)
        .bind(hash_token(TEST_SECRET, raw))
        .execute(pool)
        .await
        .unwrap();

    raw.to_string()
}

pub async fn create_admin_with_token(pool: &PgPool) -> (i64, String) {
    let id = create_user(pool, "admin", "admin").await;
    let token = create_token(pool, id, "admin-token").await;
    (id, token)
}

pub async fn create_regular_user_with_token(pool: &PgPool) -> (i64, String) {
    let id = create_user(pool, "guest", "user").await;
    let token = create_token(pool, id, "guest-token").await;
    (id, token)
}

/// Inserts a hotel created `minutes_ago` minutes in the past.
pub async fn create_hotel_aged(pool: &PgPool, name: &str, owner_id: i64, minutes_ago: i32) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO hotels (
            name, location, description, price_per_night, facilities, images,
            rooms_available, category, owner_id, rating, created_at
        )
        VALUES ($1, 'Lisbon', 'Test hotel', 100.0, ARRAY['wifi'], ARRAY[]::TEXT[],
                5, 'standard', $2, 3.5, NOW() - ($3::float8 * INTERVAL '1 minute'))
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(owner_id)
    .bind(f64::from(minutes_ago))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_hotel(pool: &PgPool, name: &str, owner_id: i64) -> i64 {
    create_hotel_aged(pool, name, owner_id, 0).await
}

pub async fn count_hotels(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
        .fetch_one(pool)
        .await
        .unwrap()
}
