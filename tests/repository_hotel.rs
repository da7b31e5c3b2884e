mod common;

use hotel_listing::domain::entities::{HotelPatch, NewHotel};
use hotel_listing::domain::repositories::HotelRepository;
use hotel_listing::error::AppError;
use hotel_listing::infrastructure::persistence::PgHotelRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_hotel(name: &str, owner_id: i64) -> NewHotel {
    NewHotel {
        name: name.to_string(),
        location: "Vienna".to_string(),
        description: "Near the opera".to_string(),
        price_per_night: 150.0,
        facilities: vec!["wifi".to_string(), "bar".to_string()],
        images: vec![],
        rooms_available: 12,
        category: "boutique".to_string(),
        owner_id,
        rating: 4.0,
    }
}

async fn setup(pool: PgPool) -> (PgHotelRepository, i64) {
    let owner = common::create_user(&pool, "owner", "admin").await;
    (PgHotelRepository::new(Arc::new(pool)), owner)
}

#[sqlx::test]
async fn test_create_hotel(pool: PgPool) {
    let (repo, owner) = setup(pool).await;

    let hotel = repo.create(new_hotel("Sacher", owner)).await.unwrap();

    assert_eq!(hotel.name, "Sacher");
    assert_eq!(hotel.facilities, vec!["wifi", "bar"]);
    assert!(hotel.images.is_empty());
    assert_eq!(hotel.owner_id, owner);
    assert_eq!(hotel.created_at, hotel.updated_at);
}

#[sqlx::test]
async fn test_create_hotel_unknown_owner(pool: PgPool) {
    let (repo, _) = setup(pool).await;

    let result = repo.create(new_hotel("Orphan", 999_999)).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
}

#[sqlx::test]
async fn test_create_hotel_check_violation(pool: PgPool) {
    let (repo, owner) = setup(pool).await;

    let mut hotel = new_hotel("Overrated", owner);
    hotel.rating = 7.5;

    let result = repo.create(hotel).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let (repo, owner) = setup(pool).await;

    let created = repo.create(new_hotel("Imperial", owner)).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    let missing = repo.find_by_id(created.id + 1000).await.unwrap();

    assert_eq!(found, Some(created));
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_list_newest_first(pool: PgPool) {
    let owner = common::create_user(&pool, "owner", "admin").await;
    common::create_hotel_aged(&pool, "Old", owner, 20).await;
    common::create_hotel_aged(&pool, "New", owner, 1).await;
    let repo = PgHotelRepository::new(Arc::new(pool));

    let hotels = repo.list().await.unwrap();

    let names: Vec<_> = hotels.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["New", "Old"]);
}

#[sqlx::test]
async fn test_list_same_timestamp_breaks_ties_by_id(pool: PgPool) {
    let owner = common::create_user(&pool, "owner", "admin").await;
    sqlx::query(
        r#"
        INSERT INTO hotels (name, location, description, price_per_night, category, owner_id, created_at)
        VALUES ('First', 'X', 'd', 1, 'c', $1, '2025-01-01T00:00:00Z'),
               ('Second', 'X', 'd', 1, 'c', $1, '2025-01-01T00:00:00Z')
        "#,
    )
    .bind(owner)
    .execute(&pool)
    .await
    .unwrap();
    let repo = PgHotelRepository::new(Arc::new(pool));

    let hotels = repo.list().await.unwrap();

    assert_eq!(hotels[0].name, "Second");
    assert_eq!(hotels[1].name, "First");
}

#[sqlx::test]
async fn test_list_recent_respects_limit(pool: PgPool) {
    let owner = common::create_user(&pool, "owner", "admin").await;
    for minutes in [50, 40, 30, 20, 10] {
        common::create_hotel_aged(&pool, &format!("H{minutes}"), owner, minutes).await;
    }
    let repo = PgHotelRepository::new(Arc::new(pool));

    let hotels = repo.list_recent(3).await.unwrap();

    let names: Vec<_> = hotels.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["H10", "H20", "H30"]);
}

#[sqlx::test]
async fn test_update_partial(pool: PgPool) {
    let (repo, owner) = setup(pool).await;

    let created = repo.create(new_hotel("Before", owner)).await.unwrap();

    let updated = repo
        .update(
            created.id,
            HotelPatch {
                name: Some("After".to_string()),
                facilities: Some(vec![]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated);

    let hotel = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(hotel.name, "After");
    assert!(hotel.facilities.is_empty());
    assert_eq!(hotel.location, created.location);
    assert_eq!(hotel.price_per_night, created.price_per_night);
    assert_eq!(hotel.rating, created.rating);
    assert_eq!(hotel.owner_id, owner);
    assert!(hotel.updated_at >= created.updated_at);
}

#[sqlx::test]
async fn test_update_missing(pool: PgPool) {
    let (repo, _) = setup(pool).await;

    let updated = repo
        .update(
            777,
            HotelPatch {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(!updated);
}

#[sqlx::test]
async fn test_update_check_violation(pool: PgPool) {
    let (repo, owner) = setup(pool).await;

    let created = repo.create(new_hotel("Rooms", owner)).await.unwrap();

    let result = repo
        .update(
            created.id,
            HotelPatch {
                rooms_available: Some(-3),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let (repo, owner) = setup(pool).await;

    let created = repo.create(new_hotel("Temporary", owner)).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete_all_and_count(pool: PgPool) {
    let (repo, owner) = setup(pool).await;

    for name in ["A", "B", "C"] {
        repo.create(new_hotel(name, owner)).await.unwrap();
    }
    assert_eq!(repo.count().await.unwrap(), 3);

    let removed = repo.delete_all().await.unwrap();

    assert_eq!(removed, 3);
    assert_eq!(repo.count().await.unwrap(), 0);
    assert_eq!(repo.delete_all().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_search_by_name(pool: PgPool) {
    let (repo, owner) = setup(pool).await;

    repo.create(new_hotel("Grand Budapest", owner)).await.unwrap();
    repo.create(new_hotel("Hotel Grandeur", owner)).await.unwrap();
    repo.create(new_hotel("Small Inn", owner)).await.unwrap();

    let hotels = repo.search_by_name("GRAND").await.unwrap();

    assert_eq!(hotels.len(), 2);
    assert!(hotels.iter().all(|h| h.name.to_lowercase().contains("grand")));
}

#[sqlx::test]
async fn test_search_matches_wildcards_literally(pool: PgPool) {
    let (repo, owner) = setup(pool).await;

    repo.create(new_hotel("100% Comfort", owner)).await.unwrap();
    repo.create(new_hotel("Plain", owner)).await.unwrap();
    repo.create(new_hotel("snake_case", owner)).await.unwrap();

    assert_eq!(repo.search_by_name("%").await.unwrap().len(), 1);
    assert_eq!(repo.search_by_name("_").await.unwrap().len(), 1);
    assert!(repo.search_by_name("no match").await.unwrap().is_empty());
}
