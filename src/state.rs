//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, HotelService};
use crate::infrastructure::persistence::{PgHotelRepository, PgTokenRepository, PgUserRepository};

pub type AppHotelService = HotelService<PgHotelRepository>;
pub type AppAuthService = AuthService<PgTokenRepository, PgUserRepository>;

/// Services shared across requests. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub hotel_service: Arc<AppHotelService>,
    pub auth_service: Arc<AppAuthService>,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String) -> Self {
        let hotel_repository = Arc::new(PgHotelRepository::new(pool.clone()));
        let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool));

        Self {
            hotel_service: Arc::new(HotelService::new(hotel_repository)),
            auth_service: Arc::new(AuthService::new(
                token_repository,
                user_repository,
                token_signing_secret,
            )),
        }
    }
}
