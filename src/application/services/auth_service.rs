//! Authentication and authorization service.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{Actor, User};
use crate::domain::repositories::{TokenRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Hashes a raw token with HMAC-SHA256 keyed by `signing_secret`.
///
/// Returns a 64-character lowercase hex-encoded MAC. The admin CLI uses the
/// same routine when issuing tokens.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Service for authenticating bearer tokens and authorizing actors.
///
/// Identity comes only from the verified token. The actor is the user the
/// token was issued to.
pub struct AuthService<T: TokenRepository, U: UserRepository> {
    tokens: Arc<T>,
    users: Arc<U>,
    signing_secret: String,
}

impl<T: TokenRepository, U: UserRepository> AuthService<T, U> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `tokens` - token repository
    /// - `users` - user repository used for role checks
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(tokens: Arc<T>, users: Arc<U>, signing_secret: String) -> Self {
        Self {
            tokens,
            users,
            signing_secret,
        }
    }

    /// Authenticates a raw token and resolves the actor behind it.
    ///
    /// On success, updates the token's `last_used_at` timestamp. A failure
    /// to record usage does not fail authentication.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Actor, AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        let user_id = self
            .tokens
            .find_user_id(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or revoked token"}),
                )
            })?;

        if let Err(e) = self.tokens.update_last_used(&token_hash).await {
            tracing::warn!(error = %e, user_id, "Failed to record token usage");
        }

        Ok(Actor { user_id })
    }

    /// Resolves the actor's user record and requires the admin role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user no longer exists.
    /// Returns [`AppError::Forbidden`] if the user is not an admin.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn require_admin(&self, actor: Actor) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_id(actor.user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("User not found", json!({"user_id": actor.user_id}))
            })?;

        if !user.is_admin() {
            tracing::warn!(user_id = user.id, role = %user.role, "Admin access denied");
            return Err(AppError::forbidden(
                "You do not have admin access",
                json!({"role": user.role.as_str()}),
            ));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use crate::domain::repositories::{MockTokenRepository, MockUserRepository};
    use chrono::Utc;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn user_with_role(id: i64, role: Role) -> User {
        User {
            id,
            name: format!("user-{id}"),
            role,
            created_at: Utc::now(),
        }
    }

    fn service(
        tokens: MockTokenRepository,
        users: MockUserRepository,
    ) -> AuthService<MockTokenRepository, MockUserRepository> {
        AuthService::new(Arc::new(tokens), Arc::new(users), test_secret())
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut tokens = MockTokenRepository::new();

        let expected_hash = hash_token(&test_secret(), "valid-token");
        let lookup_hash = expected_hash.clone();

        tokens
            .expect_find_user_id()
            .withf(move |hash| hash == lookup_hash)
            .times(1)
            .returning(|_| Ok(Some(7)));

        tokens
            .expect_update_last_used()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(()));

        let svc = service(tokens, MockUserRepository::new());

        let actor = svc.authenticate("valid-token").await.unwrap();

        assert_eq!(actor, Actor { user_id: 7 });
    }

    #[tokio::test]
    async fn test_authenticate_invalid_token() {
        let mut tokens = MockTokenRepository::new();

        tokens
            .expect_find_user_id()
            .times(1)
            .returning(|_| Ok(None));
        tokens.expect_update_last_used().never();

        let svc = service(tokens, MockUserRepository::new());

        let result = svc.authenticate("invalid-token").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_survives_last_used_failure() {
        let mut tokens = MockTokenRepository::new();

        tokens
            .expect_find_user_id()
            .times(1)
            .returning(|_| Ok(Some(1)));
        tokens
            .expect_update_last_used()
            .times(1)
            .returning(|_| Err(AppError::internal("An error occurred", json!({}))));

        let svc = service(tokens, MockUserRepository::new());

        assert!(svc.authenticate("token").await.is_ok());
    }

    #[tokio::test]
    async fn test_require_admin_success() {
        let mut users = MockUserRepository::new();

        users
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(user_with_role(id, Role::Admin))));

        let svc = service(MockTokenRepository::new(), users);

        let user = svc.require_admin(Actor { user_id: 1 }).await.unwrap();

        assert!(user.is_admin());
    }

    #[tokio::test]
    async fn test_require_admin_missing_user() {
        let mut users = MockUserRepository::new();

        users.expect_find_by_id().times(1).returning(|_| Ok(None));

        let svc = service(MockTokenRepository::new(), users);

        let result = svc.require_admin(Actor { user_id: 99 }).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_require_admin_rejects_regular_user() {
        let mut users = MockUserRepository::new();

        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(user_with_role(id, Role::User))));

        let svc = service(MockTokenRepository::new(), users);

        let result = svc.require_admin(Actor { user_id: 2 }).await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[test]
    fn test_hash_token_consistency() {
        let hash1 = hash_token(&test_secret(), "test-token");
        let hash2 = hash_token(&test_secret(), "test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_hash_token_different_inputs() {
        assert_ne!(
            hash_token(&test_secret(), "token1"),
            hash_token(&test_secret(), "token2")
        );
    }

    #[test]
    fn test_hash_token_secret_matters() {
        assert_ne!(hash_token("secret-a", "token"), hash_token("secret-b", "token"));
    }
}
