//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Resolve the token hash to the user it was issued to
/// 3. Update `last_used_at` timestamp
/// 4. Insert the resulting [`crate::domain::entities::Actor`] into request extensions
/// 5. Continue to next middleware/handler
///
/// Role checks are left to the handlers.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer`) if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token is not found or revoked
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let actor = st.auth_service.authenticate(&token).await?;
    tracing::debug!(user_id = actor.user_id, "Request authenticated");

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(actor);

    Ok(next.run(req).await)
}
