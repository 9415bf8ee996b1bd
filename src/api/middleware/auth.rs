//! Bearer token authentication middleware for write endpoints.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::application::services::PRIVILEGED_ROLE;
use crate::{error::AppError, state::AppState};

/// Authenticates requests and requires the employee role.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authorization Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Validate token hash against the database
/// 3. Require the `employee` role claim
/// 4. Update `last_used_at` timestamp
/// 5. Continue to next middleware/handler
///
/// The guard runs as a route layer, so it rejects before the request body
/// is read and before any handler or store access.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer` per
/// RFC 6750) if the header is missing/malformed or the token is unknown
/// or revoked. Returns `403 Forbidden` if the token carries another role.
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

    let req = Request::from_parts(parts, body);

    st.auth_service.authorize(&token, PRIVILEGED_ROLE).await?;

    Ok(next.run(req).await)
}
