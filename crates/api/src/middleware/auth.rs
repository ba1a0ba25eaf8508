//! Bearer-token authentication extractor for Axum handlers.

use atoll_core::error::CoreError;
use atoll_db::models::user::User;
use atoll_db::repositories::UserRepo;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the JWT Bearer token in the
/// `Authorization` header.
///
/// Resolution validates the token, extracts the subject email, and loads the
/// user row -- a valid token whose user has since been deleted is rejected.
///
/// ```ignore
/// async fn my_handler(CurrentUser(user): CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let user = UserRepo::find_by_email(&state.pool, &claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Could not validate credentials".into(),
                ))
            })?;

        Ok(CurrentUser(user))
    }
}
