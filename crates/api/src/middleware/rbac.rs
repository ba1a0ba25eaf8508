//! Admin-gating extractor.
//!
//! Wraps [`CurrentUser`] and rejects requests from non-admin accounts. The
//! per-endpoint policy is static: a handler either takes no identity, a
//! [`CurrentUser`], or a [`RequireAdmin`].

use atoll_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an authenticated admin. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user.is_admin is guaranteed here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub atoll_db::models::user::User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin privileges required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}
