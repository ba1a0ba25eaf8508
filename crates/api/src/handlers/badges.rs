//! Public read-only handlers for the `/badges` resource.
//!
//! Badges are seeded at startup; no awarding logic exists anywhere, so the
//! surface is list/get only.

use atoll_core::error::CoreError;
use atoll_core::types::DbId;
use atoll_db::models::badge::Badge;
use atoll_db::repositories::BadgeRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/badges
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Badge>>> {
    let badges = BadgeRepo::list(&state.pool).await?;
    Ok(Json(badges))
}

/// GET /api/badges/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Badge>> {
    let badge = BadgeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Badge",
                key: id.to_string(),
            })
        })?;
    Ok(Json(badge))
}
