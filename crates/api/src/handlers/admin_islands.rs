//! Admin handlers for `/admin/islands` (create, replace, delete).
//!
//! Reads go through the public `/islands` endpoints; the admin surface only
//! carries the mutations.

use atoll_core::error::CoreError;
use atoll_core::types::DbId;
use atoll_db::models::island::{CreateIsland, Island};
use atoll_db::repositories::{IslandRepo, UserRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::handlers::islands::validate_island;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/admin/islands
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateIsland>,
) -> AppResult<(StatusCode, Json<Island>)> {
    validate_island(&input)?;
    let island = IslandRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(island)))
}

/// PUT /api/admin/islands/{id}
///
/// Full replacement of mutable fields; `updated_at` is refreshed.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<CreateIsland>,
) -> AppResult<Json<Island>> {
    validate_island(&input)?;
    let island = IslandRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Island",
                key: id.to_string(),
            })
        })?;
    Ok(Json(island))
}

/// DELETE /api/admin/islands/{id}
///
/// Refused with 409 while any user's visited set references the island, so
/// no dangling island ids are left behind. Returns 204 No Content.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if UserRepo::any_visited_island(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Island has been visited by users and cannot be deleted".into(),
        )));
    }

    let deleted = IslandRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Island",
            key: id.to_string(),
        }))
    }
}
