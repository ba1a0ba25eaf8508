//! Admin handlers for `/admin/challenges` (create, replace, delete).

use atoll_core::error::CoreError;
use atoll_core::types::DbId;
use atoll_db::models::challenge::{Challenge, CreateChallenge};
use atoll_db::repositories::{ChallengeRepo, UserRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// POST /api/admin/challenges
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateChallenge>,
) -> AppResult<(StatusCode, Json<Challenge>)> {
    let challenge = ChallengeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(challenge)))
}

/// PUT /api/admin/challenges/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<CreateChallenge>,
) -> AppResult<Json<Challenge>> {
    let challenge = ChallengeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Challenge",
                key: id.to_string(),
            })
        })?;
    Ok(Json(challenge))
}

/// DELETE /api/admin/challenges/{id}
///
/// Refused with 409 while any user has the challenge active. Returns 204.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if UserRepo::any_active_challenge(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Challenge is active for users and cannot be deleted".into(),
        )));
    }

    let deleted = ChallengeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Challenge",
            key: id.to_string(),
        }))
    }
}
