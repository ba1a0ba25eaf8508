//! Public read-only handlers for the `/challenges` resource.
//!
//! Completion logic is intentionally absent (see atoll_core::rules); the
//! public surface is list/get, with mutation behind `/admin/challenges`.

use atoll_core::error::CoreError;
use atoll_core::types::DbId;
use atoll_db::models::challenge::Challenge;
use atoll_db::repositories::ChallengeRepo;
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/challenges
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Challenge>>> {
    let challenges = ChallengeRepo::list(
        &state.pool,
        atoll_db::clamp_limit(params.limit),
        atoll_db::clamp_skip(params.skip),
    )
    .await?;
    Ok(Json(challenges))
}

/// GET /api/challenges/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Challenge>> {
    let challenge = ChallengeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Challenge",
                key: id.to_string(),
            })
        })?;
    Ok(Json(challenge))
}
