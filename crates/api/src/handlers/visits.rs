//! Handlers for the `/visits` resource. Both endpoints require auth; the
//! owning user always comes from the session.

use atoll_core::error::CoreError;
use atoll_db::models::visit::{CreateVisit, Visit};
use atoll_db::repositories::{IslandRepo, UserRepo, VisitRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// POST /api/visits
///
/// Log a visit. The referenced island must exist, and the island id is added
/// to the caller's visited set at most once. The visit insert and the set
/// append are two statements -- a crash in between leaves them out of sync,
/// an accepted inconsistency window.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateVisit>,
) -> AppResult<(StatusCode, Json<Visit>)> {
    if !IslandRepo::exists(&state.pool, input.island_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Island",
            key: input.island_id.to_string(),
        }));
    }

    let visit = VisitRepo::create(&state.pool, user.id, &input).await?;
    UserRepo::add_visited_island(&state.pool, user.id, input.island_id).await?;

    Ok((StatusCode::CREATED, Json(visit)))
}

/// GET /api/visits
///
/// The caller's own visits, most recent visit date first.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Visit>>> {
    let visits = VisitRepo::list_by_user(&state.pool, user.id).await?;
    Ok(Json(visits))
}
