//! Public handlers for the `/islands` resource.

use atoll_core::error::CoreError;
use atoll_core::island_types::{is_valid_island_type, ISLAND_TYPES};
use atoll_core::types::DbId;
use atoll_db::models::island::{CreateIsland, Island};
use atoll_db::repositories::IslandRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// Reject payloads whose island type is not one of the known names.
pub(crate) fn validate_island(input: &CreateIsland) -> Result<(), AppError> {
    if !is_valid_island_type(&input.island_type) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown island type '{}'; expected one of {:?}",
            input.island_type, ISLAND_TYPES
        ))));
    }
    Ok(())
}

/// POST /api/islands
///
/// Public create, kept for parity with the original surface; the admin
/// variant lives under `/admin/islands`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateIsland>,
) -> AppResult<(StatusCode, Json<Island>)> {
    validate_island(&input)?;
    let island = IslandRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(island)))
}

/// GET /api/islands
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Island>>> {
    let islands = IslandRepo::list(
        &state.pool,
        atoll_db::clamp_limit(params.limit),
        atoll_db::clamp_skip(params.skip),
    )
    .await?;
    Ok(Json(islands))
}

/// GET /api/islands/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Island>> {
    let island = IslandRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Island",
                key: id.to_string(),
            })
        })?;
    Ok(Json(island))
}
