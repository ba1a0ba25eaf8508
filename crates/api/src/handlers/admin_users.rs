//! Admin handlers for `/admin/users`.
//!
//! All handlers require an admin via [`RequireAdmin`]. Deleting an admin
//! account is refused; deleting a regular user cascades to their visits.

use atoll_core::error::CoreError;
use atoll_core::types::DbId;
use atoll_core::validate::is_valid_email;
use atoll_db::models::user::{CreateUser, UpdateUser, UserResponse};
use atoll_db::repositories::UserRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Request body for `POST /api/admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Request body for `PUT /api/admin/users/{id}`. All fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub is_admin: Option<bool>,
    /// When present, re-hashed and stored.
    pub password: Option<String>,
}

/// GET /api/admin/users
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(
        &state.pool,
        atoll_db::clamp_limit(params.limit),
        atoll_db::clamp_skip(params.skip),
    )
    .await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/admin/users
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    if !is_valid_email(&input.email) {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid email address".into(),
        )));
    }
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Validation(
            "Email already registered".into(),
        )));
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Password hashing error: {e}"))))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            name: input.name,
            password_hash: hashed,
            is_admin: input.is_admin,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/admin/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "User",
            key: id.to_string(),
        })
    })?;
    Ok(Json(user.into()))
}

/// PUT /api/admin/users/{id}
///
/// Partial update: only supplied fields are overwritten.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    if let Some(email) = &input.email {
        if !is_valid_email(email) {
            return Err(AppError::Core(CoreError::Validation(
                "Invalid email address".into(),
            )));
        }
        // Moving to an email held by a different account is a duplicate, the
        // same way the create paths treat it.
        if let Some(existing) = UserRepo::find_by_email(&state.pool, email).await? {
            if existing.id != id {
                return Err(AppError::Core(CoreError::Validation(
                    "Email already registered".into(),
                )));
            }
        }
    }

    let password_hash = match &input.password {
        Some(password) => Some(hash_password(password).map_err(|e| {
            AppError::Core(CoreError::Internal(format!("Password hashing error: {e}")))
        })?),
        None => None,
    };

    let user = UserRepo::update(
        &state.pool,
        id,
        &UpdateUser {
            email: input.email,
            name: input.name,
            is_admin: input.is_admin,
            password_hash,
        },
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "User",
            key: id.to_string(),
        })
    })?;

    Ok(Json(user.into()))
}

/// DELETE /api/admin/users/{id}
///
/// Refuses to delete admin accounts. Visits owned by the user are removed by
/// the FK cascade. Returns 204 No Content.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let user = UserRepo::find_by_id(&state.pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "User",
            key: id.to_string(),
        })
    })?;

    if user.is_admin {
        return Err(AppError::Core(CoreError::Conflict(
            "Admin users cannot be deleted".into(),
        )));
    }

    UserRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
