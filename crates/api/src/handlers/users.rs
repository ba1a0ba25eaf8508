//! Handlers for public user registration and the current-user endpoint.

use atoll_core::error::CoreError;
use atoll_core::validate::is_valid_email;
use atoll_db::models::user::{CreateUser, UserResponse};
use atoll_db::repositories::UserRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// Request body for `POST /api/users`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

/// POST /api/users
///
/// Public registration. The password is hashed before storage and never
/// echoed back.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
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
            is_admin: false,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/users/me
pub async fn me(CurrentUser(user): CurrentUser) -> AppResult<Json<UserResponse>> {
    Ok(Json(user.into()))
}
