//! Login handler for the `/token` endpoint.

use atoll_core::error::CoreError;
use atoll_db::repositories::UserRepo;
use axum::extract::State;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Form body for `POST /api/token` (OAuth2 password-flow shape: the email
/// travels in the `username` field).
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /api/token
///
/// Authenticate with email + password. "No such user" and "wrong password"
/// deliberately collapse into one 401 message so the endpoint cannot be used
/// to enumerate registered emails.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let invalid =
        || AppError::Core(CoreError::Unauthorized("Incorrect email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, &form.username)
        .await?
        .ok_or_else(invalid)?;

    // A corrupted stored hash fails closed: Err and Ok(false) are equivalent here.
    let password_valid =
        verify_password(&form.password, &user.password_hash).unwrap_or(false);
    if !password_valid {
        tracing::debug!(email = %form.username, "Password verification failed");
        return Err(invalid());
    }

    let token = generate_access_token(
        &user.email,
        Some(state.config.jwt.login_token_expiry_mins),
        &state.config.jwt,
    )
    .map_err(|e| AppError::Core(CoreError::Internal(format!("Token generation error: {e}"))))?;

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer",
    }))
}
