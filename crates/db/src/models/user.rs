//! User entity model and DTOs.

use atoll_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub is_admin: bool,
    pub visited_islands: Vec<DbId>,
    pub badges: Vec<DbId>,
    pub active_challenges: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub is_admin: bool,
    pub visited_islands: Vec<DbId>,
    pub badges: Vec<DbId>,
    pub active_challenges: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            email: u.email,
            name: u.name,
            is_admin: u.is_admin,
            visited_islands: u.visited_islands,
            badges: u.badges,
            active_challenges: u.active_challenges,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// DTO for inserting a new user (password already hashed by the caller).
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub is_admin: bool,
}

/// DTO for partially updating a user. Only non-`None` fields are applied.
#[derive(Debug, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub is_admin: Option<bool>,
    pub password_hash: Option<String>,
}
