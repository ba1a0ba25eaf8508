//! Repository for the `users` table.

use atoll_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, password_hash, is_admin, visited_islands, \
                        badges, active_challenges, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, name, password_hash, is_admin)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.password_hash)
            .bind(input.is_admin)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive; emails are the natural key).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List users ordered by most recently created first.
    pub async fn list(pool: &PgPool, limit: i64, skip: i64) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Update a user. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                name = COALESCE($3, name),
                is_admin = COALESCE($4, is_admin),
                password_hash = COALESCE($5, password_hash),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.name)
            .bind(input.is_admin)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a user. Their visits go with them via ON DELETE CASCADE.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Append an island to the user's visited set unless it is already there.
    ///
    /// The guard keeps `visited_islands` duplicate-free without a separate
    /// read-modify-write round trip.
    pub async fn add_visited_island(
        pool: &PgPool,
        id: DbId,
        island_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET
                visited_islands = array_append(visited_islands, $2),
                updated_at = NOW()
             WHERE id = $1 AND NOT ($2 = ANY(visited_islands))",
        )
        .bind(id)
        .bind(island_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Does any user's visited set reference this island?
    pub async fn any_visited_island(pool: &PgPool, island_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE $1 = ANY(visited_islands))")
            .bind(island_id)
            .fetch_one(pool)
            .await
    }

    /// Does any user have this challenge in their active set?
    pub async fn any_active_challenge(
        pool: &PgPool,
        challenge_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE $1 = ANY(active_challenges))")
            .bind(challenge_id)
            .fetch_one(pool)
            .await
    }
}
