//! Repository for the `challenges` table.

use atoll_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::challenge::{Challenge, CreateChallenge};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, objective, duration_days, reward, is_active, created_at";

/// Provides CRUD operations for challenges.
pub struct ChallengeRepo;

impl ChallengeRepo {
    /// Insert a new challenge, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateChallenge) -> Result<Challenge, sqlx::Error> {
        let query = format!(
            "INSERT INTO challenges (name, description, objective, duration_days, reward, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Challenge>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(Json(&input.objective))
            .bind(input.duration_days)
            .bind(Json(&input.reward))
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a challenge by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Challenge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM challenges WHERE id = $1");
        sqlx::query_as::<_, Challenge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List challenges, most recently created first.
    pub async fn list(pool: &PgPool, limit: i64, skip: i64) -> Result<Vec<Challenge>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM challenges ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Challenge>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Replace all mutable fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateChallenge,
    ) -> Result<Option<Challenge>, sqlx::Error> {
        let query = format!(
            "UPDATE challenges SET
                name = $2, description = $3, objective = $4, duration_days = $5,
                reward = $6, is_active = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Challenge>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(Json(&input.objective))
            .bind(input.duration_days)
            .bind(Json(&input.reward))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a challenge. Returns `true` if a row was removed.
    ///
    /// Callers must run the user-reference check first.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM challenges WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of challenge definitions (seed emptiness check).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM challenges")
            .fetch_one(pool)
            .await
    }
}
