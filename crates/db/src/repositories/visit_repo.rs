//! Repository for the `visits` table. Visits are append-only.

use atoll_core::types::DbId;
use sqlx::PgPool;

use crate::models::visit::{CreateVisit, Visit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, island_id, user_id, visit_date, notes, photo_urls, created_at";

/// Provides insert and per-user listing for visits.
pub struct VisitRepo;

impl VisitRepo {
    /// Insert a new visit owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateVisit,
    ) -> Result<Visit, sqlx::Error> {
        let query = format!(
            "INSERT INTO visits (island_id, user_id, visit_date, notes, photo_urls)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(input.island_id)
            .bind(user_id)
            .bind(input.visit_date)
            .bind(&input.notes)
            .bind(&input.photo_urls)
            .fetch_one(pool)
            .await
    }

    /// List a user's visits, most recent visit date first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Visit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visits WHERE user_id = $1 ORDER BY visit_date DESC"
        );
        sqlx::query_as::<_, Visit>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Number of visits owned by a user (test and integrity helper).
    pub async fn count_by_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM visits WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
