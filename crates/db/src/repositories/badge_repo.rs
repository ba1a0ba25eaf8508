//! Repository for the `badges` table. Badges are seeded, then read-only.

use atoll_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::badge::{Badge, CreateBadge};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, image_url, criteria, created_at";

/// Provides insert (seed only) and reads for badges.
pub struct BadgeRepo;

impl BadgeRepo {
    /// Insert a new badge, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBadge) -> Result<Badge, sqlx::Error> {
        let query = format!(
            "INSERT INTO badges (name, description, image_url, criteria)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Badge>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(Json(&input.criteria))
            .fetch_one(pool)
            .await
    }

    /// Find a badge by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges WHERE id = $1");
        sqlx::query_as::<_, Badge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all badges in seeding order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges ORDER BY created_at");
        sqlx::query_as::<_, Badge>(&query).fetch_all(pool).await
    }

    /// Number of badge definitions (seed emptiness check).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM badges")
            .fetch_one(pool)
            .await
    }
}
