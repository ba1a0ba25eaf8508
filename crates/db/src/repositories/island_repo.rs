//! Repository for the `islands` table.

use atoll_core::types::DbId;
use sqlx::PgPool;

use crate::models::island::{CreateIsland, Island};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, atoll, latitude, longitude, island_type, population, \
                        description, tags, image_urls, size_km2, amenities, \
                        water_activities, transfer_options, created_at, updated_at";

/// Provides CRUD operations for the island catalog.
pub struct IslandRepo;

impl IslandRepo {
    /// Insert a new island, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateIsland) -> Result<Island, sqlx::Error> {
        let query = format!(
            "INSERT INTO islands (name, atoll, latitude, longitude, island_type, population,
                                  description, tags, image_urls, size_km2, amenities,
                                  water_activities, transfer_options)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Island>(&query)
            .bind(&input.name)
            .bind(&input.atoll)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.island_type)
            .bind(input.population)
            .bind(&input.description)
            .bind(&input.tags)
            .bind(&input.image_urls)
            .bind(input.size_km2)
            .bind(&input.amenities)
            .bind(&input.water_activities)
            .bind(&input.transfer_options)
            .fetch_one(pool)
            .await
    }

    /// Find an island by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Island>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM islands WHERE id = $1");
        sqlx::query_as::<_, Island>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Does an island with this ID exist? Cheaper than fetching the row.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM islands WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List islands alphabetically (catalog order).
    pub async fn list(pool: &PgPool, limit: i64, skip: i64) -> Result<Vec<Island>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM islands ORDER BY name LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Island>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Replace all mutable fields and refresh `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateIsland,
    ) -> Result<Option<Island>, sqlx::Error> {
        let query = format!(
            "UPDATE islands SET
                name = $2, atoll = $3, latitude = $4, longitude = $5, island_type = $6,
                population = $7, description = $8, tags = $9, image_urls = $10,
                size_km2 = $11, amenities = $12, water_activities = $13,
                transfer_options = $14, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Island>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.atoll)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.island_type)
            .bind(input.population)
            .bind(&input.description)
            .bind(&input.tags)
            .bind(&input.image_urls)
            .bind(input.size_km2)
            .bind(&input.amenities)
            .bind(&input.water_activities)
            .bind(&input.transfer_options)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an island. Returns `true` if a row was removed.
    ///
    /// Callers must run the user-reference check first; the visits FK is only
    /// a backstop.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM islands WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of islands in the catalog (seed emptiness check).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM islands")
            .fetch_one(pool)
            .await
    }
}
