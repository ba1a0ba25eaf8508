//! Visit entity model and DTOs. Visits are append-only.

use atoll_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full visit row from the `visits` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Visit {
    pub id: DbId,
    pub island_id: DbId,
    pub user_id: DbId,
    pub visit_date: Timestamp,
    pub notes: Option<String>,
    pub photo_urls: Vec<String>,
    pub created_at: Timestamp,
}

/// DTO for logging a visit. The owning user comes from the session, never
/// from the request body.
#[derive(Debug, Deserialize)]
pub struct CreateVisit {
    pub island_id: DbId,
    pub visit_date: Timestamp,
    pub notes: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}
