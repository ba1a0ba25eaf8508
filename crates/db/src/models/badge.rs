//! Badge entity model. Badges are seeded at startup and read-only over HTTP.

use atoll_core::rules::ProgressRule;
use atoll_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// Full badge row from the `badges` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Badge {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Awarding rule. No evaluator applies it anywhere; see atoll_core::rules.
    pub criteria: Json<ProgressRule>,
    pub created_at: Timestamp,
}

/// DTO for inserting a badge (seed routine only).
#[derive(Debug)]
pub struct CreateBadge {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub criteria: ProgressRule,
}
