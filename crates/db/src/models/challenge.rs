//! Challenge entity model and DTOs.

use atoll_core::rules::{ChallengeReward, ProgressRule};
use atoll_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Full challenge row from the `challenges` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Challenge {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Completion rule. No evaluator applies it anywhere; see atoll_core::rules.
    pub objective: Json<ProgressRule>,
    pub duration_days: i32,
    pub reward: Json<ChallengeReward>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a challenge; also used as the full-replacement update body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChallenge {
    pub name: String,
    pub description: String,
    pub objective: ProgressRule,
    pub duration_days: i32,
    pub reward: ChallengeReward,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
