//! Island entity model and DTOs.

use atoll_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full island row from the `islands` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Island {
    pub id: DbId,
    pub name: String,
    pub atoll: String,
    pub latitude: f64,
    pub longitude: f64,
    /// One of `resort`, `inhabited`, `uninhabited`.
    #[serde(rename = "type")]
    pub island_type: String,
    pub population: Option<i32>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub image_urls: Vec<String>,
    pub size_km2: Option<f64>,
    pub amenities: Vec<String>,
    pub water_activities: Vec<String>,
    pub transfer_options: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an island; also used as the full-replacement update body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIsland {
    pub name: String,
    pub atoll: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub island_type: String,
    pub population: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub size_km2: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub water_activities: Vec<String>,
    #[serde(default)]
    pub transfer_options: Vec<String>,
}
