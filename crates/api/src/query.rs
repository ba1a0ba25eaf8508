//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?skip=&limit=`).
///
/// Values are clamped in the db crate via `clamp_limit` / `clamp_skip`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
