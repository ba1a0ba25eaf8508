//! Route definitions for the `/challenges` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::challenges;
use crate::state::AppState;

/// Routes mounted at `/challenges`. All public reads.
///
/// ```text
/// GET /            -> list
/// GET /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(challenges::list))
        .route("/{id}", get(challenges::get_by_id))
}
