//! Route definitions for the `/badges` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::badges;
use crate::state::AppState;

/// Routes mounted at `/badges`. All public reads.
///
/// ```text
/// GET /            -> list
/// GET /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(badges::list))
        .route("/{id}", get(badges::get_by_id))
}
