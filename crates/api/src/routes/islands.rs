//! Route definitions for the `/islands` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::islands;
use crate::state::AppState;

/// Routes mounted at `/islands`.
///
/// ```text
/// GET  /           -> list
/// POST /           -> create
/// GET  /{id}       -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(islands::list).post(islands::create))
        .route("/{id}", get(islands::get_by_id))
}
