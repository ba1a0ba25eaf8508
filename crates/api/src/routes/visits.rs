//! Route definitions for the `/visits` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::visits;
use crate::state::AppState;

/// Routes mounted at `/visits`.
///
/// Both routes require authentication (enforced by the `CurrentUser`
/// extractor) and operate on the caller's own visit log.
///
/// ```text
/// GET  /           -> list
/// POST /           -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(visits::list).post(visits::create))
}
