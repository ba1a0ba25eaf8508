//! Route definitions for the `/admin` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin_blog, admin_challenges, admin_islands, admin_users};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the admin flag (enforced by the `RequireAdmin`
/// extractor in each handler).
///
/// ```text
/// GET    /users                -> list
/// POST   /users                -> create
/// GET    /users/{id}           -> get_by_id
/// PUT    /users/{id}           -> update
/// DELETE /users/{id}           -> delete (refused for admins)
///
/// POST   /islands              -> create
/// PUT    /islands/{id}         -> update
/// DELETE /islands/{id}         -> delete (refused while visited)
///
/// POST   /challenges           -> create
/// PUT    /challenges/{id}      -> update
/// DELETE /challenges/{id}      -> delete (refused while active)
///
/// GET    /blog-posts           -> list (incl. unpublished)
/// POST   /blog-posts           -> create
/// GET    /blog-posts/{id}      -> get_by_id (no view increment)
/// PUT    /blog-posts/{id}      -> update
/// DELETE /blog-posts/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(admin_users::list).post(admin_users::create),
        )
        .route(
            "/users/{id}",
            get(admin_users::get_by_id)
                .put(admin_users::update)
                .delete(admin_users::delete),
        )
        .route("/islands", post(admin_islands::create))
        .route(
            "/islands/{id}",
            put(admin_islands::update).delete(admin_islands::delete),
        )
        .route("/challenges", post(admin_challenges::create))
        .route(
            "/challenges/{id}",
            put(admin_challenges::update).delete(admin_challenges::delete),
        )
        .route(
            "/blog-posts",
            get(admin_blog::list).post(admin_blog::create),
        )
        .route(
            "/blog-posts/{id}",
            get(admin_blog::get_by_id)
                .put(admin_blog::update)
                .delete(admin_blog::delete),
        )
}
