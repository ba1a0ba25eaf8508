//! Route definitions for the public blog surface.
//!
//! These are merged (not nested) into the `/api` tree because the original
//! paths are siblings: `/blog-posts`, `/blog-categories`, `/blog-tags`.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Public blog routes.
///
/// ```text
/// GET /blog-posts              -> list (published only, filterable)
/// GET /blog-posts/{id}         -> get_by_id (+1 view)
/// GET /blog-posts/slug/{slug}  -> get_by_slug (+1 view)
/// GET /blog-categories         -> categories
/// GET /blog-tags               -> tags
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blog-posts", get(blog::list))
        .route("/blog-posts/{id}", get(blog::get_by_id))
        .route("/blog-posts/slug/{slug}", get(blog::get_by_slug))
        .route("/blog-categories", get(blog::categories))
        .route("/blog-tags", get(blog::tags))
}
