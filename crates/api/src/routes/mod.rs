pub mod admin;
pub mod badges;
pub mod blog;
pub mod challenges;
pub mod health;
pub mod islands;
pub mod visits;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /token                         login (form-encoded, public)
/// /users                         register (public)
/// /users/me                      current user profile (requires auth)
///
/// /islands                       list, create (public)
/// /islands/{id}                  get (public)
///
/// /visits                        list, create (requires auth)
///
/// /badges                        list (public)
/// /badges/{id}                   get (public)
///
/// /challenges                    list (public)
/// /challenges/{id}               get (public)
///
/// /blog-posts                    list published (public, filterable)
/// /blog-posts/{id}               get + count view (public)
/// /blog-posts/slug/{slug}        get + count view (public)
/// /blog-categories               distinct categories (public)
/// /blog-tags                     distinct tags (public)
///
/// /admin/users                   list, create (admin only)
/// /admin/users/{id}              get, update, delete
/// /admin/islands                 create
/// /admin/islands/{id}            update, delete
/// /admin/challenges              create
/// /admin/challenges/{id}         update, delete
/// /admin/blog-posts              list (incl. unpublished), create
/// /admin/blog-posts/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication and registration.
        .route("/token", post(handlers::auth::login))
        .route("/users", post(handlers::users::register))
        .route("/users/me", get(handlers::users::me))
        // Island catalog (public reads).
        .nest("/islands", islands::router())
        // Visit log (authenticated).
        .nest("/visits", visits::router())
        // Badge and challenge catalogs (public reads).
        .nest("/badges", badges::router())
        .nest("/challenges", challenges::router())
        // Blog surface (public reads).
        .merge(blog::router())
        // Admin CRUD (admin only, enforced by handler extractors).
        .nest("/admin", admin::router())
}
