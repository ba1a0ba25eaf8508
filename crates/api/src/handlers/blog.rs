//! Public handlers for the blog surface.
//!
//! Reads by id or slug increment `view_count` and return the post as of
//! after the increment. The whole surface is published-only: drafts 404 on
//! direct reads just as they are hidden from the listing.

use atoll_core::error::CoreError;
use atoll_core::types::DbId;
use atoll_db::models::blog_post::{BlogPost, BlogPostFilter};
use atoll_db::repositories::BlogPostRepo;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/blog-posts`.
#[derive(Debug, Deserialize)]
pub struct BlogListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    #[serde(default)]
    pub featured_only: bool,
}

/// GET /api/blog-posts
///
/// Published posts, newest-created-first, with optional category, tag,
/// free-text search, and featured filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<BlogListParams>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let filter = BlogPostFilter {
        category: params.category,
        tag: params.tag,
        search: params.search,
        featured_only: params.featured_only,
        published_only: true,
    };
    let posts = BlogPostRepo::list(
        &state.pool,
        &filter,
        atoll_db::clamp_limit(params.limit),
        atoll_db::clamp_skip(params.skip),
    )
    .await?;
    Ok(Json(posts))
}

/// GET /api/blog-posts/{id}
///
/// Increments the view counter as a side effect of the read.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::read_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "BlogPost",
                key: id.to_string(),
            })
        })?;
    Ok(Json(post))
}

/// GET /api/blog-posts/slug/{slug}
///
/// Slug variant of [`get_by_id`]; same view-count side effect.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::read_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "BlogPost",
                key: slug.clone(),
            })
        })?;
    Ok(Json(post))
}

/// GET /api/blog-categories
pub async fn categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(BlogPostRepo::categories(&state.pool).await?))
}

/// GET /api/blog-tags
pub async fn tags(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    Ok(Json(BlogPostRepo::tags(&state.pool).await?))
}
