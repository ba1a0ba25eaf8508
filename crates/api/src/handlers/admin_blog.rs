//! Admin handlers for `/admin/blog-posts` (full CRUD).
//!
//! Unlike the public surface, admin reads include unpublished posts and do
//! NOT increment the view counter.

use atoll_core::error::CoreError;
use atoll_core::types::DbId;
use atoll_core::validate::is_valid_slug;
use atoll_db::models::blog_post::{BlogPost, BlogPostFilter, CreateBlogPost, UpdateBlogPost};
use atoll_db::repositories::BlogPostRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/admin/blog-posts
///
/// All posts including unpublished, newest-created-first.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let filter = BlogPostFilter {
        published_only: false,
        ..Default::default()
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

/// GET /api/admin/blog-posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "BlogPost",
                key: id.to_string(),
            })
        })?;
    Ok(Json(post))
}

/// POST /api/admin/blog-posts
///
/// Slug must be well-formed and unique.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    if !is_valid_slug(&input.slug) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid slug '{}'",
            input.slug
        ))));
    }
    if BlogPostRepo::slug_exists(&state.pool, &input.slug).await? {
        return Err(AppError::Core(CoreError::Validation(
            "Slug already in use".into(),
        )));
    }

    let post = BlogPostRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/admin/blog-posts/{id}
///
/// Partial update: only supplied fields are overwritten; `updated_at` is
/// refreshed.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    if let Some(slug) = &input.slug {
        if !is_valid_slug(slug) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid slug '{slug}'"
            ))));
        }
        // Changing the slug to one held by a different post is a duplicate.
        if let Some(existing) = BlogPostRepo::find_by_slug(&state.pool, slug).await? {
            if existing.id != id {
                return Err(AppError::Core(CoreError::Validation(
                    "Slug already in use".into(),
                )));
            }
        }
    }

    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "BlogPost",
                key: id.to_string(),
            })
        })?;
    Ok(Json(post))
}

/// DELETE /api/admin/blog-posts/{id}
///
/// Returns 204 No Content.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BlogPostRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            key: id.to_string(),
        }))
    }
}
