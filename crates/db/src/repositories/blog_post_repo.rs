//! Repository for the `blog_posts` table.

use atoll_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, BlogPostFilter, CreateBlogPost, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, content, summary, author, featured_image, tags, \
                        category, is_published, view_count, is_featured, created_at, updated_at";

/// Provides CRUD operations, filtered listing, and the view-count side effect
/// for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new post, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (title, slug, content, summary, author, featured_image,
                                     tags, category, is_published, is_featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.content)
            .bind(&input.summary)
            .bind(&input.author)
            .bind(&input.featured_image)
            .bind(&input.tags)
            .bind(&input.category)
            .bind(input.is_published)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID without touching the view counter.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by slug without touching the view counter.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Does a post with this slug already exist?
    pub async fn slug_exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM blog_posts WHERE slug = $1)")
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Increment `view_count` by one and return the post as of after the
    /// increment. The single-statement UPDATE keeps the counter atomic under
    /// concurrent reads.
    ///
    /// Only published posts are readable this way; drafts return `None` like
    /// a missing row, matching the public listing. Admin reads go through
    /// [`BlogPostRepo::find_by_id`] instead.
    pub async fn read_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET view_count = view_count + 1
             WHERE id = $1 AND is_published
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Slug variant of [`BlogPostRepo::read_by_id`]; also published-only.
    pub async fn read_by_slug(pool: &PgPool, slug: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET view_count = view_count + 1
             WHERE slug = $1 AND is_published
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List posts matching `filter`, newest-created-first.
    ///
    /// All filters are optional; NULL/false binds disable the corresponding
    /// predicate so one static query covers every combination.
    pub async fn list(
        pool: &PgPool,
        filter: &BlogPostFilter,
        limit: i64,
        skip: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE ($1::text IS NULL OR category = $1)
               AND ($2::text IS NULL OR $2 = ANY(tags))
               AND ($3::text IS NULL OR title ILIKE '%' || $3 || '%'
                                     OR content ILIKE '%' || $3 || '%')
               AND (NOT $4::boolean OR is_featured)
               AND (NOT $5::boolean OR is_published)
             ORDER BY created_at DESC
             LIMIT $6 OFFSET $7"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&filter.category)
            .bind(&filter.tag)
            .bind(&filter.search)
            .bind(filter.featured_only)
            .bind(filter.published_only)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Distinct categories across published posts, alphabetical.
    pub async fn categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT category FROM blog_posts WHERE is_published ORDER BY category",
        )
        .fetch_all(pool)
        .await
    }

    /// Distinct tags across published posts, alphabetical.
    pub async fn tags(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT unnest(tags) AS tag FROM blog_posts WHERE is_published ORDER BY tag",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a post. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                content = COALESCE($4, content),
                summary = COALESCE($5, summary),
                author = COALESCE($6, author),
                featured_image = COALESCE($7, featured_image),
                tags = COALESCE($8, tags),
                category = COALESCE($9, category),
                is_published = COALESCE($10, is_published),
                is_featured = COALESCE($11, is_featured),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.content)
            .bind(&input.summary)
            .bind(&input.author)
            .bind(&input.featured_image)
            .bind(&input.tags)
            .bind(&input.category)
            .bind(input.is_published)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a post. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of posts (seed emptiness check).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(pool)
            .await
    }
}
