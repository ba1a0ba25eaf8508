//! Blog post entity model and DTOs.

use atoll_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full blog post row from the `blog_posts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: String,
    pub author: String,
    pub featured_image: Option<String>,
    pub tags: Vec<String>,
    pub category: String,
    pub is_published: bool,
    pub view_count: i32,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: String,
    pub author: String,
    pub featured_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    #[serde(default = "default_published")]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
}

fn default_published() -> bool {
    true
}

/// DTO for partially updating a blog post. Only non-`None` fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub featured_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
}

/// Filters accepted by the public blog listing.
#[derive(Debug, Default)]
pub struct BlogPostFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Posts whose tag array contains this tag.
    pub tag: Option<String>,
    /// Case-insensitive substring match across title and content.
    pub search: Option<String>,
    /// Only posts flagged `is_featured`.
    pub featured_only: bool,
    /// Restrict to published posts (public endpoints) or not (admin listing).
    pub published_only: bool,
}
