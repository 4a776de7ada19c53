//! Posts resource accessors
//!
//! Read operations for blog posts, including slug lookup, sticky
//! ("featured") posts, and a helper that resolves featured media alongside
//! each post. Every request carries the fixed `_fields` whitelist so
//! responses stay lean while still including the Yoast SEO head.

use std::time::Duration;

use futures::future::join_all;
use serde::Serialize;
use tracing::warn;

use super::{join_values, Media, Post, PostStatus};
use crate::client::{WpClient, WpError};

/// Time-to-live for cached post responses
const POSTS_TTL: Duration = Duration::from_secs(1800);

/// Field whitelist requested for every post response
const POST_FIELDS: &str = "id,date,date_gmt,guid,modified,modified_gmt,slug,status,type,link,title,content,excerpt,author,featured_media,comment_status,ping_status,sticky,template,format,meta,categories,tags,_links,yoast_head,yoast_head_json";

/// Filters for listing posts
///
/// `None` fields are omitted from the query string; list-valued filters are
/// serialized comma-joined (`categories=1,2,3`).
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// Page of results to fetch (1-based)
    pub page: Option<u32>,
    /// Number of results per page
    pub per_page: Option<u32>,
    /// Restrict to posts in any of these category IDs
    pub categories: Vec<u64>,
    /// Restrict to posts with any of these tag IDs
    pub tags: Vec<u64>,
    /// Full-text search term
    pub search: Option<String>,
    /// Restrict to posts with this publication status
    pub status: Option<PostStatus>,
}

impl PostQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if !self.categories.is_empty() {
            params.push(("categories", join_values(&self.categories)));
        }
        if !self.tags.is_empty() {
            params.push(("tags", join_values(&self.tags)));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        params
    }
}

/// A post together with its resolved featured media
///
/// Serialize-only: this is an assembled view, never read back from the API.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithMedia {
    pub post: Post,
    pub featured_media: Option<Media>,
}

impl WpClient {
    /// Fetches posts matching `query`
    pub async fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, WpError> {
        let mut params = query.params();
        params.push(("_fields", POST_FIELDS.to_string()));
        self.fetch_cached("posts", &params, POSTS_TTL).await
    }

    /// Fetches a single post by ID
    pub async fn get_post(&self, id: u64) -> Result<Post, WpError> {
        let params = vec![("_fields", POST_FIELDS.to_string())];
        self.fetch_cached(&format!("posts/{}", id), &params, POSTS_TTL)
            .await
    }

    /// Fetches posts with the given slug
    ///
    /// The API answers slug lookups with a list; slugs are unique, so it
    /// holds at most one element.
    pub async fn get_posts_by_slug(&self, slug: &str) -> Result<Vec<Post>, WpError> {
        let params = vec![
            ("slug", slug.to_string()),
            ("_fields", POST_FIELDS.to_string()),
        ];
        self.fetch_cached("posts", &params, POSTS_TTL).await
    }

    /// Fetches up to `limit` sticky posts
    pub async fn featured_posts(&self, limit: u32) -> Result<Vec<Post>, WpError> {
        let params = vec![
            ("sticky", "true".to_string()),
            ("per_page", limit.to_string()),
            ("_fields", POST_FIELDS.to_string()),
        ];
        self.fetch_cached("posts", &params, POSTS_TTL).await
    }

    /// Fetches posts matching `query` and resolves each featured media item
    ///
    /// Media lookups run concurrently. A post without featured media, or
    /// whose media lookup fails, carries `None` rather than failing the
    /// whole call.
    pub async fn posts_with_media(&self, query: &PostQuery) -> Result<Vec<PostWithMedia>, WpError> {
        let posts = self.list_posts(query).await?;
        let lookups = posts.iter().map(|post| self.resolve_media(post.featured_media));
        let media = join_all(lookups).await;

        Ok(posts
            .into_iter()
            .zip(media)
            .map(|(post, featured_media)| PostWithMedia {
                post,
                featured_media,
            })
            .collect())
    }

    async fn resolve_media(&self, media_id: u64) -> Option<Media> {
        if media_id == 0 {
            return None;
        }
        match self.get_media(media_id).await {
            Ok(media) => Some(media),
            Err(error) => {
                warn!(media_id, %error, "failed to resolve featured media");
                None
            }
        }
    }
}
