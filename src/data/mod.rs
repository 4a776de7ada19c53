//! Core data models for WordPress REST resources
//!
//! This module contains the typed representations of the JSON shapes the
//! WordPress REST API returns, along with one accessor submodule per
//! resource. The records are passthrough models: fields mirror the remote
//! payload and carry no invariants beyond presence. Fields a `_fields`
//! projection may omit default instead of failing deserialization.

pub mod categories;
pub mod media;
pub mod newsletter;
pub mod pages;
pub mod posts;
pub mod users;

pub use categories::CategoryQuery;
pub use media::{MediaQuery, MediaType};
pub use pages::PageQuery;
pub use posts::{PostQuery, PostWithMedia};
pub use users::UserQuery;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A rendered text field (`{ "rendered": "..." }`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rendered {
    /// The rendered HTML
    #[serde(default)]
    pub rendered: String,
}

/// A rendered text field that may be password-protected
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtectedRendered {
    /// The rendered HTML
    #[serde(default)]
    pub rendered: String,
    /// Whether the content is behind a password
    #[serde(default)]
    pub protected: bool,
}

/// Publication status of a post or page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Publish,
    Future,
    Draft,
    Pending,
    Private,
}

impl PostStatus {
    /// The status as it appears in query parameters and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Publish => "publish",
            PostStatus::Future => "future",
            PostStatus::Draft => "draft",
            PostStatus::Pending => "pending",
            PostStatus::Private => "private",
        }
    }
}

impl Default for PostStatus {
    fn default() -> Self {
        PostStatus::Publish
    }
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    /// Publication date in the site's timezone (`YYYY-MM-DDTHH:MM:SS`)
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub date_gmt: String,
    #[serde(default)]
    pub guid: Rendered,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub modified_gmt: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub status: PostStatus,
    /// Resource type discriminator (`post`)
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: ProtectedRendered,
    #[serde(default)]
    pub excerpt: ProtectedRendered,
    /// Author user ID
    #[serde(default)]
    pub author: u64,
    /// Featured media attachment ID; zero when unset
    #[serde(default)]
    pub featured_media: u64,
    #[serde(default)]
    pub comment_status: String,
    #[serde(default)]
    pub ping_status: String,
    #[serde(default)]
    pub sticky: bool,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub meta: Value,
    #[serde(default)]
    pub categories: Vec<u64>,
    #[serde(default)]
    pub tags: Vec<u64>,
    #[serde(rename = "_links", default)]
    pub links: Value,
    /// Raw Yoast SEO head markup, when the Yoast plugin is active
    #[serde(default)]
    pub yoast_head: Option<String>,
    /// Structured Yoast SEO head data, when the Yoast plugin is active
    #[serde(default)]
    pub yoast_head_json: Option<YoastSeo>,
}

/// A static page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: u64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub date_gmt: String,
    #[serde(default)]
    pub guid: Rendered,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub modified_gmt: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub status: PostStatus,
    /// Resource type discriminator (`page`)
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: ProtectedRendered,
    #[serde(default)]
    pub excerpt: ProtectedRendered,
    #[serde(default)]
    pub author: u64,
    #[serde(default)]
    pub featured_media: u64,
    #[serde(default)]
    pub comment_status: String,
    #[serde(default)]
    pub ping_status: String,
    #[serde(default)]
    pub template: String,
    /// Parent page ID; zero for top-level pages
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub menu_order: i64,
    #[serde(default)]
    pub meta: Value,
    #[serde(rename = "_links", default)]
    pub links: Value,
}

/// A media library attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: u64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub slug: String,
    /// Resource type discriminator (`attachment`)
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub author: u64,
    #[serde(default)]
    pub comment_status: String,
    #[serde(default)]
    pub ping_status: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub meta: Value,
    #[serde(default)]
    pub description: Rendered,
    #[serde(default)]
    pub caption: Rendered,
    #[serde(default)]
    pub alt_text: String,
    /// `image` or `file`
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub media_details: MediaDetails,
    /// URL of the original upload
    #[serde(default)]
    pub source_url: String,
    #[serde(rename = "_links", default)]
    pub links: Value,
}

/// Dimensions and derived sizes of a media attachment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaDetails {
    #[serde(default)]
    pub width: u64,
    #[serde(default)]
    pub height: u64,
    /// Path of the original file relative to the uploads directory
    #[serde(default)]
    pub file: String,
    /// Generated sizes keyed by name (`thumbnail`, `medium`, ...)
    #[serde(default)]
    pub sizes: HashMap<String, MediaSize>,
    #[serde(default)]
    pub image_meta: Value,
}

/// One generated size of a media attachment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaSize {
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub width: u64,
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub source_url: String,
}

/// A post category term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    /// Number of published posts in the category
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub taxonomy: String,
    /// Parent category ID; zero for top-level categories
    #[serde(default)]
    pub parent: u64,
    #[serde(default)]
    pub meta: Value,
    #[serde(rename = "_links", default)]
    pub links: Value,
}

/// A site user (public profile fields only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub slug: String,
    /// Avatar URLs keyed by pixel size (`24`, `48`, `96`)
    #[serde(default)]
    pub avatar_urls: HashMap<String, String>,
    #[serde(default)]
    pub meta: Value,
    #[serde(rename = "_links", default)]
    pub links: Value,
}

/// Structured SEO head data emitted by the Yoast plugin
///
/// Passed through untouched for downstream renderers; every field is
/// optional because Yoast omits whatever is not configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YoastSeo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub robots: Option<YoastRobots>,
    pub canonical: Option<String>,
    pub og_locale: Option<String>,
    pub og_type: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_url: Option<String>,
    pub og_site_name: Option<String>,
    pub article_published_time: Option<String>,
    pub article_modified_time: Option<String>,
    #[serde(default)]
    pub og_image: Vec<YoastImage>,
    pub author: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_creator: Option<String>,
    pub twitter_site: Option<String>,
    pub twitter_label1: Option<String>,
    pub twitter_data1: Option<String>,
    pub twitter_label2: Option<String>,
    pub twitter_data2: Option<String>,
    pub schema: Option<Value>,
}

/// Robots directives from the Yoast head
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YoastRobots {
    pub index: Option<String>,
    pub follow: Option<String>,
    #[serde(rename = "max-snippet")]
    pub max_snippet: Option<String>,
    #[serde(rename = "max-image-preview")]
    pub max_image_preview: Option<String>,
    #[serde(rename = "max-video-preview")]
    pub max_video_preview: Option<String>,
}

/// An Open Graph image from the Yoast head
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YoastImage {
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Joins list-valued query parameters the way the API expects (`1,2,3`)
pub(crate) fn join_values<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
