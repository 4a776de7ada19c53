//! Media resource accessors

use std::time::Duration;

use super::Media;
use crate::client::{WpClient, WpError};

/// Time-to-live for cached media responses
const MEDIA_TTL: Duration = Duration::from_secs(1800);

/// Kind of media library attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    File,
}

impl MediaType {
    /// The value as it appears in the `media_type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::File => "file",
        }
    }
}

/// Filters for listing media attachments
#[derive(Debug, Clone, Default)]
pub struct MediaQuery {
    /// Page of results to fetch (1-based)
    pub page: Option<u32>,
    /// Number of results per page
    pub per_page: Option<u32>,
    /// Restrict to attachments of this kind
    pub media_type: Option<MediaType>,
    /// Restrict to attachments with this MIME type (e.g. `image/jpeg`)
    pub mime_type: Option<String>,
}

impl MediaQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(media_type) = self.media_type {
            params.push(("media_type", media_type.as_str().to_string()));
        }
        if let Some(mime_type) = &self.mime_type {
            params.push(("mime_type", mime_type.clone()));
        }
        params
    }
}

impl WpClient {
    /// Fetches a single media attachment by ID
    pub async fn get_media(&self, id: u64) -> Result<Media, WpError> {
        self.fetch_cached(&format!("media/{}", id), &[], MEDIA_TTL)
            .await
    }

    /// Fetches media attachments matching `query`
    pub async fn list_media(&self, query: &MediaQuery) -> Result<Vec<Media>, WpError> {
        self.fetch_cached("media", &query.params(), MEDIA_TTL).await
    }
}
