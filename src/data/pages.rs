//! Pages resource accessors
//!
//! Read operations for static pages. Unlike posts, page responses are not
//! projected through a `_fields` whitelist.

use std::time::Duration;

use super::{Page, PostStatus};
use crate::client::{WpClient, WpError};

/// Time-to-live for cached page responses
const PAGES_TTL: Duration = Duration::from_secs(1800);

/// Filters for listing pages
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    /// Page of results to fetch (1-based)
    pub page: Option<u32>,
    /// Number of results per page
    pub per_page: Option<u32>,
    /// Restrict to children of this page ID
    pub parent: Option<u64>,
    /// Full-text search term
    pub search: Option<String>,
    /// Restrict to pages with this publication status
    pub status: Option<PostStatus>,
}

impl PageQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(parent) = self.parent {
            params.push(("parent", parent.to_string()));
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

impl WpClient {
    /// Fetches pages matching `query`
    pub async fn list_pages(&self, query: &PageQuery) -> Result<Vec<Page>, WpError> {
        self.fetch_cached("pages", &query.params(), PAGES_TTL).await
    }

    /// Fetches a single page by ID
    pub async fn get_page(&self, id: u64) -> Result<Page, WpError> {
        self.fetch_cached(&format!("pages/{}", id), &[], PAGES_TTL)
            .await
    }

    /// Fetches pages with the given slug (at most one element)
    pub async fn get_pages_by_slug(&self, slug: &str) -> Result<Vec<Page>, WpError> {
        let params = vec![("slug", slug.to_string())];
        self.fetch_cached("pages", &params, PAGES_TTL).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WpConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WpClient {
        WpClient::new(WpConfig::new(server.uri()))
    }

    #[tokio::test]
    async fn test_list_pages_passes_parent_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pages"))
            .and(query_param("parent", "2"))
            .and(query_param("per_page", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 8, "slug": "about", "parent": 2, "title": {"rendered": "About"}}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let query = PageQuery {
            per_page: Some(10),
            parent: Some(2),
            ..Default::default()
        };
        let pages = client_for(&server)
            .list_pages(&query)
            .await
            .expect("Request should succeed");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].parent, 2);
    }

    #[tokio::test]
    async fn test_get_page_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pages/8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"id": 8, "slug": "about", "title": {"rendered": "About"}}
            )))
            .mount(&server)
            .await;

        let page = client_for(&server)
            .get_page(8)
            .await
            .expect("Request should succeed");
        assert_eq!(page.slug, "about");
    }

    #[tokio::test]
    async fn test_get_pages_by_slug_sets_slug_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pages"))
            .and(query_param("slug", "services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 11, "slug": "services", "title": {"rendered": "Services"}}
            ])))
            .mount(&server)
            .await;

        let pages = client_for(&server)
            .get_pages_by_slug("services")
            .await
            .expect("Request should succeed");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].id, 11);
    }
}
