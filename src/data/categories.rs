//! Categories resource accessors

use std::time::Duration;

use super::{join_values, Category};
use crate::client::{WpClient, WpError};

/// Time-to-live for cached category responses
const CATEGORIES_TTL: Duration = Duration::from_secs(1800);

/// Filters for listing categories
#[derive(Debug, Clone, Default)]
pub struct CategoryQuery {
    /// Page of results to fetch (1-based)
    pub page: Option<u32>,
    /// Number of results per page
    pub per_page: Option<u32>,
    /// Full-text search term
    pub search: Option<String>,
    /// Restrict to children of this category ID
    pub parent: Option<u64>,
}

impl CategoryQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(parent) = self.parent {
            params.push(("parent", parent.to_string()));
        }
        params
    }
}

impl WpClient {
    /// Fetches a single category by ID
    pub async fn get_category(&self, id: u64) -> Result<Category, WpError> {
        self.fetch_cached(&format!("categories/{}", id), &[], CATEGORIES_TTL)
            .await
    }

    /// Fetches the categories with the given IDs
    ///
    /// An empty `ids` slice short-circuits to an empty list without
    /// touching the network.
    pub async fn get_categories_by_ids(&self, ids: &[u64]) -> Result<Vec<Category>, WpError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let params = vec![("include", join_values(ids))];
        self.fetch_cached("categories", &params, CATEGORIES_TTL)
            .await
    }

    /// Fetches categories matching `query`
    pub async fn list_categories(&self, query: &CategoryQuery) -> Result<Vec<Category>, WpError> {
        self.fetch_cached("categories", &query.params(), CATEGORIES_TTL)
            .await
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
    async fn test_get_categories_by_ids_joins_include_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .and(query_param("include", "4,9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 4, "name": "Insights", "slug": "insights"},
                {"id": 9, "name": "News", "slug": "news"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let categories = client_for(&server)
            .get_categories_by_ids(&[4, 9])
            .await
            .expect("Request should succeed");
        assert_eq!(categories.len(), 2);
    }

    #[tokio::test]
    async fn test_get_categories_by_ids_empty_input_skips_request() {
        // No mock mounted: any request would fail the test through a
        // connection to a path with no matching responder
        let server = MockServer::start().await;

        let categories = client_for(&server)
            .get_categories_by_ids(&[])
            .await
            .expect("Empty input should short-circuit");
        assert!(categories.is_empty());
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_list_categories_passes_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .and(query_param("search", "insight"))
            .and(query_param("parent", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let query = CategoryQuery {
            search: Some("insight".to_string()),
            parent: Some(0),
            ..Default::default()
        };
        let categories = client_for(&server)
            .list_categories(&query)
            .await
            .expect("Request should succeed");
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_get_category_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"id": 4, "name": "Insights", "slug": "insights", "count": 12}
            )))
            .mount(&server)
            .await;

        let category = client_for(&server)
            .get_category(4)
            .await
            .expect("Request should succeed");
        assert_eq!(category.name, "Insights");
    }
}
