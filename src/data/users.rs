//! Users resource accessors
//!
//! Read operations for author profiles. Only the public profile fields are
//! exposed by the API without elevated credentials.

use std::time::Duration;

use super::{join_values, User};
use crate::client::{WpClient, WpError};

/// Time-to-live for cached user responses
const USERS_TTL: Duration = Duration::from_secs(1800);

/// Filters for listing users
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Page of results to fetch (1-based)
    pub page: Option<u32>,
    /// Number of results per page
    pub per_page: Option<u32>,
    /// Full-text search term
    pub search: Option<String>,
    /// Restrict to users with any of these roles
    pub roles: Vec<String>,
}

impl UserQuery {
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
        if !self.roles.is_empty() {
            params.push(("roles", join_values(&self.roles)));
        }
        params
    }
}

impl WpClient {
    /// Fetches a single user by ID
    pub async fn get_user(&self, id: u64) -> Result<User, WpError> {
        self.fetch_cached(&format!("users/{}", id), &[], USERS_TTL)
            .await
    }

    /// Fetches the users with the given IDs
    ///
    /// An empty `ids` slice short-circuits to an empty list without
    /// touching the network.
    pub async fn get_users_by_ids(&self, ids: &[u64]) -> Result<Vec<User>, WpError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let params = vec![("include", join_values(ids))];
        self.fetch_cached("users", &params, USERS_TTL).await
    }

    /// Fetches users matching `query`
    pub async fn list_users(&self, query: &UserQuery) -> Result<Vec<User>, WpError> {
        self.fetch_cached("users", &query.params(), USERS_TTL).await
    }
}
