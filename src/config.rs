//! WordPress backend configuration
//!
//! Holds the base URL of the core content API, the optional Application
//! Password credential used for Basic authentication, and the REST namespace
//! of the newsletter plugin. Configuration is read from the environment by
//! default but can be built explicitly for tests.

use std::env;

/// Fallback base URL when `WORDPRESS_API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://your-wordpress-site.com/wp-json/wp/v2";

/// REST namespace of the newsletter plugin, relative to the wp-json root
const DEFAULT_NEWSLETTER_NAMESPACE: &str = "newsletter/v1";

/// Environment variable carrying the content API base URL
pub const API_URL_VAR: &str = "WORDPRESS_API_URL";

/// Environment variable carrying the Application Password credential
pub const API_KEY_VAR: &str = "WORDPRESS_API_KEY";

/// Connection settings for a WordPress backend
#[derive(Debug, Clone)]
pub struct WpConfig {
    /// Base URL of the core content API, e.g. `https://example.com/wp-json/wp/v2`
    pub base_url: String,
    /// WordPress Application Password in `user:password` form, if any
    pub credential: Option<String>,
    /// REST namespace of the newsletter endpoints, relative to the wp-json root
    pub newsletter_namespace: String,
}

impl WpConfig {
    /// Creates a configuration for the given base URL
    ///
    /// A trailing slash on the URL is dropped so endpoint paths can be
    /// appended uniformly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credential: None,
            newsletter_namespace: DEFAULT_NEWSLETTER_NAMESPACE.to_string(),
        }
    }

    /// Builds a configuration from `WORDPRESS_API_URL` / `WORDPRESS_API_KEY`
    ///
    /// Unset or empty variables fall back to the default base URL and no
    /// credential respectively.
    pub fn from_env() -> Self {
        let base_url = env::var(API_URL_VAR)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let credential = env::var(API_KEY_VAR).ok().filter(|value| !value.is_empty());

        let mut config = Self::new(base_url);
        config.credential = credential;
        config
    }

    /// Sets the Application Password credential
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Sets the newsletter REST namespace (e.g. `acme-newsletter/v1`)
    pub fn with_newsletter_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.newsletter_namespace = namespace.into();
        self
    }

    /// Returns the wp-json root the custom REST namespaces hang off
    ///
    /// The core API lives under `{root}/wp/v2`; plugin namespaces are
    /// siblings of `wp/v2`, so the suffix is stripped when present.
    pub fn api_root(&self) -> &str {
        self.base_url
            .strip_suffix("/wp/v2")
            .unwrap_or(&self.base_url)
    }

    /// Builds the full URL for a core endpoint such as `posts/17`
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Builds the full URL for a newsletter action such as `subscribe`
    pub fn newsletter_url(&self, action: &str) -> String {
        format!("{}/{}/{}", self.api_root(), self.newsletter_namespace, action)
    }
}

impl Default for WpConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = WpConfig::new("https://example.com/wp-json/wp/v2/");
        assert_eq!(config.base_url, "https://example.com/wp-json/wp/v2");
    }

    #[test]
    fn test_api_root_strips_core_suffix() {
        let config = WpConfig::new("https://example.com/wp-json/wp/v2");
        assert_eq!(config.api_root(), "https://example.com/wp-json");
    }

    #[test]
    fn test_api_root_without_core_suffix_is_base_url() {
        let config = WpConfig::new("http://localhost:8080");
        assert_eq!(config.api_root(), "http://localhost:8080");
    }

    #[test]
    fn test_endpoint_url_joins_base_and_path() {
        let config = WpConfig::new("https://example.com/wp-json/wp/v2");
        assert_eq!(
            config.endpoint_url("posts/17"),
            "https://example.com/wp-json/wp/v2/posts/17"
        );
    }

    #[test]
    fn test_newsletter_url_uses_api_root_and_namespace() {
        let config = WpConfig::new("https://example.com/wp-json/wp/v2")
            .with_newsletter_namespace("acme-newsletter/v1");
        assert_eq!(
            config.newsletter_url("subscribe"),
            "https://example.com/wp-json/acme-newsletter/v1/subscribe"
        );
    }

    #[test]
    fn test_default_has_no_credential() {
        let config = WpConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.credential.is_none());
    }

    #[test]
    fn test_with_credential() {
        let config = WpConfig::new("https://example.com/wp-json/wp/v2")
            .with_credential("editor:abcd efgh ijkl");
        assert_eq!(config.credential.as_deref(), Some("editor:abcd efgh ijkl"));
    }
}
