//! Newsletter subscription accessors
//!
//! The newsletter endpoints live in a plugin REST namespace on the wp-json
//! root, not under the core `wp/v2` prefix. Subscribe and unsubscribe
//! mutate remote state and therefore invalidate any cached newsletter
//! reads; there is no retry or compensating action on failure.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::client::{WpClient, WpError};

/// Time-to-live for cached subscription checks; short because the answer
/// changes with every subscribe/unsubscribe
const CHECK_TTL: Duration = Duration::from_secs(300);

/// Key fragment shared by every cached newsletter read
const CACHE_FRAGMENT: &str = "newsletter";

/// Attribution recorded with a subscription when none is given
const DEFAULT_SOURCE: &str = "website";

#[derive(Debug, Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
    source: &'a str,
}

#[derive(Debug, Serialize)]
struct UnsubscribeRequest<'a> {
    email: &'a str,
}

/// Answer of the subscription check endpoint
#[derive(Debug, Serialize, Deserialize)]
struct SubscriptionCheck {
    #[serde(default)]
    subscribed: bool,
}

impl WpClient {
    /// Subscribes an email address to the newsletter
    ///
    /// Issues a single POST with `{email, source}`; `source` defaults to
    /// `"website"`. The ack payload is plugin-defined and passed through
    /// as-is. Cached newsletter reads are invalidated on success.
    pub async fn subscribe(&self, email: &str, source: Option<&str>) -> Result<Value, WpError> {
        let url = self.config().newsletter_url("subscribe");
        let body = SubscribeRequest {
            email,
            source: source.unwrap_or(DEFAULT_SOURCE),
        };

        let ack: Value = self.post_json(&url, &body).await?;
        let invalidated = self.cache().remove_matching(CACHE_FRAGMENT);
        debug!(email, invalidated, "newsletter subscription recorded");
        Ok(ack)
    }

    /// Checks whether an email address is currently subscribed
    pub async fn is_subscribed(&self, email: &str) -> Result<bool, WpError> {
        let url = self.config().newsletter_url("check");
        let params = vec![("email", email.to_string())];
        let check: SubscriptionCheck = self
            .fetch_cached_url("newsletter/check", &url, &params, CHECK_TTL)
            .await?;
        Ok(check.subscribed)
    }

    /// Unsubscribes an email address from the newsletter
    ///
    /// The ack payload is plugin-defined and passed through as-is. Cached
    /// newsletter reads are invalidated on success.
    pub async fn unsubscribe(&self, email: &str) -> Result<Value, WpError> {
        let url = self.config().newsletter_url("unsubscribe");
        let body = UnsubscribeRequest { email };

        let ack: Value = self.post_json(&url, &body).await?;
        let invalidated = self.cache().remove_matching(CACHE_FRAGMENT);
        debug!(email, invalidated, "newsletter unsubscription recorded");
        Ok(ack)
    }
}
