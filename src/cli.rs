//! Command-line interface parsing for the WordPress content client
//!
//! This module defines the clap command tree: one subcommand per content
//! resource plus the newsletter actions. Connection flags fall back to the
//! same environment variables the library reads.

use clap::{Parser, Subcommand};

use crate::config::WpConfig;

/// Fetch content from a headless WordPress CMS
#[derive(Parser, Debug)]
#[command(name = "wpcms")]
#[command(about = "Fetch posts, pages, media and more from a WordPress REST backend")]
#[command(version)]
pub struct Cli {
    /// Base URL of the content API, e.g. https://example.com/wp-json/wp/v2
    #[arg(long, env = "WORDPRESS_API_URL")]
    pub base_url: Option<String>,

    /// Application Password credential in user:password form
    #[arg(long, env = "WORDPRESS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Print raw JSON instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Content resources exposed by the backend
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List posts, or look one up by slug
    Posts {
        /// Page of results to fetch
        #[arg(long)]
        page: Option<u32>,

        /// Number of results per page
        #[arg(long)]
        per_page: Option<u32>,

        /// Restrict to a category ID (repeatable)
        #[arg(long = "category")]
        categories: Vec<u64>,

        /// Restrict to a tag ID (repeatable)
        #[arg(long = "tag")]
        tags: Vec<u64>,

        /// Full-text search term
        #[arg(long)]
        search: Option<String>,

        /// Look up a single post by slug instead of listing
        #[arg(long)]
        slug: Option<String>,

        /// Only sticky posts
        #[arg(long)]
        featured: bool,

        /// Resolve featured media alongside each post
        #[arg(long)]
        with_media: bool,
    },

    /// List pages, or look one up by slug
    Pages {
        /// Page of results to fetch
        #[arg(long)]
        page: Option<u32>,

        /// Number of results per page
        #[arg(long)]
        per_page: Option<u32>,

        /// Restrict to children of this page ID
        #[arg(long)]
        parent: Option<u64>,

        /// Full-text search term
        #[arg(long)]
        search: Option<String>,

        /// Look up a single page by slug instead of listing
        #[arg(long)]
        slug: Option<String>,
    },

    /// Show a media attachment by ID, or list attachments
    Media {
        /// Attachment ID to show
        id: Option<u64>,

        /// Page of results to fetch
        #[arg(long)]
        page: Option<u32>,

        /// Number of results per page
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// List categories, or look up specific IDs
    Categories {
        /// Category IDs to look up; lists all when empty
        ids: Vec<u64>,

        /// Full-text search term
        #[arg(long)]
        search: Option<String>,
    },

    /// List users, or look up specific IDs
    Users {
        /// User IDs to look up; lists all when empty
        ids: Vec<u64>,
    },

    /// Manage newsletter subscriptions
    Newsletter {
        #[command(subcommand)]
        action: NewsletterAction,
    },
}

/// Newsletter subscription actions
#[derive(Subcommand, Debug)]
pub enum NewsletterAction {
    /// Subscribe an email address
    Subscribe {
        email: String,

        /// Attribution recorded with the subscription
        #[arg(long, default_value = "website")]
        source: String,
    },

    /// Check whether an email address is subscribed
    Check { email: String },

    /// Unsubscribe an email address
    Unsubscribe { email: String },
}

impl Cli {
    /// Builds the backend configuration from flags and their env fallbacks
    pub fn client_config(&self) -> WpConfig {
        let mut config = match &self.base_url {
            Some(base_url) => WpConfig::new(base_url),
            None => WpConfig::default(),
        };
        if let Some(api_key) = &self.api_key {
            config = config.with_credential(api_key);
        }
        config
    }
}
