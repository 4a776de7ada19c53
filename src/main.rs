//! wpcms - fetch content from a headless WordPress CMS
//!
//! A command-line tool for inspecting what a WordPress REST backend serves:
//! posts, pages, media, categories, users, and newsletter subscription
//! state. Connection settings come from flags or the `WORDPRESS_API_URL` /
//! `WORDPRESS_API_KEY` environment variables.

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use wpcms::cli::{Cli, Command, NewsletterAction};
use wpcms::client::WpClient;
use wpcms::data::{
    Category, CategoryQuery, Media, MediaQuery, Page, PageQuery, Post, PostQuery, PostWithMedia,
    User, UserQuery,
};
use wpcms::text;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Routes log output to stderr so it never mixes with content on stdout
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> CliResult {
    init_tracing();

    let cli = Cli::parse();
    let client = WpClient::new(cli.client_config());
    run(&cli, &client).await
}

async fn run(cli: &Cli, client: &WpClient) -> CliResult {
    match &cli.command {
        Command::Posts {
            page,
            per_page,
            categories,
            tags,
            search,
            slug,
            featured,
            with_media,
        } => {
            if let Some(slug) = slug {
                let posts = client.get_posts_by_slug(slug).await?;
                return print_posts(&posts, cli.json);
            }
            if *featured {
                let posts = client.featured_posts(per_page.unwrap_or(5)).await?;
                return print_posts(&posts, cli.json);
            }

            let query = PostQuery {
                page: *page,
                per_page: *per_page,
                categories: categories.clone(),
                tags: tags.clone(),
                search: search.clone(),
                status: None,
            };
            if *with_media {
                let posts = client.posts_with_media(&query).await?;
                print_posts_with_media(&posts, cli.json)
            } else {
                let posts = client.list_posts(&query).await?;
                print_posts(&posts, cli.json)
            }
        }

        Command::Pages {
            page,
            per_page,
            parent,
            search,
            slug,
        } => {
            let pages = match slug {
                Some(slug) => client.get_pages_by_slug(slug).await?,
                None => {
                    let query = PageQuery {
                        page: *page,
                        per_page: *per_page,
                        parent: *parent,
                        search: search.clone(),
                        status: None,
                    };
                    client.list_pages(&query).await?
                }
            };
            print_pages(&pages, cli.json)
        }

        Command::Media { id, page, per_page } => match id {
            Some(id) => {
                let media = client.get_media(*id).await?;
                print_media(std::slice::from_ref(&media), cli.json)
            }
            None => {
                let query = MediaQuery {
                    page: *page,
                    per_page: *per_page,
                    ..Default::default()
                };
                let media = client.list_media(&query).await?;
                print_media(&media, cli.json)
            }
        },

        Command::Categories { ids, search } => {
            let categories = if ids.is_empty() {
                let query = CategoryQuery {
                    search: search.clone(),
                    ..Default::default()
                };
                client.list_categories(&query).await?
            } else {
                client.get_categories_by_ids(ids).await?
            };
            print_categories(&categories, cli.json)
        }

        Command::Users { ids } => {
            let users = if ids.is_empty() {
                client.list_users(&UserQuery::default()).await?
            } else {
                client.get_users_by_ids(ids).await?
            };
            print_users(&users, cli.json)
        }

        Command::Newsletter { action } => match action {
            NewsletterAction::Subscribe { email, source } => {
                let ack = client.subscribe(email, Some(source)).await?;
                if cli.json {
                    print_json(&ack)
                } else {
                    println!("Subscribed {}", email);
                    Ok(())
                }
            }
            NewsletterAction::Check { email } => {
                let subscribed = client.is_subscribed(email).await?;
                if cli.json {
                    print_json(&serde_json::json!({ "email": email, "subscribed": subscribed }))
                } else {
                    if subscribed {
                        println!("{} is subscribed", email);
                    } else {
                        println!("{} is not subscribed", email);
                    }
                    Ok(())
                }
            }
            NewsletterAction::Unsubscribe { email } => {
                let ack = client.unsubscribe(email).await?;
                if cli.json {
                    print_json(&ack)
                } else {
                    println!("Unsubscribed {}", email);
                    Ok(())
                }
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One line per post: ID, decoded title, and publication date
fn print_posts(posts: &[Post], json: bool) -> CliResult {
    if json {
        return print_json(&posts);
    }
    if posts.is_empty() {
        println!("No posts found.");
        return Ok(());
    }
    for post in posts {
        println!(
            "#{:<6} {}  ({})",
            post.id,
            clean(&post.title.rendered),
            text::format_date(&post.date)
        );
        let summary = text::excerpt(&post.excerpt.rendered, 150);
        if !summary.is_empty() {
            println!("        {}", text::decode_entities(&summary));
        }
    }
    Ok(())
}

fn print_posts_with_media(posts: &[PostWithMedia], json: bool) -> CliResult {
    if json {
        return print_json(&posts);
    }
    if posts.is_empty() {
        println!("No posts found.");
        return Ok(());
    }
    for entry in posts {
        println!(
            "#{:<6} {}  ({})",
            entry.post.id,
            clean(&entry.post.title.rendered),
            text::format_date(&entry.post.date)
        );
        match &entry.featured_media {
            Some(media) => println!("        media: {}", media.source_url),
            None => println!("        media: none"),
        }
    }
    Ok(())
}

fn print_pages(pages: &[Page], json: bool) -> CliResult {
    if json {
        return print_json(&pages);
    }
    if pages.is_empty() {
        println!("No pages found.");
        return Ok(());
    }
    for page in pages {
        println!("#{:<6} {}  /{}", page.id, clean(&page.title.rendered), page.slug);
    }
    Ok(())
}

fn print_media(media: &[Media], json: bool) -> CliResult {
    if json {
        return print_json(&media);
    }
    if media.is_empty() {
        println!("No media found.");
        return Ok(());
    }
    for item in media {
        println!(
            "#{:<6} {} ({}x{})  {}",
            item.id,
            item.mime_type,
            item.media_details.width,
            item.media_details.height,
            item.source_url
        );
    }
    Ok(())
}

fn print_categories(categories: &[Category], json: bool) -> CliResult {
    if json {
        return print_json(&categories);
    }
    if categories.is_empty() {
        println!("No categories found.");
        return Ok(());
    }
    for category in categories {
        println!(
            "#{:<6} {} ({} posts)",
            category.id,
            text::decode_entities(&category.name),
            category.count
        );
    }
    Ok(())
}

fn print_users(users: &[User], json: bool) -> CliResult {
    if json {
        return print_json(&users);
    }
    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }
    for user in users {
        println!("#{:<6} {}  /{}", user.id, user.name, user.slug);
    }
    Ok(())
}

/// Rendered title fields arrive as entity-encoded HTML
fn clean(rendered: &str) -> String {
    text::decode_entities(&text::strip_html(rendered))
}
