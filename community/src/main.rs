//! Enawga feed
//!
//! Prints the community feed, a post thread, the group directory or search
//! results from the in-memory store.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enawga_community::config::{Config, OutputFormat};
use enawga_community::domain::entities::{MemberId, PostId};
use enawga_community::domain::ports::{FeedStore, GroupDirectory};
use enawga_community::feed;
use enawga_community::{AppError, FeedService, InMemoryFeedStore, InMemoryGroupDirectory};

#[derive(Parser, Debug)]
#[command(name = "enawga-feed")]
#[command(about = "Print the Enawga community feed", long_about = None)]
struct Cli {
    /// View to print, defaults to the feed
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// All posts, newest first
    Feed,
    /// A single post with its comments
    Thread {
        /// Post id
        id: String,
    },
    /// The group directory
    Groups,
    /// Posts and groups matching a query
    Search {
        /// Words to search for
        query: Vec<String>,
    },
}

fn json<T: Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

async fn run<FS, GD>(
    service: &FeedService<FS, GD>,
    command: Command,
    viewer: &MemberId,
    format: OutputFormat,
) -> Result<String, AppError>
where
    FS: FeedStore,
    GD: GroupDirectory,
{
    match command {
        Command::Feed => {
            let posts = service.list_posts(viewer).await?;
            match format {
                OutputFormat::Markdown => Ok(feed::render_feed(&posts)),
                OutputFormat::Json => json(&posts),
            }
        }
        Command::Thread { id } => {
            let id = PostId::new(id);
            let post = service
                .get_post(&id, viewer)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("post {}", id)))?;
            let comments = service.get_comments(&id).await?;
            match format {
                OutputFormat::Markdown => Ok(feed::render_thread(&post, &comments)),
                OutputFormat::Json => json(&serde_json::json!({
                    "post": post,
                    "comments": comments,
                })),
            }
        }
        Command::Groups => {
            let groups = service.list_groups(viewer).await?;
            match format {
                OutputFormat::Markdown => Ok(feed::render_groups(&groups)),
                OutputFormat::Json => json(&groups),
            }
        }
        Command::Search { query } => {
            let results = service.search(&query.join(" "), viewer).await?;
            match format {
                OutputFormat::Markdown => Ok(feed::render_search(&results)),
                OutputFormat::Json => json(&results),
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,enawga_community=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let (store, groups) = if config.seed {
        tracing::info!("Seeding feed with starter content");
        (InMemoryFeedStore::seeded(), InMemoryGroupDirectory::seeded())
    } else {
        (InMemoryFeedStore::new(), InMemoryGroupDirectory::new())
    };
    let service = FeedService::new(Arc::new(store), Arc::new(groups));

    let member = config.member();
    tracing::debug!(member = %member.id, "Reading feed");

    let command = cli.command.unwrap_or(Command::Feed);
    let output = run(&service, command, &member.id, config.output).await?;
    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_feed() {
        let cli = Cli::try_parse_from(["enawga-feed"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["enawga-feed", "feed"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Feed)));
    }

    #[test]
    fn thread_requires_an_id() {
        let cli = Cli::try_parse_from(["enawga-feed", "thread", "2"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Thread { id }) if id == "2"));

        assert!(Cli::try_parse_from(["enawga-feed", "thread"]).is_err());
    }

    #[test]
    fn search_collects_all_words() {
        let cli = Cli::try_parse_from(["enawga-feed", "search", "bus", "route"]).unwrap();
        match cli.command {
            Some(Command::Search { query }) => assert_eq!(query, ["bus", "route"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["enawga-feed", "delete"]).is_err());
    }
}
