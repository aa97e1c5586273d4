//! Command implementations for the quake CLI.
//!
//! Every command fetches the feed once; a fetch failure aborts before
//! anything is written to stdout.

use clap::Subcommand;
use quake_feed::client::FeedClient;
use quake_feed::feed::{FeedDocument, FEED_URL};

pub mod page;
pub mod records;

#[derive(Subcommand)]
pub enum Command {
    /// Print one CSV row per earthquake
    Records {
        /// GeoJSON feed to read
        #[arg(short = 'u', long, default_value = FEED_URL)]
        url: String,
    },

    /// Print a standalone HTML page with the earthquake map
    Page {
        /// GeoJSON feed to read
        #[arg(short = 'u', long, default_value = FEED_URL)]
        url: String,

        /// Page title
        #[arg(short = 't', long, default_value = "USGS All Earthquakes, Past Seven Days")]
        title: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Records { url } => {
            let document = fetch(&url).await?;
            records::run_records(&document)
        }
        Command::Page { url, title } => {
            let document = fetch(&url).await?;
            page::run_page(&document, &title)
        }
    }
}

async fn fetch(url: &str) -> anyhow::Result<FeedDocument> {
    FeedClient::new()
        .fetch(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch {}: {}", url, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_failure_aborts_command() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = run(Command::Records {
            url: format!("http://{}/all_week.geojson", addr),
        })
        .await;
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Failed to fetch"));
    }
}
