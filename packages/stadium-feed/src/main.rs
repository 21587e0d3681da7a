//! Fetches the events page, builds the feed, and publishes it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stadium_feed::{build_feed, FeedConfig, PageFetcher};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stadium-feed")]
#[command(about = "Build an iCalendar feed from a stadium's events page")]
struct Cli {
    /// Events listing page to scrape
    #[arg(long)]
    url: Option<String>,

    /// Calendar display name
    #[arg(long)]
    calendar_name: Option<String>,

    /// Timezone identifier for timed entries
    #[arg(long)]
    timezone: Option<String>,

    /// Where to write the feed
    #[arg(long, default_value = "docs/wembley.ics")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = FeedConfig::default();
    if let Some(url) = cli.url {
        config = config.with_events_url(url);
    }
    if let Some(name) = cli.calendar_name {
        config = config.with_calendar_name(name);
    }
    if let Some(tz) = cli.timezone {
        config = config.with_timezone(tz);
    }

    let fetcher = PageFetcher::new().context("failed to build HTTP client")?;
    let html = fetcher
        .fetch(&config.events_url)
        .await
        .with_context(|| format!("failed to fetch {}", config.events_url))?;

    let feed = build_feed(&html, &config);

    stadium_feed::publish_feed(&cli.out, &feed.document)
        .with_context(|| format!("failed to publish {}", cli.out.display()))?;

    tracing::info!(
        events = feed.event_count,
        path = %cli.out.display(),
        "feed written"
    );
    Ok(())
}
