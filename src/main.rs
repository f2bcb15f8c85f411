use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use newsdesk::app::{self, App, AppEvent};
use newsdesk::config::Config;
use newsdesk::pagination::Cursor;
use newsdesk::{feed, ui, view};

/// Get the config directory path (~/.config/newsdesk/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("newsdesk"))
}

#[derive(Parser, Debug)]
#[command(name = "newsdesk", about = "Terminal news page for software testing headlines")]
struct Args {
    /// Override the configured search query
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Fetch once, print the first page to stdout, and exit (no TUI)
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = get_config_dir()?.join("config.toml");
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(query) = args.query {
        config.query = query;
    }

    if args.once {
        return run_once(&config).await;
    }

    let mut app = App::new(config).context("Failed to create application")?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);
    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}

/// One render pass without the TUI: fetch, page, print.
async fn run_once(config: &Config) -> Result<()> {
    let client = app::build_client().context("Failed to build HTTP client")?;

    let entries = feed::fetch(
        &client,
        &config.endpoint,
        &config.query,
        config.request_timeout(),
    )
    .await
    .context("Failed to fetch news feed")?;

    if entries.is_empty() {
        println!("No news items found. Please try again later.");
        return Ok(());
    }

    let (cards, summary) = view::page(&entries, Cursor::new(config.page_size));
    for card in &cards {
        println!("{}", card.title);
        if let Some(date) = &card.date {
            println!("  {}", date);
        }
        if let Some(desc) = &card.description {
            println!("  {}", desc);
        }
        println!("  {}", card.link);
        println!();
    }
    println!("Showing {} of {} news items", summary.shown, summary.total);

    Ok(())
}
