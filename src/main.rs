use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use feedcards::{Config, DirectoryDisplay, FeedPipeline, RunOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "feedcards",
    about = "Fetches a Medium RSS feed and renders the newest posts as HTML cards"
)]
struct Args {
    /// Config file (TOML); built-in defaults apply when absent
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the surface include files
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Override the feed URL from the config
    #[arg(long, value_name = "URL")]
    feed_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => Config::default(),
    };
    if let Some(feed_url) = args.feed_url {
        config.feed_url = feed_url;
    }

    let display = DirectoryDisplay::new(&args.out_dir);
    let mut pipeline = FeedPipeline::new(config, display);

    match pipeline.run().await? {
        RunOutcome::Rendered(count) => println!("Rendered {count} article cards"),
        RunOutcome::NoArticles => println!("No articles found in feed, wrote placeholder"),
        RunOutcome::FetchFailed => println!("Feed fetch failed, wrote fallback card"),
        RunOutcome::MissingSurface => println!(
            "No surface file found in '{}', nothing rendered",
            args.out_dir.display()
        ),
    }

    Ok(())
}
