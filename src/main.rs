//! Command-line entry point for retail-feed.

use clap::Parser;
use retail_feed::{run_feed, shutdown_on_signal, FeedArgs};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Help and usage errors exit here, before any broker connection
    let args = FeedArgs::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = args.resolve();
    tracing::info!(
        "Publishing to topic '{}' on {}",
        config.topic_name,
        config.broker_address
    );

    run_feed(config, shutdown_on_signal()).await?;
    Ok(())
}
