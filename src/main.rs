use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use rss_reader::config::Config;
use rss_reader::feed::build_client;
use rss_reader::reader::{read_feed, ReadOptions};
use rss_reader::render::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "rss_reader", about = "Command-line RSS reader.", version)]
struct Args {
    /// RSS URL
    source: String,

    /// Print result as JSON in stdout
    #[arg(long)]
    json: bool,

    /// Limit news topics if this parameter provided
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Read defaults from this config file instead of ~/.config/rss_reader/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    /// Merges command-line flags over the loaded configuration.
    fn read_options(&self, config: &Config) -> ReadOptions {
        ReadOptions {
            source: self.source.clone(),
            limit: self.limit.or(config.limit),
            format: OutputFormat::from_json_flag(self.json || config.json),
            max_feed_size: config.max_feed_size_bytes,
            allow_private_hosts: config.allow_private_hosts,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries feed output only; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::resolve(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("Failed to load config file: {}", path.display()),
        None => "Failed to load config file".to_string(),
    })?;

    let options = args.read_options(&config);
    tracing::debug!(?options, "Starting feed read");

    let client = build_client(&config.user_agent).context("Failed to create HTTP client")?;
    let output = read_feed(&client, &options)
        .await
        .with_context(|| format!("Failed to read feed from {}", options.source))?;

    println!("{}", output);
    Ok(())
}
