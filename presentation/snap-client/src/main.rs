//! Recipe Snap command-line client.
//!
//! Reads a photo from disk and asks a running Recipe Snap API to identify
//! the dish, generate a recipe, or both.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use business::application::client::session::SnapClient;
use business::domain::photo::model::MediaType;
use logger::TracingLogger;
use snap_client::HttpGateway;
use snap_client::gateway::DEFAULT_API_URL;
use snap_client::render::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Operation {
    /// Identify the dish in the photo
    Dish,
    /// Generate a recipe from the ingredients in the photo
    Recipe,
    /// Run both operations
    All,
}

/// Identify dishes and generate recipes from food photos
#[derive(Parser)]
#[command(name = "snap")]
#[command(version)]
struct Cli {
    /// Path to the photo
    image: PathBuf,

    /// Which operation to run
    #[arg(value_enum, default_value = "all")]
    operation: Operation,

    /// Base URL of the Recipe Snap API
    #[arg(long, env = "SNAP_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let media_type = cli
        .image
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(MediaType::from_extension)
        .with_context(|| format!("Cannot tell image type of {}", cli.image.display()))?;
    let bytes = tokio::fs::read(&cli.image)
        .await
        .with_context(|| format!("Failed to read {}", cli.image.display()))?;

    let gateway = Arc::new(HttpGateway::new(cli.api_url));
    let mut client = SnapClient::new(
        gateway.clone(),
        gateway,
        Arc::new(TracingLogger::new("snap")),
    );
    client
        .select_photo_bytes(media_type.as_str(), bytes)
        .map_err(|e| anyhow::anyhow!("Invalid photo: {}", e))?;

    if matches!(cli.operation, Operation::Dish | Operation::All) {
        client.identify_dish().await?;
    }
    if matches!(cli.operation, Operation::Recipe | Operation::All) {
        client.generate_recipe().await?;
    }

    let report = Report::new(client.dish(), client.recipe());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    if report.has_failures() {
        bail!("One or more operations failed");
    }
    Ok(())
}
