//! Spotlight-Harvest main entry point
//!
//! This is the command-line interface for the wallpaper metadata harvester.

use clap::{Parser, Subcommand};
use serde::Serialize;
use spotlight_harvest::config::{load_config, Config};
use spotlight_harvest::SpotlightClient;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Spotlight-Harvest: wallpaper metadata extractor
///
/// Reads the gallery's listing and detail pages and prints what it finds as
/// JSON on stdout. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "spotlight-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Extracts wallpaper metadata from windows10spotlight.com", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the number of listing pages
    Pages,

    /// Print the image summaries on a listing page
    Page {
        /// Page number, starting at 1
        #[arg(value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },

    /// Print the full metadata of one image
    Image {
        /// Image id, as found in listing entries
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Print the metadata of every image on a range of pages, one JSON object per line
    Harvest {
        /// First page to list
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        from: u64,

        /// Last page to list (defaults to the last page on the site)
        #[arg(long)]
        to: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).map_err(|e| {
                tracing::error!("Failed to load configuration: {}", e);
                e
            })?
        }
        None => Config::default(),
    };

    let client = SpotlightClient::new(config)?;

    match cli.command {
        Command::Pages => println!("{}", client.total_pages().await?),
        Command::Page { number } => print_json(&client.page(number).await?, cli.pretty)?,
        Command::Image { id } => print_json(&client.image_info(id).await?, cli.pretty)?,
        Command::Harvest { from, to } => handle_harvest(&client, from, to).await?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("spotlight_harvest=info,warn"),
            1 => EnvFilter::new("spotlight_harvest=debug,info"),
            2 => EnvFilter::new("spotlight_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), serde_json::Error> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

/// Handles the harvest subcommand
async fn handle_harvest(
    client: &SpotlightClient,
    from: u64,
    to: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let to = match to {
        Some(to) => to,
        None => client.total_pages().await?,
    };

    if to < from {
        tracing::warn!("Empty page range {}..={}", from, to);
        return Ok(());
    }

    tracing::info!("Harvesting pages {} to {}", from, to);

    client
        .harvest_each(from..=to, |detail| {
            println!("{}", serde_json::to_string(&detail)?);
            Ok(())
        })
        .await
        .map_err(|e| {
            tracing::error!("Harvest failed: {}", e);
            e
        })?;

    Ok(())
}
