//! WCS probe CLI: resolve stored service metadata and preview GetCoverage URLs.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use wcs_common::Sector;
use wcs_probe::{load_catalog, plan_tile_urls, ResolutionReport};
use wcs_protocol::{CoverageResolver, RequestConfig};

#[derive(Parser)]
#[command(name = "wcs-probe")]
#[command(about = "Resolve WCS coverages from stored metadata and preview GetCoverage URLs", long_about = None)]
struct Cli {
    /// Log level
    #[arg(long, global = true, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Request configuration YAML (tile size, preferred formats)
    #[arg(short, long, global = true, env = "WCS_PROBE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve coverages and report which ones are usable
    Resolve {
        /// Metadata bundle (JSON or YAML) with capabilities and describeCoverage
        #[arg(short, long)]
        metadata: PathBuf,

        /// Coverage ids to resolve (default: every advertised coverage)
        #[arg(short = 'i', long = "coverage")]
        coverages: Vec<String>,

        /// Output format: table (default), json
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Print GetCoverage URLs for a grid of tiles over a sector
    Urls {
        /// Metadata bundle (JSON or YAML) with capabilities and describeCoverage
        #[arg(short, long)]
        metadata: PathBuf,

        /// Coverage id
        #[arg(short = 'i', long)]
        coverage: String,

        /// Sector as minLat,maxLat,minLon,maxLon (default: the coverage extent)
        #[arg(short, long, allow_hyphen_values = true)]
        sector: Option<Sector>,

        /// Tile rows
        #[arg(long, default_value = "1")]
        rows: u32,

        /// Tile columns
        #[arg(long, default_value = "1")]
        cols: u32,

        /// Output format: text (default), json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = match &cli.config {
        Some(path) => RequestConfig::from_file(path)
            .with_context(|| format!("Failed to load request config {}", path.display()))?,
        None => RequestConfig::default(),
    };

    match cli.command {
        Commands::Resolve {
            metadata,
            coverages,
            output,
        } => {
            let catalog = load_catalog(&metadata)?;
            info!(
                version = %catalog.version(),
                coverages = catalog.coverage_ids().count(),
                "Loaded metadata bundle"
            );

            let resolver = CoverageResolver::with_config(&catalog, config);
            let report = if coverages.is_empty() {
                ResolutionReport::for_all(&resolver)
            } else {
                ResolutionReport::build(&resolver, coverages.iter().map(String::as_str))
            };

            match output.as_str() {
                "json" => println!("{}", report.format_json()?),
                _ => println!("{}", report.format_table()),
            }

            Ok(())
        }
        Commands::Urls {
            metadata,
            coverage,
            sector,
            rows,
            cols,
            output,
        } => {
            let catalog = load_catalog(&metadata)?;
            let resolver = CoverageResolver::with_config(&catalog, config);
            let elevation = resolver
                .build_elevation_config(&coverage)
                .with_context(|| format!("Coverage '{}' is not usable", coverage))?;

            let sector = sector.unwrap_or(*elevation.sector());
            let tiles = plan_tile_urls(&elevation, &sector, rows, cols)?;

            match output.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&tiles)?),
                _ => {
                    for tile in &tiles {
                        println!("{}", tile.url);
                    }
                }
            }

            Ok(())
        }
    }
}
