use anyhow::{Context, Result};
use catalog_service::models::catalog::BuildReport;
use catalog_service::utils::source::load_catalog;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod export;

use export::{write_catalog, OutputFormat};

/// Normalize a raw scraped books file into the catalog form served by
/// catalog-service.
#[derive(Parser, Debug)]
#[command(name = "catalog-loader", version)]
struct Args {
    /// Raw CSV file with title, category, price, rating and availability columns
    input: PathBuf,

    /// Where to write the normalized catalog (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_loader=info,catalog_service=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let report = run(&args)?;

    info!(
        "Done: {} books loaded, {} rows skipped",
        report.loaded, report.skipped
    );
    Ok(())
}

fn run(args: &Args) -> Result<BuildReport> {
    let (catalog, report) = load_catalog(&args.input)
        .with_context(|| format!("failed to build catalog from {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_catalog(&catalog, args.format, BufWriter::new(file))?;
            info!("Normalized catalog written to {}", path.display());
        }
        None => write_catalog(&catalog, args.format, io::stdout().lock())?,
    }

    Ok(report)
}
