// ==============================================================================
// main.rs - Beeline Converter Entry Point
// ==============================================================================
// Description: Main entry point for Beeline GRN dataset conversion
// Author: Matt Barham
// Created: 2026-08-12
// Modified: 2026-08-29
// Version: 1.0.0
// ==============================================================================

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod codegen;
mod converter;
mod generator;
mod metadata;
mod models;
mod parsers;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing Beeline CSV files
    #[arg(short, long, default_value = "csv")]
    input_dir: std::path::PathBuf,

    /// Directory for converted JSON files
    #[arg(short, long, default_value = "json")]
    output_dir: std::path::PathBuf,

    /// Path for the generated datasets module
    #[arg(short, long, default_value = "datasets.ts")]
    datasets_path: std::path::PathBuf,

    /// Convert CSVs only, without generating the datasets module
    #[arg(long)]
    skip_registry: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beeline_converter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Beeline Converter starting...");

    let args = Args::parse();

    let generator = generator::DatasetGenerator::new(
        args.input_dir,
        args.output_dir,
        args.datasets_path,
        metadata::MetadataTable::builtin(),
    );

    if args.skip_registry {
        let converted = generator.convert_all().await?;
        info!("Conversion completed: {} file(s)", converted);
    } else {
        let entries = generator.generate().await?;
        info!("Registry generation completed: {} dataset(s)", entries.len());
    }

    Ok(())
}
