//! catalog-enrich - Batch catalog enrichment with Hexagonal Architecture
//!
//! This is the composition root that wires together all the components.

mod adapters;
mod application;
mod config;
mod domain;

use crate::adapters::inbound::CsvPipeline;
use crate::adapters::outbound::EmbeddedCountryDirectory;
use crate::application::EnrichmentService;
use crate::config::{Cli, Commands};
use crate::domain::ports::CountryDirectory;
use crate::domain::services::OverrideTable;
use clap::Parser;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.debug || std::env::var("DEBUG").is_ok() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    // ===== COMPOSITION ROOT =====
    // Wire up all adapters and services

    // 1. Create outbound adapters

    // Country directory: must be fully loaded before any resolution starts
    let directory: Arc<dyn CountryDirectory> = match &cli.directory {
        Some(path) => {
            let directory = EmbeddedCountryDirectory::from_file(path)?;
            tracing::info!(
                "country directory loaded from {} ({} lookup keys)",
                path,
                directory.len()
            );
            Arc::new(directory)
        }
        None => {
            let directory = EmbeddedCountryDirectory::embedded()?;
            tracing::info!(
                "country directory loaded (embedded, {} lookup keys)",
                directory.len()
            );
            Arc::new(directory)
        }
    };

    // Override table: builtin curated rules unless a rule file is given
    let overrides = match &cli.overrides {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            let table = OverrideTable::from_json_reader(file)?;
            tracing::info!("override table loaded from {} ({} rules)", path, table.len());
            table
        }
        None => OverrideTable::builtin(),
    };

    // 2. Create application service
    let service = Arc::new(EnrichmentService::new(overrides, directory));

    // 3. Create inbound adapter and run
    let pipeline = CsvPipeline::new(service);

    match cli.command {
        Commands::Geo(args) => {
            pipeline.enrich_geo(&args.input, &args.output, &args.column)?;
        }
        Commands::Rights(args) => {
            pipeline.enrich_rights(&args.input, &args.output, &args.column)?;
        }
        Commands::Counts(args) => {
            pipeline.write_country_counts(&args.input, &args.output, &args.column)?;
        }
    }

    Ok(())
}
