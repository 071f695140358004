use crate::adapters::inbound::{COUNTRY_COLUMN, GEO_REFERENCE_COLUMN, RIGHTS_COLUMN};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catalog-enrich",
    about = "Batch enrichment for catalog exports: geographic references, rights, per-country counts",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Country reference table (CSV) to use instead of the embedded copy
    #[arg(long, global = true, env = "CATALOG_ENRICH_DIRECTORY")]
    pub directory: Option<String>,

    /// Override rules (JSON) to use instead of the builtin set
    #[arg(long, global = true, env = "CATALOG_ENRICH_OVERRIDES")]
    pub overrides: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the geographic reference column into countries and regions
    Geo(GeoArgs),
    /// Classify the rights column into a cleaned status and permissions
    Rights(RightsArgs),
    /// Aggregate per-country counts from an enriched table
    Counts(CountsArgs),
}

#[derive(Args)]
pub struct GeoArgs {
    /// Input CSV file
    #[arg(long)]
    pub input: PathBuf,

    /// Output CSV file
    #[arg(long)]
    pub output: PathBuf,

    /// Column holding the raw geographic reference
    #[arg(long, default_value = GEO_REFERENCE_COLUMN)]
    pub column: String,
}

#[derive(Args)]
pub struct RightsArgs {
    /// Input CSV file
    #[arg(long)]
    pub input: PathBuf,

    /// Output CSV file
    #[arg(long)]
    pub output: PathBuf,

    /// Column holding the raw rights value
    #[arg(long, default_value = RIGHTS_COLUMN)]
    pub column: String,
}

#[derive(Args)]
pub struct CountsArgs {
    /// Enriched CSV file (must already carry the country column)
    #[arg(long)]
    pub input: PathBuf,

    /// Output CSV file for the counts
    #[arg(long)]
    pub output: PathBuf,

    /// Column holding the resolved country codes
    #[arg(long, default_value = COUNTRY_COLUMN)]
    pub column: String,
}
