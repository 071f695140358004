//! CSV Pipeline
//!
//! Inbound adapter that drives the enrichment service over a tabular
//! dataset: one enrichment call per row, no shared mutable state between
//! rows, row order preserved in the output.

use crate::application::{EnrichmentService, EnrichmentStats};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Default input column holding the raw geographic reference.
pub const GEO_REFERENCE_COLUMN: &str = "Geo. Reference";
/// Default input column holding the raw rights value.
pub const RIGHTS_COLUMN: &str = "Rights";

/// Columns appended by the geo command.
pub const COUNTRY_COLUMN: &str = "Country";
pub const REGION_COLUMN: &str = "Region/City";

/// Columns appended by the rights command.
pub const RIGHTS_OUTPUT_COLUMNS: [&str; 6] = [
    "Cleaned Copyright Status",
    "Educational Use",
    "Marketing/Publicity Use",
    "Commercial Use",
    "Sublicensing Use",
    "Notes",
];

/// Separator used when writing a code/region sequence into one cell.
const CELL_SEPARATOR: &str = ", ";

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("input has no column named {0:?}")]
    MissingColumn(String),
}

/// Batch pipeline over CSV files.
pub struct CsvPipeline {
    service: Arc<EnrichmentService>,
}

impl CsvPipeline {
    pub fn new(service: Arc<EnrichmentService>) -> Self {
        Self { service }
    }

    /// Resolve the reference column of every row and write the input back
    /// out with `Country` and `Region/City` columns appended.
    ///
    /// Rows are resolved on a worker pool; each resolution depends only on
    /// its own cell and the read-only lookup tables, so order of execution
    /// is irrelevant and the collect restores row order.
    pub fn enrich_geo(
        &self,
        input: &Path,
        output: &Path,
        column: &str,
    ) -> Result<EnrichmentStats, PipelineError> {
        let (headers, records) = read_table(input)?;
        let column_index = find_column(&headers, column)?;

        let locations: Vec<_> = records
            .par_iter()
            .map(|record| self.service.resolve_geo_reference(cell(record, column_index)))
            .collect();

        let mut writer = csv::WriterBuilder::new().from_path(output)?;
        writer.write_record(&extend_headers(&headers, &[COUNTRY_COLUMN, REGION_COLUMN]))?;
        for (record, location) in records.iter().zip(&locations) {
            let mut row = record.clone();
            row.push_field(&location.countries.join(CELL_SEPARATOR));
            row.push_field(&location.regions.join(CELL_SEPARATOR));
            writer.write_record(&row)?;
        }
        writer.flush()?;

        let stats = EnrichmentStats {
            rows: records.len(),
            rows_without_country: locations.iter().filter(|l| l.has_no_country()).count(),
        };
        tracing::info!(
            "geo enrichment: {} rows, {} without a resolved country -> {}",
            stats.rows,
            stats.rows_without_country,
            output.display()
        );
        Ok(stats)
    }

    /// Classify the rights column of every row and write the input back out
    /// with the six rights columns appended.
    pub fn enrich_rights(
        &self,
        input: &Path,
        output: &Path,
        column: &str,
    ) -> Result<usize, PipelineError> {
        let (headers, records) = read_table(input)?;
        let column_index = find_column(&headers, column)?;

        let mut writer = csv::WriterBuilder::new().from_path(output)?;
        writer.write_record(&extend_headers(&headers, &RIGHTS_OUTPUT_COLUMNS))?;
        for record in &records {
            let summary = self.service.classify_rights(cell(record, column_index));
            let mut row = record.clone();
            row.push_field(summary.status.as_str());
            row.push_field(summary.educational_use.as_str());
            row.push_field(summary.marketing_use.as_str());
            row.push_field(summary.commercial_use.as_str());
            row.push_field(summary.sublicensing_use.as_str());
            row.push_field(&summary.notes);
            writer.write_record(&row)?;
        }
        writer.flush()?;

        tracing::info!(
            "rights classification: {} rows -> {}",
            records.len(),
            output.display()
        );
        Ok(records.len())
    }

    /// Aggregate per-country counts from an already-enriched table and
    /// write them as a `country,count` CSV, most frequent first.
    pub fn write_country_counts(
        &self,
        input: &Path,
        output: &Path,
        column: &str,
    ) -> Result<BTreeMap<String, u64>, PipelineError> {
        let (headers, records) = read_table(input)?;
        let column_index = find_column(&headers, column)?;

        let codes: Vec<String> = records
            .iter()
            .filter_map(|record| cell(record, column_index))
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect();

        let counts = self
            .service
            .country_counts(codes.iter().map(String::as_str));

        let mut rows: Vec<(&str, u64)> = counts
            .iter()
            .map(|(code, count)| (code.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        let mut writer = csv::WriterBuilder::new().from_path(output)?;
        writer.write_record(["country", "count"])?;
        for (code, count) in rows {
            writer.write_record([code, count.to_string().as_str()])?;
        }
        writer.flush()?;

        tracing::info!(
            "country counts: {} attributions across {} countries -> {}",
            codes.len(),
            counts.len(),
            output.display()
        );
        Ok(counts)
    }
}

/// Read a whole CSV table into memory. The datasets this pipeline serves
/// are catalog exports, small enough to materialize per run.
fn read_table(
    input: &Path,
) -> Result<(csv::StringRecord, Vec<csv::StringRecord>), PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(input)?;
    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok((headers, records))
}

fn find_column(headers: &csv::StringRecord, column: &str) -> Result<usize, PipelineError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| PipelineError::MissingColumn(column.to_string()))
}

/// A blank cell is an absent value, not an empty reference.
fn cell<'a>(record: &'a csv::StringRecord, index: usize) -> Option<&'a str> {
    record.get(index).filter(|value| !value.trim().is_empty())
}

fn extend_headers(headers: &csv::StringRecord, extra: &[&str]) -> csv::StringRecord {
    let mut extended = headers.clone();
    for column in extra {
        extended.push_field(column);
    }
    extended
}
