mod csv_pipeline;

pub use csv_pipeline::{
    CsvPipeline, PipelineError, COUNTRY_COLUMN, GEO_REFERENCE_COLUMN, REGION_COLUMN,
    RIGHTS_COLUMN, RIGHTS_OUTPUT_COLUMNS,
};
