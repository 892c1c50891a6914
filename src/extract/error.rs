use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read workbook {path:?}: {source}")]
    UnreadableWorkbook {
        path: PathBuf,
        source: calamine::Error,
    },
    #[error("Could not find Excel Worksheet '{sheet}' in workbook {path:?}")]
    MissingSheet { sheet: String, path: PathBuf },
    #[error("Excel Worksheet '{sheet}' has no header at row {row}")]
    MissingHeaderRow { sheet: String, row: usize },
    #[error("Excel Worksheet '{sheet}' is missing the columns {columns:?}")]
    MissingColumns { sheet: String, columns: Vec<String> },
    #[error("Out of bounds index when loading vector {0} in {1}.")]
    ExcelIndexing(usize, String),
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error(transparent)]
    Calamine(#[from] calamine::Error),
}
