use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FillError {
    #[error("no input spreadsheet selected")]
    NoInput,
    #[error("title and/or description columns not found in the first {scanned} rows")]
    MissingColumns { scanned: u32 },
    #[error("no rows to fill below the header (first data row {first_row}, last row {last_row})")]
    NoDataRows { first_row: u32, last_row: u32 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("workbook error in {path:?}: {message}")]
    Workbook { path: PathBuf, message: String },
    #[error("serde json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("other: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FillError>;

impl From<anyhow::Error> for FillError {
    fn from(value: anyhow::Error) -> Self {
        Self::Other(value.to_string())
    }
}
