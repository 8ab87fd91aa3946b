use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool ingests, transforms, or emits adjustment data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Errors bubbled up from the CSV writer implementation.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when serializing the record list for diagnostics fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a worksheet does not follow the expected conventions.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when a required header label is absent from the header row.
    #[error("required column '{label}' not found in header row")]
    MissingColumn { label: String },

    /// Raised when an adjustment cell does not match the expected token shape.
    #[error("malformed adjustment entry '{entry}': {reason}")]
    MalformedAdjustment { entry: String, reason: String },

    /// Raised when a quantity token or cell is not numeric.
    #[error("invalid quantity literal '{value}'")]
    InvalidQuantity { value: String },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
