use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("open failed for workbook '{}': {message}", .path.display())]
    WorkbookOpen { path: PathBuf, message: String },

    #[error("read failed for worksheet '{sheet}': {message}")]
    WorksheetRead { sheet: String, message: String },

    #[error("write failed for '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl ConvertError {
    /// Stage of the conversion that failed
    pub fn stage(&self) -> &'static str {
        match self {
            ConvertError::WorkbookOpen { .. } => "open",
            ConvertError::WorksheetRead { .. } => "read",
            ConvertError::OutputWrite { .. } => "write",
            ConvertError::InvalidOption(_) => "config",
        }
    }

    /// Worksheet involved, for worksheet-level failures
    pub fn sheet(&self) -> Option<&str> {
        match self {
            ConvertError::WorksheetRead { sheet, .. } => Some(sheet),
            _ => None,
        }
    }
}
