//! SheetSplit - one CSV file per worksheet
//!
//! This library opens a spreadsheet workbook (xlsx, xlsm, xlsb, xls, ods),
//! reads every worksheet into a [`Table`], and writes each one to
//! `<output_dir>/<worksheet>.csv`.
//!
//! # Features
//!
//! - Worksheets processed in workbook order, one output file each
//! - Header row taken from the first used row; blank and duplicate names disambiguated
//! - Standard CSV quoting, so every file parses back to the same values
//! - Fail-fast errors naming the stage (open, read, write) and the worksheet
//! - Dry-run mode and a serializable conversion report
//!
//! # Example
//!
//! ```no_run
//! use sheetsplit::core::convert;
//!
//! let outputs = convert("CSV/Input Example.xlsx", "CSV")?;
//! for output in &outputs {
//!     println!("Saved {} to {}", output.sheet_name, output.output_path.display());
//! }
//! # Ok::<(), sheetsplit::error::ConvertError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use types::{CellValue, ConversionReport, SheetOutput, Table};
