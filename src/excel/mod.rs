//! Workbook input
//!
//! Opens spreadsheet workbooks through calamine and reads each worksheet
//! into a [`Table`](crate::types::Table).

mod reader;

pub use reader::WorkbookReader;
