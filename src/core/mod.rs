//! Workbook → CSV conversion

pub mod converter;

pub use converter::{convert, ConvertOptions, Converter};
