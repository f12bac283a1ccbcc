use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

//==============================================================================
// Cell Values
//==============================================================================

/// A single worksheet cell as read from the workbook
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank or missing cell
    Empty,
    /// Text cell
    Text(String),
    /// Integer cell (xls/ods may store these natively)
    Int(i64),
    /// Floating point cell
    Number(f64),
    /// Boolean cell
    Boolean(bool),
    /// Date/time, already formatted as `YYYY-MM-DD HH:MM:SS`
    DateTime(String),
    /// ISO 8601 date or duration string reported by the reader
    Iso(String),
    /// Spreadsheet error literal (`#DIV/0!`, `#N/A`, ...)
    Error(String),
}

/// Shortest round-tripping decimal (`30`, `2.5`), switching to
/// scientific notation (`1e+20`, `1.5e-07`) outside `1e-4..1e16`
fn format_number(n: f64) -> String {
    let magnitude = n.abs();
    if !n.is_finite() || magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return n.to_string();
    }

    // `{:e}` gives "1e20" / "-1.5e-7"; exponent gets an explicit sign and two digits
    let sci = format!("{:e}", n);
    match sci.split_once('e').map(|(m, e)| (m, e.parse::<i32>())) {
        Some((mantissa, Ok(exp))) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        _ => sci,
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::DateTime(s) | CellValue::Iso(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Boolean(true) => f.write_str("True"),
            CellValue::Boolean(false) => f.write_str("False"),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

//==============================================================================
// Tables
//==============================================================================

/// One worksheet read into memory: header names plus data rows
///
/// Every row has exactly `columns.len()` cells, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(name: String) -> Self {
        Self {
            name,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Position of a column by header name
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Look up a cell by row index and column name
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)
    }

    /// Append a row, padding or truncating it to the header width
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }
}

//==============================================================================
// Conversion Results
//==============================================================================

/// One produced (or, on a dry run, planned) output file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetOutput {
    pub sheet_name: String,
    pub output_path: PathBuf,
    pub columns: usize,
    pub rows: usize,
    pub bytes: usize,
    pub written: bool,
}

/// Summary of a whole run, printed by `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub workbook: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub sheets: Vec<SheetOutput>,
}

impl ConversionReport {
    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|s| s.rows).sum()
    }
}
