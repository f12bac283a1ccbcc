//! Workbook reader - worksheet → Table

use crate::error::{ConvertError, ConvertResult};
use crate::types::{CellValue, Table};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only handle on an open workbook (xlsx, xlsm, xlsb, xls, ods)
pub struct WorkbookReader {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookReader {
    /// Open a workbook, detecting the format from the file
    pub fn open<P: AsRef<Path>>(path: P) -> ConvertResult<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook = open_workbook_auto(&path).map_err(|e| ConvertError::WorkbookOpen {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(Self { path, workbook })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Worksheet names in the order stored in the workbook
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// Read one worksheet: first used row is the header, the rest are data rows
    pub fn read_table(&mut self, sheet_name: &str) -> ConvertResult<Table> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| ConvertError::WorksheetRead {
                sheet: sheet_name.to_string(),
                message: e.to_string(),
            })?;

        let table = range_to_table(sheet_name, &range);
        debug!(
            sheet = sheet_name,
            empty = table.is_empty(),
            columns = table.column_count(),
            rows = table.row_count(),
            "worksheet read"
        );
        Ok(table)
    }
}

/// Build a Table from a worksheet's used range
///
/// Columns are anchored at column A: blank leading columns are kept as empty
/// cells. Blank leading rows are skipped, so the header is the first used row.
pub(crate) fn range_to_table(sheet_name: &str, range: &Range<Data>) -> Table {
    let mut table = Table::new(sheet_name.to_string());
    if range.is_empty() {
        return table;
    }

    let offset = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range.rows();
    if let Some(header) = rows.next() {
        let mut padded = vec![Data::Empty; offset];
        padded.extend_from_slice(header);
        table.columns = header_names(&padded);
    }
    for row in rows {
        let mut cells = vec![CellValue::Empty; offset];
        cells.extend(row.iter().map(cell_value));
        table.push_row(cells);
    }
    table
}

/// Convert a calamine cell into a CellValue
pub(crate) fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::DateTime(format_datetime(&ndt)),
            // Serial out of chrono's range
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Iso(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Header names for the first row: blanks become `Unnamed: <index>`,
/// repeats get `.1`, `.2`, ... suffixes in order of appearance
pub(crate) fn header_names(cells: &[Data]) -> Vec<String> {
    let raw = cells.iter().enumerate().map(|(idx, cell)| {
        let text = cell_value(cell).to_string();
        if text.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            text
        }
    });

    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(cells.len());
    for name in raw {
        let mut candidate = name.clone();
        let mut suffix = 0;
        while seen.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}.{}", name, suffix);
        }
        seen.insert(candidate.clone());
        names.push(candidate);
    }
    names
}
