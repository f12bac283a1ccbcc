use crate::error::{ConvertError, ConvertResult};
use crate::types::Table;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Output file for a worksheet: `<output_dir>/<sheet_name>.csv`
///
/// The sheet name is used as-is, with no sanitization.
pub fn output_path(output_dir: &Path, sheet_name: &str) -> PathBuf {
    output_dir.join(format!("{}.csv", sheet_name))
}

/// Serialize a table to delimited text
///
/// Header line first, then one line per row, `\n` terminated. Fields holding
/// the delimiter, a quote, or a line break are quoted with inner quotes doubled.
/// A table with no columns serializes to nothing.
pub fn render_csv(table: &Table, delimiter: u8) -> io::Result<Vec<u8>> {
    if table.columns.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }

    writer.into_inner().map_err(|e| e.into_error())
}

/// Write bytes to `path`, replacing any existing file
pub fn write_output(path: &Path, bytes: &[u8]) -> ConvertResult<()> {
    fs::write(path, bytes).map_err(|source| ConvertError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize and write a table in one step, returning the byte count
pub fn write_table(table: &Table, path: &Path, delimiter: u8) -> ConvertResult<usize> {
    let bytes = render_csv(table, delimiter).map_err(|source| ConvertError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_output(path, &bytes)?;
    Ok(bytes.len())
}
