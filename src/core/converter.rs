use crate::error::{ConvertError, ConvertResult};
use crate::excel::WorkbookReader;
use crate::types::{ConversionReport, SheetOutput};
use crate::writer;
use std::path::Path;
use tracing::info;

/// Conversion options
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Field separator byte
    pub delimiter: u8,
    /// Read and serialize everything but write no files
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            dry_run: false,
        }
    }
}

impl ConvertOptions {
    /// Reject delimiters that would make the output ambiguous
    pub fn validate(&self) -> ConvertResult<()> {
        match self.delimiter {
            b'"' | b'\r' | b'\n' => Err(ConvertError::InvalidOption(format!(
                "delimiter {:?} conflicts with quoting or line breaks",
                self.delimiter as char
            ))),
            d if !d.is_ascii() => Err(ConvertError::InvalidOption(
                "delimiter must be a single ASCII character".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Splits a workbook into one delimited file per worksheet
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    #[must_use]
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert every worksheet, returning the produced files in worksheet order
    pub fn convert<P, Q>(&self, workbook_path: P, output_dir: Q) -> ConvertResult<Vec<SheetOutput>>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        self.convert_with_progress(workbook_path, output_dir, |_| {})
    }

    /// Same as [`Converter::convert`], calling `on_sheet` after each worksheet
    ///
    /// Fails fast: the first open, read, or write error is returned and files
    /// already written are left in place.
    pub fn convert_with_progress<P, Q, F>(
        &self,
        workbook_path: P,
        output_dir: Q,
        mut on_sheet: F,
    ) -> ConvertResult<Vec<SheetOutput>>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        F: FnMut(&SheetOutput),
    {
        self.options.validate()?;
        let output_dir = output_dir.as_ref();

        let mut workbook = WorkbookReader::open(workbook_path)?;
        let sheet_names = workbook.sheet_names();
        info!(
            workbook = %workbook.path().display(),
            sheets = sheet_names.len(),
            "workbook opened"
        );

        let mut outputs = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            let table = workbook.read_table(&sheet_name)?;
            let output_path = writer::output_path(output_dir, &sheet_name);

            let bytes = if self.options.dry_run {
                writer::render_csv(&table, self.options.delimiter)
                    .map_err(|source| ConvertError::OutputWrite {
                        path: output_path.clone(),
                        source,
                    })?
                    .len()
            } else {
                writer::write_table(&table, &output_path, self.options.delimiter)?
            };

            let output = SheetOutput {
                sheet_name,
                output_path,
                columns: table.column_count(),
                rows: table.row_count(),
                bytes,
                written: !self.options.dry_run,
            };
            info!(
                sheet = %output.sheet_name,
                path = %output.output_path.display(),
                rows = output.rows,
                dry_run = self.options.dry_run,
                "worksheet converted"
            );
            on_sheet(&output);
            outputs.push(output);
        }

        Ok(outputs)
    }

    /// Convert and wrap the result in a [`ConversionReport`]
    pub fn report<P, Q, F>(
        &self,
        workbook_path: P,
        output_dir: Q,
        on_sheet: F,
    ) -> ConvertResult<ConversionReport>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        F: FnMut(&SheetOutput),
    {
        let sheets = self.convert_with_progress(&workbook_path, &output_dir, on_sheet)?;
        Ok(ConversionReport {
            workbook: workbook_path.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            dry_run: self.options.dry_run,
            sheets,
        })
    }
}

/// Convert a workbook with default options
///
/// Writes `<output_dir>/<sheet>.csv` for every worksheet and returns them in
/// worksheet order. `output_dir` must already exist.
pub fn convert<P, Q>(workbook_path: P, output_dir: Q) -> ConvertResult<Vec<SheetOutput>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Converter::default().convert(workbook_path, output_dir)
}
