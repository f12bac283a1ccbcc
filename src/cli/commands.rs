use crate::core::{ConvertOptions, Converter};
use crate::error::{ConvertError, ConvertResult};
use crate::types::SheetOutput;
use clap::ValueEnum;
use colored::Colorize;
use std::path::PathBuf;

/// How the run is reported on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Progress line per worksheet
    Human,
    /// Conversion report as JSON
    Json,
}

/// Execute the convert command
pub fn convert(
    workbook: PathBuf,
    output_dir: PathBuf,
    options: ConvertOptions,
    format: OutputFormat,
    verbose: bool,
) -> ConvertResult<()> {
    let converter = Converter::new(options);
    let dry_run = converter.options().dry_run;

    match format {
        OutputFormat::Human => {
            println!("{}", "🔥 SheetSplit - Workbook to CSV".bold().green());
            println!("   Workbook: {}", workbook.display());
            println!("   Output:   {}", output_dir.display());
            if dry_run {
                println!("   Mode:     {}", "dry run".bright_yellow().bold());
            }
            println!();

            let report = converter.report(&workbook, &output_dir, |output| {
                print_progress(output, verbose)
            })?;

            println!();
            let summary = format!(
                "✅ Converted {} worksheet(s), {} data row(s)",
                report.sheets.len(),
                report.total_rows()
            );
            println!("{}", summary.bold().green());
            if dry_run {
                println!("{}", "📋 Dry run complete - no files written".yellow());
            }
        }
        OutputFormat::Json => {
            let report = converter.report(&workbook, &output_dir, |_| {})?;
            let json = serde_json::to_string_pretty(&report).map_err(|e| {
                ConvertError::OutputWrite {
                    path: PathBuf::from("<stdout>"),
                    source: e.into(),
                }
            })?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn print_progress(output: &SheetOutput, verbose: bool) {
    if output.written {
        println!(
            "   {} Saved {} to {}",
            "✓".green(),
            output.sheet_name,
            output.output_path.display()
        );
    } else {
        println!(
            "   {} Would save {} to {}",
            "-".yellow(),
            output.sheet_name,
            output.output_path.display()
        );
    }
    if verbose {
        println!(
            "      {} columns, {} rows, {} bytes",
            output.columns, output.rows, output.bytes
        );
    }
}
