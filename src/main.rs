use clap::Parser;
use colored::Colorize;
use sheetsplit::cli::{self, OutputFormat};
use sheetsplit::core::ConvertOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetsplit")]
#[command(about = "Split every worksheet of a workbook into its own CSV file.")]
#[command(long_about = "SheetSplit - one CSV file per worksheet

Opens a workbook (.xlsx, .xlsm, .xlsb, .xls, .ods), reads each worksheet in
workbook order, and writes it to <OUTPUT_DIR>/<worksheet name>.csv.
The first used row of a worksheet becomes the CSV header.

BEHAVIOR:
  - Existing CSV files are overwritten
  - The output directory must already exist
  - Worksheet names are used as file names without sanitization
  - The first error stops the run; files already written are kept

EXAMPLES:
  sheetsplit                                   # CSV/Input Example.xlsx -> CSV/
  sheetsplit inventory.xlsx out/               # one CSV per worksheet in out/
  sheetsplit inventory.xlsx out/ --dry-run     # show what would be written
  sheetsplit inventory.xlsx out/ -f json       # JSON report on stdout")]
#[command(version)]
struct Cli {
    /// Path to the workbook to split
    #[arg(value_name = "WORKBOOK", default_value = "CSV/Input Example.xlsx")]
    workbook: PathBuf,

    /// Existing directory that receives the CSV files
    #[arg(value_name = "OUTPUT_DIR", default_value = "CSV")]
    output_dir: PathBuf,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Read every worksheet but write no files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Show per-worksheet details and debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    let value = match s {
        "\\t" | "tab" => "\t",
        other => other,
    };
    match value.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("expected a single ASCII character, got '{}'", s)),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "sheetsplit=debug"
    } else {
        "sheetsplit=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = ConvertOptions {
        delimiter: cli.delimiter,
        dry_run: cli.dry_run,
    };

    if let Err(e) = cli::convert(cli.workbook, cli.output_dir, options, cli.format, cli.verbose) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
