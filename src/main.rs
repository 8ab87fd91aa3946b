use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use lotadj_tools::generate::{self, RunReport};
use lotadj_tools::process::RunConfig;
use lotadj_tools::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Generate(args) => execute_generate(args),
    }
}

fn execute_generate(args: GenerateArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ToolError::MissingInput(args.input));
    }

    let format = args.resolve_format();
    let config = RunConfig {
        location: args.location,
        memo: args.memo,
    };
    let sheet = args.sheet.as_deref();

    let report = match format {
        OutputFormat::Xlsx => {
            generate::excel_to_workbook(&args.input, &args.output, sheet, &config)
        }
        OutputFormat::Csv => generate::excel_to_csv(&args.input, &args.output, sheet, &config),
    }?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &RunReport) {
    println!(
        "{} adjustment records generated from {} rows",
        report.records, report.rows_processed
    );
    if !report.issues.is_empty() {
        eprintln!("{} rows skipped:", report.issues.len());
        for issue in &report.issues {
            eprintln!("- row {}: {}", issue.row, issue.error);
        }
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert tray-build lot adjustment worksheets into bulk-upload tables."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the per-category adjustment upload tables.
    Generate(GenerateArgs),
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Source worksheet path.
    #[arg(long)]
    input: PathBuf,

    /// Output path: a workbook file for xlsx, a directory for csv.
    #[arg(long)]
    output: PathBuf,

    /// Output representation. Guessed from the output path when omitted.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Worksheet to read. Defaults to the workbook's first sheet.
    #[arg(long)]
    sheet: Option<String>,

    /// Location code stamped on every record.
    #[arg(long, default_value = "TRAYBUILD")]
    location: String,

    /// Memo text stamped on every record.
    #[arg(long, default_value = "Cortera MMO Trays - ")]
    memo: String,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Xlsx,
    Csv,
}

impl GenerateArgs {
    fn resolve_format(&self) -> OutputFormat {
        self.format.unwrap_or_else(|| guess_format(&self.output))
    }
}

fn guess_format(path: &Path) -> OutputFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("xlsx") => OutputFormat::Xlsx,
        _ => OutputFormat::Csv,
    }
}
