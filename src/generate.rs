use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::io::{csv_write, excel_read, excel_write};
use crate::model::Category;
use crate::partition::{SheetTable, category_table};
use crate::process::{RecordBuilder, RowIssue, RunConfig, collect_records};

/// Order the category tables are emitted in.
const CATEGORIES: [Category; 2] = [Category::Implant, Category::Instrument];

/// User-visible outcome of one run.
#[derive(Debug)]
pub struct RunReport {
    /// Adjustment records written across all category tables.
    pub records: usize,
    /// Source rows that requested an adjustment.
    pub rows_processed: usize,
    /// Rows skipped because they could not be interpreted.
    pub issues: Vec<RowIssue>,
}

/// Converts a tray-build worksheet into a workbook holding one upload sheet
/// per category.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn excel_to_workbook(
    input: &Path,
    output: &Path,
    sheet: Option<&str>,
    config: &RunConfig,
) -> Result<RunReport> {
    let (tables, report) = build_tables(input, sheet, config)?;
    excel_write::write_workbook(output, &tables)?;
    Ok(report)
}

/// Converts a tray-build worksheet into one CSV file per category inside the
/// output directory.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %out_dir.display())
)]
pub fn excel_to_csv(
    input: &Path,
    out_dir: &Path,
    sheet: Option<&str>,
    config: &RunConfig,
) -> Result<RunReport> {
    let (tables, report) = build_tables(input, sheet, config)?;
    let paths = csv_write::write_tables(out_dir, &tables)?;
    debug!(file_count = paths.len(), "CSV files written");
    Ok(report)
}

fn build_tables(
    input: &Path,
    sheet: Option<&str>,
    config: &RunConfig,
) -> Result<(Vec<SheetTable>, RunReport)> {
    let source = excel_read::read_source_sheet(input, sheet)?;
    info!(
        row_count = source.rows.len(),
        bin = %source.bin,
        "read source sheet"
    );

    let builder = RecordBuilder::new(source.bin.clone(), config);
    let outcome = collect_records(&source.rows, &builder);
    info!(
        record_count = outcome.records.len(),
        rows_processed = outcome.rows_processed,
        issue_count = outcome.issues.len(),
        "adjustment records accumulated"
    );
    let record_dump = serde_json::to_string(&outcome.records)?;
    debug!(records = %record_dump, "full record list");

    let tables = CATEGORIES
        .iter()
        .map(|category| category_table(&outcome.records, *category, &source.bin))
        .collect();

    Ok((
        tables,
        RunReport {
            records: outcome.records.len(),
            rows_processed: outcome.rows_processed,
            issues: outcome.issues,
        },
    ))
}
