use crate::model::{ADJUSTMENT_HEADER, AdjustmentRecord, Category};

/// A table that will be materialised as an Excel worksheet or CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Extracts the records belonging to one category into an upload table.
///
/// The filter is stable: matching records keep the relative order they were
/// accumulated in. The table carries the fixed 13-column header and is named
/// `{bin}-ADJ-{CATEGORY}`.
pub fn category_table(records: &[AdjustmentRecord], category: Category, bin: &str) -> SheetTable {
    let rows = records
        .iter()
        .filter(|record| {
            record
                .category
                .as_str()
                .eq_ignore_ascii_case(category.as_str())
        })
        .map(AdjustmentRecord::values)
        .collect();

    let raw_name = format!("{bin}-ADJ-{}", category.as_str().to_uppercase());
    SheetTable {
        sheet_name: sanitize_sheet_name(&raw_name),
        columns: ADJUSTMENT_HEADER.iter().map(|label| (*label).to_string()).collect(),
        rows,
    }
}

/// Replaces characters Excel rejects in sheet names and enforces the 31
/// character limit.
fn sanitize_sheet_name(raw: &str) -> String {
    let invalid = [':', '\\', '/', '?', '*', '[', ']', '\'', '"'];
    let mut sanitized: String = raw
        .chars()
        .map(|ch| {
            if invalid.contains(&ch) || ch.is_control() {
                '_'
            } else {
                ch
            }
        })
        .collect();

    sanitized = sanitized.trim().to_string();
    if sanitized.is_empty() {
        sanitized = "Sheet".to_string();
    }

    if sanitized.len() > 31 {
        sanitized.truncate(31);
    }

    sanitized
}
