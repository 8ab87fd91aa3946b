use chrono::Local;
use tracing::warn;

use crate::classify::Classifier;
use crate::error::{Result, ToolError};
use crate::model::{
    AdjustmentRecord, DEPARTMENT, DIVISION, REFERENCE_PLACEHOLDER, SourceRow,
};
use crate::parse::{ParsedAdjustment, parse_adjustment};

/// Run-wide settings applied uniformly to every record.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub location: String,
    pub memo: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            location: "TRAYBUILD".to_string(),
            memo: "Cortera MMO Trays - ".to_string(),
        }
    }
}

/// A source row that could not be converted into records. The remaining rows
/// of the run are unaffected.
#[derive(Debug)]
pub struct RowIssue {
    /// 1-based worksheet row index.
    pub row: u32,
    pub error: ToolError,
}

/// Records and per-row failures accumulated by one run.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub records: Vec<AdjustmentRecord>,
    pub issues: Vec<RowIssue>,
    /// Number of rows that requested an adjustment.
    pub rows_processed: usize,
}

/// Builds the paired out/in records for parsed adjustments, attaching
/// classification and the fixed run metadata.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    bin: String,
    location: String,
    memo: String,
    date: String,
    classifier: Classifier,
}

impl RecordBuilder {
    /// Creates a builder stamped with the current local date. Every record
    /// produced through this builder shares the stamp.
    pub fn new(bin: impl Into<String>, config: &RunConfig) -> Self {
        Self {
            bin: bin.into(),
            location: config.location.clone(),
            memo: config.memo.clone(),
            date: Local::now().format("%-m/%-d/%Y").to_string(),
            classifier: Classifier::default(),
        }
    }

    /// Overrides the date stamp. Used by tests to keep output deterministic.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Emits the record pairs for one source row: for each parsed entry, an
    /// out record draining the original lot by the original quantity,
    /// immediately followed by an in record filling the target lot.
    pub fn build(
        &self,
        item: &str,
        original_lot: &str,
        original_qty: f64,
        entries: &[ParsedAdjustment],
    ) -> Vec<AdjustmentRecord> {
        let mut records = Vec::with_capacity(entries.len() * 2);
        for entry in entries {
            records.push(self.record(item, original_lot, -original_qty));
            records.push(self.record(item, &entry.target_lot, entry.quantity));
        }
        records
    }

    fn record(&self, item: &str, lot: &str, qty: f64) -> AdjustmentRecord {
        let category = self.classifier.classify(item);
        let (account, reason) = category.account();
        AdjustmentRecord {
            reference_number: REFERENCE_PLACEHOLDER.to_string(),
            adjustment_account: account.to_string(),
            adjustment_account_reason: reason.to_string(),
            bin_number: self.bin.clone(),
            item: item.to_string(),
            location: self.location.clone(),
            adj_qty_by: qty,
            lot_number: lot.to_string(),
            quantity: qty,
            division: DIVISION.to_string(),
            department: DEPARTMENT.to_string(),
            date: self.date.clone(),
            memo: self.memo.clone(),
            category,
        }
    }
}

/// Drives the parser and builder across the source rows.
///
/// Rows with an empty adjustment cell are skipped outright. A row that fails
/// to parse is logged and recorded as an issue; it never aborts the run or
/// corrupts records produced from other rows.
pub fn collect_records(rows: &[SourceRow], builder: &RecordBuilder) -> RunOutcome {
    let mut outcome = RunOutcome::default();

    for row in rows {
        if row.adjustment.trim().is_empty() {
            continue;
        }
        outcome.rows_processed += 1;

        match build_row(row, builder) {
            Ok(mut records) => outcome.records.append(&mut records),
            Err(error) => {
                warn!(row = row.index, %error, "skipping row");
                outcome.issues.push(RowIssue {
                    row: row.index,
                    error,
                });
            }
        }
    }

    outcome
}

fn build_row(row: &SourceRow, builder: &RecordBuilder) -> Result<Vec<AdjustmentRecord>> {
    let qty = row.qty.ok_or_else(|| ToolError::InvalidQuantity {
        value: row.qty_raw.clone(),
    })?;
    let entries = parse_adjustment(&row.adjustment, qty)?;
    Ok(builder.build(&row.item, &row.lot, qty, &entries))
}
