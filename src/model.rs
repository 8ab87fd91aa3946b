use serde::{Deserialize, Serialize};

/// Placeholder written into every record; the upload target assigns the real
/// reference number on ingest.
pub const REFERENCE_PLACEHOLDER: &str = "To Be Generated";

/// Division label applied to every record.
pub const DIVISION: &str = "Hardware";

/// Department label applied to every record.
pub const DEPARTMENT: &str = "265-Other OH - HW";

/// Header row of every exported adjustment table. "Quantitiy" is misspelled
/// in the upload template and must stay misspelled here.
pub const ADJUSTMENT_HEADER: [&str; 13] = [
    "Reference #",
    "Adjustment Account",
    "Adjustment Account Reason",
    "Bin Number",
    "Item",
    "Location",
    "Adjust Qty. By",
    "Receipt Inventory Number",
    "Quantitiy",
    "Division",
    "Department",
    "Date",
    "Memo",
];

/// Product category an adjusted item belongs to. The category decides which
/// adjustment account the record posts against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Instrument,
    Implant,
}

impl Category {
    /// Lower-case label used in logs and matched case-insensitively when
    /// partitioning.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Instrument => "instrument",
            Category::Implant => "implant",
        }
    }

    /// Fixed (account, reason) pair posted for this category.
    pub fn account(&self) -> (&'static str, &'static str) {
        match self {
            Category::Instrument => (
                "65390 Manufacturing Overhead : Instrument wear",
                "SI Transaction",
            ),
            Category::Implant => (
                "65240 Manufacturing Overhead : Physical inventory adjustments",
                "HW Transaction",
            ),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the exported adjustment table.
///
/// `adj_qty_by` and `quantity` always hold the same signed value; the sign is
/// fixed at construction and encodes direction (negative removes from a lot,
/// positive adds to one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentRecord {
    pub reference_number: String,
    pub adjustment_account: String,
    pub adjustment_account_reason: String,
    pub bin_number: String,
    pub item: String,
    pub location: String,
    pub adj_qty_by: f64,
    pub lot_number: String,
    pub quantity: f64,
    pub division: String,
    pub department: String,
    pub date: String,
    pub memo: String,
    pub category: Category,
}

impl AdjustmentRecord {
    /// Flattens the record into the 13 upload columns, in header order.
    pub fn values(&self) -> Vec<String> {
        vec![
            self.reference_number.clone(),
            self.adjustment_account.clone(),
            self.adjustment_account_reason.clone(),
            self.bin_number.clone(),
            self.item.clone(),
            self.location.clone(),
            format_quantity(self.adj_qty_by),
            self.lot_number.clone(),
            format_quantity(self.quantity),
            self.division.clone(),
            self.department.clone(),
            self.date.clone(),
            self.memo.clone(),
        ]
    }
}

/// Renders a quantity the way the upload template expects: integral values
/// without a fractional part, fractional values as-is.
pub fn format_quantity(value: f64) -> String {
    value.to_string()
}

/// Typed view of one source worksheet row, as handed to the row processor.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// 1-based worksheet row index, kept for diagnostics.
    pub index: u32,
    /// Raw text of the adjustment cell; empty when no adjustment is requested.
    pub adjustment: String,
    /// Lot currently holding the quantity.
    pub lot: String,
    /// Item number.
    pub item: String,
    /// Quantity cell, when it held a numeric value.
    pub qty: Option<f64>,
    /// Raw text of the quantity cell, kept for error reporting.
    pub qty_raw: String,
}

/// Contents of the source worksheet relevant to one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSheet {
    /// Run-global bin identifier, taken from the designated bin cell.
    pub bin: String,
    pub rows: Vec<SourceRow>,
}
