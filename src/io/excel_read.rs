use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{Result, ToolError};
use crate::model::{SourceRow, SourceSheet};

/// Header labels the source worksheet must carry in its first row.
pub const ADJUSTMENT_COLUMN: &str = "LOT ADJ";
pub const LOT_COLUMN: &str = "Lot";
pub const ITEM_COLUMN: &str = "Item Number";
pub const QTY_COLUMN: &str = "QTY";
pub const BIN_COLUMN: &str = "Bin Number";

/// Reads the tray-build worksheet into typed source rows.
///
/// Uses the named worksheet when given, otherwise the workbook's first sheet.
/// The first row is treated as the header row; the bin identifier comes from
/// the second row of the bin-number column.
pub fn read_source_sheet(path: &Path, sheet: Option<&str>) -> Result<SourceSheet> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ToolError::InvalidWorkbook("workbook has no worksheets".into()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{sheet_name}'")))?
        .map_err(ToolError::from)?;

    let headers: Vec<String> = match range.rows().next() {
        Some(first_row) => first_row
            .iter()
            .map(|cell| cell_to_string(Some(cell)))
            .collect(),
        None => {
            return Err(ToolError::InvalidWorkbook(format!(
                "sheet '{sheet_name}' is empty"
            )));
        }
    };

    let adj_col = require_column(&headers, ADJUSTMENT_COLUMN)?;
    let lot_col = require_column(&headers, LOT_COLUMN)?;
    let item_col = require_column(&headers, ITEM_COLUMN)?;
    let qty_col = require_column(&headers, QTY_COLUMN)?;
    let bin_col = require_column(&headers, BIN_COLUMN)?;

    let bin = range
        .rows()
        .nth(1)
        .map(|row| cell_to_string(row.get(bin_col)))
        .unwrap_or_default();
    if bin.trim().is_empty() {
        return Err(ToolError::InvalidWorkbook(
            "bin number cell (row 2) is empty".into(),
        ));
    }

    let mut rows = Vec::new();
    for (row_idx, row) in range.rows().enumerate().skip(1) {
        rows.push(SourceRow {
            index: (row_idx + 1) as u32,
            adjustment: cell_to_string(row.get(adj_col)),
            lot: cell_to_string(row.get(lot_col)),
            item: cell_to_string(row.get(item_col)),
            qty: cell_to_number(row.get(qty_col)),
            qty_raw: cell_to_string(row.get(qty_col)),
        });
    }

    Ok(SourceSheet { bin, rows })
}

/// Finds the 0-based index of the first header matching `label`
/// case-insensitively. Callers decide how to handle a missing label; there is
/// no silent fallback column.
pub fn find_column(headers: &[String], label: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(label))
}

fn require_column(headers: &[String], label: &str) -> Result<usize> {
    find_column(headers, label).ok_or_else(|| ToolError::MissingColumn {
        label: label.to_string(),
    })
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Numeric view of a cell. Empty cells read as zero; non-numeric text reads
/// as `None` and is rejected only when the row requests an adjustment.
fn cell_to_number(cell: Option<&DataType>) -> Option<f64> {
    match cell {
        Some(DataType::Float(value)) => Some(*value),
        Some(DataType::Int(value)) => Some(*value as f64),
        Some(DataType::String(value)) => {
            if value.trim().is_empty() {
                Some(0.0)
            } else {
                value.trim().parse::<f64>().ok()
            }
        }
        Some(DataType::Empty) | None => Some(0.0),
        Some(DataType::Bool(_)) => None,
        Some(other) => other.to_string().trim().parse::<f64>().ok(),
    }
}
