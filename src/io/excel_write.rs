use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::partition::SheetTable;

/// Writes one worksheet per table into a fresh workbook at the given path.
pub fn write_workbook(path: &Path, tables: &[SheetTable]) -> Result<()> {
    let mut workbook = Workbook::new();

    for table in tables {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&table.sheet_name)?;

        for (col_idx, header) in table.columns.iter().enumerate() {
            worksheet.write_string(0, col_idx as u16, header)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                worksheet.write_string((row_idx + 1) as u32, col_idx as u16, cell)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
