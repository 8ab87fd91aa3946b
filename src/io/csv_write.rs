use std::path::{Path, PathBuf};

use csv::Writer;

use crate::error::Result;
use crate::partition::SheetTable;

/// Writes each table as `{table name}.csv` inside the output directory,
/// header row first. Returns the paths written.
pub fn write_tables(out_dir: &Path, tables: &[SheetTable]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;

    let mut paths = Vec::with_capacity(tables.len());
    for table in tables {
        let path = out_dir.join(format!("{}.csv", table.sheet_name));
        let mut writer = Writer::from_path(&path)?;
        writer.write_record(&table.columns)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        paths.push(path);
    }

    Ok(paths)
}
