//! CSV and JSON export

use super::workbook::{CellValue, Sheet};
use crate::error::Result;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// `<export_dir>/<input stem>_converted.csv`
pub fn converted_csv_path(input: &Path, export_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "workbook".to_string());
    export_dir.join(format!("{}_converted.csv", stem))
}

/// Writes header + rows as comma-separated UTF-8. Returns the data row count.
pub fn write_csv(sheet: &Sheet, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .from_path(path)?;

    writer.write_record(&sheet.columns)?;
    for row in &sheet.rows {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    writer.flush()?;

    tracing::debug!(path = %path.display(), rows = sheet.row_count(), "wrote csv");
    Ok(sheet.row_count())
}

/// Sheets keyed by name in workbook order; each value is header row + data rows
struct SheetDump<'a>(&'a [Sheet]);

impl Serialize for SheetDump<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for sheet in self.0 {
            let header: Vec<CellValue> = sheet.columns.iter().cloned().map(CellValue::Text).collect();
            let mut table: Vec<&[CellValue]> = Vec::with_capacity(sheet.rows.len() + 1);
            if !header.is_empty() {
                table.push(&header);
            }
            table.extend(sheet.rows.iter().map(Vec::as_slice));
            map.serialize_entry(&sheet.name, &table)?;
        }
        map.end()
    }
}

pub fn write_json_dump(sheets: &[Sheet], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &SheetDump(sheets))?;
    Ok(())
}
