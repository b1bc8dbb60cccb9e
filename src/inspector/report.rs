//! Inspection report
//!
//! Building and printing are separate so the numbers can be checked without
//! capturing stdout.

use super::workbook::{CellValue, Sheet};
use competitor_lens_common::types::{CATEGORY_COLUMN, COMPETITOR_COLUMN, FEATURE_COLUMN};
use competitor_lens_common::REQUIRED_COLUMNS;
use std::collections::HashSet;
use std::path::PathBuf;

/// Rows shown per sheet
pub const PREVIEW_ROWS: usize = 3;
/// Distinct values shown before `...`
pub const DISTINCT_PREVIEW: usize = 5;
/// Data rows scanned by the column profile (20 sheet rows with the header)
pub const PROFILE_ROWS: usize = 19;
/// Sample values kept per profiled column
pub const PROFILE_SAMPLES: usize = 5;

#[derive(Debug, Clone)]
pub struct SheetSummary {
    pub name: String,
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<String>,
    /// First rows as (column, value) pairs
    pub preview: Vec<Vec<(String, CellValue)>>,
}

impl SheetSummary {
    pub fn of(sheet: &Sheet) -> Self {
        let preview = sheet
            .rows
            .iter()
            .take(PREVIEW_ROWS)
            .map(|row| sheet.columns.iter().cloned().zip(row.iter().cloned()).collect())
            .collect();

        Self {
            name: sheet.name.clone(),
            row_count: sheet.row_count(),
            column_count: sheet.column_count(),
            columns: sheet.columns.clone(),
            preview,
        }
    }
}

/// Distinct-value profile of one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub column: String,
    pub distinct: usize,
    pub samples: Vec<String>,
}

/// Feature x competitor layout guess for one sheet
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixLayout {
    pub sheet: String,
    /// Leading values of the first column
    pub features: Vec<String>,
    /// Header names after the first column
    pub competitors: Vec<String>,
    /// `(feature, competitor, value)` from the top-left interior
    pub cells: Vec<(String, String, String)>,
}

#[derive(Debug, Clone, Default)]
pub struct InspectionReport {
    pub workbook: String,
    pub sheet_names: Vec<String>,
    pub summaries: Vec<SheetSummary>,
    pub csv_path: Option<PathBuf>,
    pub csv_rows: usize,
    pub missing_columns: Vec<&'static str>,
    pub competitors: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub profiles: Vec<(String, Vec<ColumnProfile>)>,
    pub matrices: Vec<MatrixLayout>,
    pub json_path: Option<PathBuf>,
}

/// Required columns absent from `columns`, in required order
pub fn missing_columns(columns: &[String]) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !columns.iter().any(|c| c == required))
        .collect()
}

/// Distinct non-empty values of a column in first-seen order
pub fn distinct_values(sheet: &Sheet, column: &str) -> Option<Vec<String>> {
    let index = sheet.column_index(column)?;
    Some(unique_in_order(sheet.column_values(index)))
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a CellValue>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

/// Fills the key-column previews from the first sheet
pub fn key_columns(report: &mut InspectionReport, first: &Sheet) {
    report.competitors = distinct_values(first, COMPETITOR_COLUMN);
    report.features = distinct_values(first, FEATURE_COLUMN);
    report.categories = distinct_values(first, CATEGORY_COLUMN);
}

/// Profiles columns that have data in the first `PROFILE_ROWS` rows
pub fn profile_columns(sheet: &Sheet) -> Vec<ColumnProfile> {
    (0..sheet.column_count())
        .filter_map(|index| {
            let values = unique_in_order(sheet.rows.iter().take(PROFILE_ROWS).map(|row| &row[index]));
            if values.is_empty() {
                return None;
            }
            Some(ColumnProfile {
                column: sheet.columns[index].clone(),
                distinct: values.len(),
                samples: values.into_iter().take(PROFILE_SAMPLES).collect(),
            })
        })
        .collect()
}

/// Guesses a matrix layout for sheets larger than 5×5 (header row included)
pub fn detect_matrix(sheet: &Sheet) -> Option<MatrixLayout> {
    if sheet.row_count() + 1 <= 5 || sheet.column_count() <= 5 {
        return None;
    }

    let features = sheet
        .rows
        .iter()
        .take(9)
        .map(|row| &row[0])
        .filter(|v| !v.is_empty())
        .take(5)
        .map(|v| v.to_string())
        .collect();

    // blank header cells are not competitors
    let competitors = sheet
        .source_header
        .iter()
        .skip(1)
        .take(9)
        .filter(|name| !name.is_empty())
        .take(5)
        .cloned()
        .collect();

    let mut cells = Vec::new();
    for row in sheet.rows.iter().take(3) {
        for (j, value) in row.iter().enumerate().skip(1).take(3) {
            if !value.is_empty() {
                cells.push((row[0].to_string(), sheet.columns[j].clone(), value.to_string()));
            }
        }
    }

    Some(MatrixLayout {
        sheet: sheet.name.clone(),
        features,
        competitors,
        cells,
    })
}

fn preview_list(values: &[String], limit: usize) -> String {
    let shown: Vec<&str> = values.iter().take(limit).map(String::as_str).collect();
    let more = if values.len() > limit { "..." } else { "" };
    format!("{}{}", shown.join(", "), more)
}

pub fn print_report(report: &InspectionReport) {
    println!("📊 Analyzing workbook: {}", report.workbook);
    println!("{}", "=".repeat(60));
    println!("📋 Sheet count: {}", report.sheet_names.len());
    println!("📄 Sheet names: {}", report.sheet_names.join(", "));
    println!();

    for summary in &report.summaries {
        println!("📑 Sheet: {}", summary.name);
        println!("{}", "-".repeat(40));
        println!("   📏 Shape: {} rows × {} columns", summary.row_count, summary.column_count);
        println!("   📝 Columns: {}", summary.columns.join(", "));

        if !summary.preview.is_empty() {
            println!("   👀 First {} rows:", PREVIEW_ROWS);
            for (i, row) in summary.preview.iter().enumerate() {
                let pairs: Vec<String> = row
                    .iter()
                    .map(|(column, value)| format!("'{}': {}", column, value.repr()))
                    .collect();
                println!("      Row {}: {{{}}}", i + 1, pairs.join(", "));
            }
        }
        println!();
    }

    if let Some(path) = &report.csv_path {
        println!("✅ Saved as CSV: {} ({} rows)", path.display(), report.csv_rows);

        println!("\n🔍 Platform compatibility check:");
        println!("{}", "-".repeat(40));
        if report.missing_columns.is_empty() {
            println!("✅ All required columns present!");
        } else {
            println!("⚠️  Missing columns: {}", report.missing_columns.join(", "));
            println!("💡 Add these columns to use the sheet on the platform");
        }

        println!("\n📊 Data samples:");
        println!("{}", "-".repeat(40));
        if let Some(values) = &report.competitors {
            println!("🏢 Exchanges ({}): {}", values.len(), preview_list(values, DISTINCT_PREVIEW));
        }
        if let Some(values) = &report.features {
            println!("⚡ Features ({}): {}", values.len(), preview_list(values, DISTINCT_PREVIEW));
        }
        if let Some(values) = &report.categories {
            println!("📂 Categories ({}): {}", values.len(), values.join(", "));
        }
    }

    for (sheet, profiles) in &report.profiles {
        println!("\n📈 Column profile: {}", sheet);
        for profile in profiles {
            println!("   {}:", profile.column);
            println!("     - Unique values: {}", profile.distinct);
            println!("     - Sample values: {:?}", profile.samples);
        }
    }

    for matrix in &report.matrices {
        println!("\n🔍 Matrix structure: {}", matrix.sheet);
        println!("   First column (possible features): {:?}", matrix.features);
        println!("   First row (possible competitors): {:?}", matrix.competitors);
        println!("   Matrix cell values (sample):");
        for (feature, competitor, value) in &matrix.cells {
            println!("     [{} x {}] = {}", feature, competitor, value);
        }
    }

    if let Some(path) = &report.json_path {
        println!("\n✅ Full data saved to {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sheet(columns: &[&str], rows: &[&[&str]]) -> Sheet {
        let header: Vec<CellValue> = columns.iter().map(|c| text(c)).collect();
        let data = rows
            .iter()
            .map(|r| {
                r.iter()
                    .map(|v| if v.is_empty() { CellValue::Empty } else { text(v) })
                    .collect()
            })
            .collect();
        Sheet::new("Sheet1", &header, data)
    }

    #[test]
    fn test_missing_columns_none() {
        let columns: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        assert!(missing_columns(&columns).is_empty());
    }

    #[test]
    fn test_missing_columns_exact() {
        let columns: Vec<String> = ["featureName", "notes", "extra", "competitorName"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            missing_columns(&columns),
            vec!["category", "hasFeature", "quality", "implementationQuality"]
        );
    }

    #[test]
    fn test_missing_columns_case_sensitive() {
        let columns = vec!["CompetitorName".to_string()];
        assert_eq!(missing_columns(&columns).len(), 7);
    }

    #[test]
    fn test_distinct_values_order_and_empty() {
        let s = sheet(
            &["competitorName", "category"],
            &[&["okx", "Spot"], &["binance", ""], &["okx", "P2P"], &["", "Spot"]],
        );
        assert_eq!(distinct_values(&s, "competitorName").unwrap(), vec!["okx", "binance"]);
        assert_eq!(distinct_values(&s, "category").unwrap(), vec!["Spot", "P2P"]);
        assert!(distinct_values(&s, "featureName").is_none());
    }

    #[test]
    fn test_summary_preview_limited() {
        let s = sheet(&["a", "b"], &[&["1", "2"], &["3", "4"], &["5", "6"], &["7", "8"]]);
        let summary = SheetSummary::of(&s);
        assert_eq!(summary.row_count, 4);
        assert_eq!(summary.column_count, 2);
        assert_eq!(summary.preview.len(), PREVIEW_ROWS);
        assert_eq!(summary.preview[2][1], ("b".to_string(), text("6")));
    }

    #[test]
    fn test_preview_list() {
        let values: Vec<String> = (1..=7).map(|i| i.to_string()).collect();
        assert_eq!(preview_list(&values, 5), "1, 2, 3, 4, 5...");
        assert_eq!(preview_list(&values[..2], 5), "1, 2");
    }

    #[test]
    fn test_profile_skips_empty_columns() {
        let s = sheet(&["a", "b"], &[&["x", ""], &["y", ""], &["x", ""]]);
        let profiles = profile_columns(&s);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].column, "a");
        assert_eq!(profiles[0].distinct, 2);
    }

    #[test]
    fn test_detect_matrix() {
        let columns = ["Feature", "Binance", "OKX", "Kraken", "Bybit", "Gate"];
        let rows: Vec<Vec<&str>> = (0..6)
            .map(|i| if i == 0 { vec!["Spot", "Yes", "", "No", "Yes", "Yes"] } else { vec!["P2P", "No", "No", "No", "No", "No"] })
            .collect();
        let row_refs: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
        let s = sheet(&columns, &row_refs);

        let matrix = detect_matrix(&s).expect("matrix expected");
        assert_eq!(matrix.competitors, vec!["Binance", "OKX", "Kraken", "Bybit", "Gate"]);
        assert_eq!(matrix.features.len(), 5);
        assert_eq!(matrix.cells[0], ("Spot".into(), "Binance".into(), "Yes".into()));
        // empty interior cell skipped
        assert_eq!(matrix.cells.len(), 8);
    }

    #[test]
    fn test_detect_matrix_skips_blank_header() {
        let columns = ["Feature", "", "OKX", "Kraken", "Bybit", "Gate", "Binance"];
        let row = ["Spot", "x", "Yes", "No", "Yes", "Yes", "Yes"];
        let rows: Vec<&[&str]> = (0..6).map(|_| &row[..]).collect();
        let s = sheet(&columns, &rows);

        let matrix = detect_matrix(&s).expect("matrix expected");
        assert_eq!(matrix.competitors, vec!["OKX", "Kraken", "Bybit", "Gate", "Binance"]);
    }

    #[test]
    fn test_profile_scans_first_nineteen_rows() {
        let values: Vec<String> = (0..25).map(|i| format!("v{}", i)).collect();
        let rows: Vec<[&str; 1]> = values.iter().map(|v| [v.as_str()]).collect();
        let row_refs: Vec<&[&str]> = rows.iter().map(|r| &r[..]).collect();
        let s = sheet(&["a"], &row_refs);

        let profiles = profile_columns(&s);
        assert_eq!(profiles[0].distinct, 19);
        assert_eq!(profiles[0].samples, vec!["v0", "v1", "v2", "v3", "v4"]);
    }

    #[test]
    fn test_detect_matrix_small_sheet() {
        let s = sheet(&["a", "b"], &[&["1", "2"]]);
        assert!(detect_matrix(&s).is_none());
    }
}
