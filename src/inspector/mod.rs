//! Workbook inspector
//!
//! Summarizes every sheet, exports the first sheet to CSV and checks it
//! against the platform's required columns.

pub mod export;
pub mod report;
pub mod workbook;

pub use report::{print_report, InspectionReport, SheetSummary};
pub use workbook::{CellValue, Sheet, Workbook};

use crate::error::{PrepError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct InspectOptions {
    pub export_dir: PathBuf,
    pub profile: bool,
    pub matrix: bool,
    pub json: Option<PathBuf>,
}

impl InspectOptions {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
            profile: false,
            matrix: false,
            json: None,
        }
    }
}

/// Inspects `path`. A missing file is reported and yields `Ok(None)`.
pub fn inspect(path: &Path, options: &InspectOptions) -> Result<Option<InspectionReport>> {
    if !path.exists() {
        println!("❌ File not found: {}", path.display());
        return Ok(None);
    }

    let mut workbook = Workbook::open(path)?;
    let sheet_names = workbook.sheet_names();

    let mut report = InspectionReport {
        workbook: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        sheet_names: sheet_names.clone(),
        ..Default::default()
    };

    let sheets = workbook.read_all()?;
    report.summaries = sheets.iter().map(SheetSummary::of).collect();

    if options.profile {
        report.profiles = sheets
            .iter()
            .map(|sheet| (sheet.name.clone(), report::profile_columns(sheet)))
            .collect();
    }
    if options.matrix {
        report.matrices = sheets.iter().filter_map(report::detect_matrix).collect();
    }

    if !sheet_names.is_empty() {
        let first = workbook.read_first_sheet()?;
        let csv_path = export::converted_csv_path(path, &options.export_dir);
        report.csv_rows = export::write_csv(&first, &csv_path)?;
        report.csv_path = Some(csv_path);

        report.missing_columns = report::missing_columns(&first.columns);
        report::key_columns(&mut report, &first);
    }

    if let Some(json_path) = &options.json {
        export::write_json_dump(&sheets, json_path)?;
        report.json_path = Some(json_path.clone());
    }

    Ok(Some(report))
}

/// Generic failure text: the error plus a hint line
pub fn failure_message(error: &PrepError) -> String {
    format!(
        "❌ Error: {}\n💡 Is the file a valid .xlsx/.xls/.ods workbook and is the export directory writable?",
        error
    )
}

/// Runs `inspect` and prints the report. Failures are printed, never returned.
/// Returns whether a report was produced.
pub fn run(path: &Path, options: &InspectOptions) -> bool {
    match inspect(path, options) {
        Ok(Some(report)) => {
            print_report(&report);
            true
        }
        Ok(None) => false,
        Err(e) => {
            tracing::debug!(error = ?e, "inspection failed");
            println!("{}", failure_message(&e));
            false
        }
    }
}
