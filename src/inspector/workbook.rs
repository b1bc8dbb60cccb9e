//! Workbook loading
//!
//! Converts calamine ranges into header + rows tables. The first row of the
//! used range is the header.

use crate::error::{PrepError, Result};
use calamine::{open_workbook_auto, Data, DataType, Range, Reader, Sheets};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// One cell, detached from calamine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(String),
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Dict-style rendering used in row previews: text quoted, empty as `nan`
    pub fn repr(&self) -> String {
        match self {
            CellValue::Empty => "nan".to_string(),
            CellValue::Text(s) | CellValue::DateTime(s) => format!("'{}'", s),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::DateTime(s) | CellValue::Error(s) => write!(f, "{}", s),
            CellValue::Int(i) => write!(f, "{}", i),
            // Integral floats print without a fraction (xlsx stores every number as f64)
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(v) => CellValue::Float(*v),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(_) => match cell.as_datetime() {
                Some(dt) => CellValue::DateTime(format_datetime(&dt)),
                None => CellValue::DateTime(cell.to_string()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::DateTime(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}

fn format_datetime(dt: &chrono::NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// One sheet as header + data rows
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    /// Unique column names
    pub columns: Vec<String>,
    /// Header cells as written, blank where the sheet had no name
    pub source_header: Vec<String>,
    /// Data rows, each exactly `columns.len()` wide
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Builds a sheet from a header row and raw data rows
    pub fn new(name: impl Into<String>, header: &[CellValue], data: Vec<Vec<CellValue>>) -> Self {
        let columns = normalize_header(header);
        let source_header = header.iter().map(|cell| cell.to_string().trim().to_string()).collect();
        let width = columns.len();
        let rows = data
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();

        Self { name: name.into(), columns, source_header, rows }
    }

    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let mut iter = range.rows();
        let header: Vec<CellValue> = match iter.next() {
            Some(row) => row.iter().map(CellValue::from).collect(),
            None => Vec::new(),
        };
        let data = iter
            .map(|row| row.iter().map(CellValue::from).collect())
            .collect();

        Self::new(name, &header, data)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, top to bottom
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }
}

/// Blank names become `Unnamed: <i>`, repeats get `.1`, `.2`, ...
fn normalize_header(header: &[CellValue]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut columns = Vec::with_capacity(header.len());

    for (i, cell) in header.iter().enumerate() {
        let base = match cell.to_string().trim() {
            "" => format!("Unnamed: {}", i),
            name => name.to_string(),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.insert(name.clone());
        columns.push(name);
    }

    columns
}

/// An opened workbook
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Opens xlsx/xlsm/xlsb/xls/ods, picking the reader by extension
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PrepError::FileNotFound(path.display().to_string()));
        }
        let sheets = open_workbook_auto(path)?;
        tracing::debug!(path = %path.display(), "opened workbook");
        Ok(Self { path: path.to_path_buf(), sheets })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    pub fn read_sheet(&mut self, name: &str) -> Result<Sheet> {
        let range = self.sheets.worksheet_range(name)?;
        let sheet = Sheet::from_range(name, &range);
        tracing::debug!(
            sheet = name,
            rows = sheet.row_count(),
            columns = sheet.column_count(),
            "read sheet"
        );
        Ok(sheet)
    }

    pub fn read_first_sheet(&mut self) -> Result<Sheet> {
        let first = self
            .sheet_names()
            .into_iter()
            .next()
            .ok_or_else(|| PrepError::EmptyWorkbook(self.path.display().to_string()))?;
        self.read_sheet(&first)
    }

    pub fn read_all(&mut self) -> Result<Vec<Sheet>> {
        self.sheet_names()
            .iter()
            .map(|name| self.read_sheet(name))
            .collect()
    }
}
