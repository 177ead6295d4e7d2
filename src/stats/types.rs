//! Stat table rows and cell values.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::{cli::types::StatCategory, Result};

static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?|\.\d+)$").unwrap()
});

/// A single table cell as shown on the page.
///
/// Numbers keep their printed form (`"1.00"`, `"+2"`) minus thousands
/// separators, and that form is what gets written out.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number { value: f64, text: String },
    Text(String),
    Empty,
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Number { value, .. } => serializer.serialize_f64(*value),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Empty => serializer.serialize_none(),
        }
    }
}

impl CellValue {
    /// Classify already-trimmed cell text. Thousands separators are accepted
    /// for numbers (`"1,234"`); anything else non-empty stays text.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return CellValue::Empty;
        }
        if NUMERIC.is_match(text) {
            let plain = text.replace(',', "");
            if let Ok(value) = plain.parse::<f64>() {
                return CellValue::Number { value, text: plain };
            }
        }
        CellValue::Text(text.to_string())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number { text, .. } => write!(f, "{}", text),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Empty => Ok(()),
        }
    }
}

/// One player row; cells line up with [`StatTable::columns`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub cells: Vec<CellValue>,
}

impl StatRow {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }
}

/// A scraped player table for one stat category.
#[derive(Debug, Clone, Serialize)]
pub struct StatTable {
    pub category: StatCategory,
    pub columns: Vec<String>,
    pub rows: Vec<StatRow>,
}

impl StatTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Look up a cell by row index and column name.
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.cells.get(idx)
    }

    /// Column name -> value view of a row.
    pub fn row_map(&self, row: usize) -> Option<BTreeMap<&str, &CellValue>> {
        let row = self.rows.get(row)?;
        Some(
            self.columns
                .iter()
                .map(String::as_str)
                .zip(row.cells.iter())
                .collect(),
        )
    }

    /// Write the header row and every player row as CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.cells.iter().map(|c| c.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
