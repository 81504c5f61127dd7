//! Table types.

use crate::parser::{normalize_cell, normalize_raw};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw cell value as delivered by the upstream table extractor.
///
/// Extractors emit `null` for cells they could not fill, and some emit
/// numbers for purely numeric cells. Everything is stringified by the
/// cell normalizer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum RawCell {
    /// No value
    #[default]
    Absent,
    /// Text content
    Text(String),
    /// Numeric content, kept in its JSON representation
    Number(String),
    /// Boolean content
    Bool(bool),
}

impl From<Value> for RawCell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawCell::Absent,
            Value::String(s) => RawCell::Text(s),
            Value::Number(n) => RawCell::Number(n.to_string()),
            Value::Bool(b) => RawCell::Bool(b),
            other => RawCell::Text(other.to_string()),
        }
    }
}

impl From<RawCell> for Value {
    fn from(cell: RawCell) -> Self {
        match cell {
            RawCell::Absent => Value::Null,
            RawCell::Text(s) | RawCell::Number(s) => Value::String(s),
            RawCell::Bool(b) => Value::Bool(b),
        }
    }
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        RawCell::Text(s.to_string())
    }
}

impl From<String> for RawCell {
    fn from(s: String) -> Self {
        RawCell::Text(s)
    }
}

impl<T: Into<RawCell>> From<Option<T>> for RawCell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawCell::Absent)
    }
}

/// A table recovered from one page.
///
/// Rows may have differing lengths. Every cell is normalized on
/// construction, so downstream stages only ever see clean text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<RawCell>>", into = "Vec<Vec<String>>")]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a table from raw upstream cells.
    pub fn from_raw(rows: Vec<Vec<RawCell>>) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| TableRow::new(row.iter().map(normalize_raw).collect()))
                .collect(),
        }
    }

    /// Create a table from text rows.
    ///
    /// # Example
    ///
    /// ```
    /// use valvespec::Table;
    ///
    /// let table = Table::from_strings([["Item", " DN\n100 "]]);
    /// assert_eq!(table.rows[0].cells[1], "DN 100");
    /// ```
    pub fn from_strings<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rows: rows.into_iter().map(TableRow::from_strings).collect(),
        }
    }

    /// Iterate over rows that have at least one non-empty cell, with their
    /// index in the table.
    pub fn non_empty_rows(&self) -> impl Iterator<Item = (usize, &TableRow)> {
        self.rows.iter().enumerate().filter(|(_, row)| !row.is_empty())
    }
}

impl From<Vec<Vec<RawCell>>> for Table {
    fn from(rows: Vec<Vec<RawCell>>) -> Self {
        Self::from_raw(rows)
    }
}

impl From<Table> for Vec<Vec<String>> {
    fn from(table: Table) -> Self {
        table.rows.into_iter().map(|row| row.cells).collect()
    }
}

/// A table row of normalized cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<String>,
}

impl TableRow {
    /// Create a row from already-normalized cells.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Create a row from text values, normalizing each.
    pub fn from_strings<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            values
                .into_iter()
                .map(|v| normalize_cell(v.as_ref()))
                .collect(),
        )
    }

    /// Get a cell by column index, if the row is long enough.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// Number of cells in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Case-folded concatenation of all cells, used for keyword tests.
    pub fn folded_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
