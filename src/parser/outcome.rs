//! Tagged outcomes for tables and rows that do not yield records.
//!
//! Rejections are a normal part of interpreting drawing tables: most
//! tables on a drawing are title blocks or revision lists, and most
//! specification tables carry section headers and notes between lines.

use std::fmt;

use serde::Serialize;

use crate::model::ValveItem;

/// Keyword family required in a candidate table's leading rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordFamily {
    /// Quantity labels ("qty", "колич")
    Quantity,
    /// Nominal diameter labels ("dn", "nominal", "номин")
    Diameter,
    /// Item labels ("item", "позици")
    Item,
}

impl fmt::Display for KeywordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeywordFamily::Quantity => "quantity",
            KeywordFamily::Diameter => "diameter",
            KeywordFamily::Item => "item",
        };
        f.write_str(name)
    }
}

/// Why a whole table contributed no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableRejection {
    /// Fewer non-empty rows than required
    TooFewRows(usize),
    /// First non-empty row has fewer cells than required
    TooFewColumns(usize),
    /// No keyword of this family in the leading rows
    MissingKeywords(KeywordFamily),
    /// No row carries both quantity and diameter labels
    NoHeader,
    /// Header found but item or diameter column unresolved
    NoRoleColumns,
}

impl fmt::Display for TableRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableRejection::TooFewRows(n) => write!(f, "too few non-empty rows ({})", n),
            TableRejection::TooFewColumns(n) => write!(f, "too few columns ({})", n),
            TableRejection::MissingKeywords(family) => {
                write!(f, "no {} keyword in leading rows", family)
            }
            TableRejection::NoHeader => f.write_str("no header row found"),
            TableRejection::NoRoleColumns => f.write_str("item or diameter column unresolved"),
        }
    }
}

/// Why a data row was not emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowRejection {
    /// Every cell is empty
    Blank,
    /// Row is shorter than the rightmost resolved column
    TooShort {
        /// Cells present
        len: usize,
        /// Cells needed
        required: usize,
    },
    /// Item cell has no tag match
    MissingItemId,
    /// Diameter cell has no DN match
    MissingDiameter,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowRejection::Blank => f.write_str("blank row"),
            RowRejection::TooShort { len, required } => {
                write!(f, "row has {} cells, needs {}", len, required)
            }
            RowRejection::MissingItemId => f.write_str("no item tag in item column"),
            RowRejection::MissingDiameter => f.write_str("no DN value in diameter column"),
        }
    }
}

/// Result of interpreting one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Row is a valve line
    Accepted(ValveItem),
    /// Row is not a valve line
    Rejected(RowRejection),
}

impl RowOutcome {
    /// Get the accepted item, if any.
    pub fn item(self) -> Option<ValveItem> {
        match self {
            RowOutcome::Accepted(item) => Some(item),
            RowOutcome::Rejected(_) => None,
        }
    }

    /// Check if the row was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, RowOutcome::Accepted(_))
    }
}

/// Either kind of rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Whole table rejected
    Table(TableRejection),
    /// Single row rejected
    Row(RowRejection),
}

impl From<TableRejection> for RejectReason {
    fn from(r: TableRejection) -> Self {
        RejectReason::Table(r)
    }
}

impl From<RowRejection> for RejectReason {
    fn from(r: RowRejection) -> Self {
        RejectReason::Row(r)
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Table(r) => fmt::Display::fmt(r, f),
            RejectReason::Row(r) => fmt::Display::fmt(r, f),
        }
    }
}

/// A recorded rejection with its location in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Page number (1-indexed)
    pub page: u32,
    /// Table index within the page (0-indexed)
    pub table: usize,
    /// Row index within the table (0-indexed), for row rejections
    pub row: Option<usize>,
    /// What went wrong
    pub reason: RejectReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(
                f,
                "page {} table {} row {}: {}",
                self.page, self.table, row, self.reason
            ),
            None => write!(f, "page {} table {}: {}", self.page, self.table, self.reason),
        }
    }
}
