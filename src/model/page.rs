//! Page-level types.

use super::Table;
use serde::{Deserialize, Serialize};

/// The tables recovered from a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Tables in upstream extraction order
    pub tables: Vec<Table>,
}

impl Page {
    /// Create a page with tables.
    pub fn with_tables(number: u32, tables: Vec<Table>) -> Self {
        Self { number, tables }
    }

    /// Get the number of tables on the page.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Check if the page has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
