//! Valve specification records.

use serde::{Deserialize, Serialize};

/// One valve specification line.
///
/// `item_id` always matches the tag pattern (e.g. `040-BFV-2982`) and `dn`
/// is always the canonical nominal diameter (e.g. `DN100`). Rows where
/// either cannot be resolved never become a `ValveItem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValveItem {
    /// Ordinal number from the drawing table
    pub ord_no: Option<u32>,

    /// Equipment tag
    pub item_id: String,

    /// Nominal diameter
    pub dn: String,

    /// Quantity
    pub qty: Option<u32>,

    /// Drawing sheet number (falls back to the page number)
    pub sheet: u32,

    /// Page number (1-indexed)
    pub page: u32,
}

/// The `{"items": [...]}` envelope returned to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    /// Extracted records in document order
    pub items: Vec<ValveItem>,
}

impl ItemList {
    /// Wrap extracted items.
    pub fn new(items: Vec<ValveItem>) -> Self {
        Self { items }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<ValveItem>> for ItemList {
    fn from(items: Vec<ValveItem>) -> Self {
        Self::new(items)
    }
}
