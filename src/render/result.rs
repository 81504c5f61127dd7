//! Extraction report with statistics and diagnostics.

use serde::Serialize;

use crate::model::ValveItem;
use crate::parser::Diagnostic;

/// Result of extracting a document, including items and statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionReport {
    /// Extracted items in document order
    pub items: Vec<ValveItem>,

    /// Extraction statistics
    pub stats: ExtractionStats,

    /// Rejections, when diagnostics collection is enabled
    pub diagnostics: Vec<Diagnostic>,
}

impl ExtractionReport {
    /// Merge a later page's report into this one.
    pub fn merge(&mut self, other: ExtractionReport) {
        self.items.extend(other.items);
        self.stats.merge(&other.stats);
        self.diagnostics.extend(other.diagnostics);
    }
}

/// Statistics collected during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Number of pages processed
    pub page_count: u32,

    /// Number of tables seen
    pub table_count: u32,

    /// Number of tables that passed the candidate filter
    pub candidate_count: u32,

    /// Number of tables with a resolved header
    pub accepted_table_count: u32,

    /// Number of data rows examined
    pub row_count: u32,

    /// Number of items emitted
    pub item_count: u32,

    /// Number of data rows rejected
    pub rejected_row_count: u32,
}

impl ExtractionStats {
    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.page_count += other.page_count;
        self.table_count += other.table_count;
        self.candidate_count += other.candidate_count;
        self.accepted_table_count += other.accepted_table_count;
        self.row_count += other.row_count;
        self.item_count += other.item_count;
        self.rejected_row_count += other.rejected_row_count;
    }
}
