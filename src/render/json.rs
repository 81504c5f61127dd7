//! JSON rendering for extracted items.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{ItemList, ValveItem};

use super::ExtractionReport;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Render items as `{"items": [...]}`.
pub fn to_json(items: &[ValveItem], format: JsonFormat) -> Result<String> {
    serialize(&ItemList::new(items.to_vec()), format)
}

/// Render a full report (items, stats and diagnostics).
pub fn report_to_json(report: &ExtractionReport, format: JsonFormat) -> Result<String> {
    serialize(report, format)
}
