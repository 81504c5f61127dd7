//! Rendering module for extraction results.

mod json;
mod result;

pub use json::{report_to_json, to_json, JsonFormat};
pub use result::{ExtractionReport, ExtractionStats};
