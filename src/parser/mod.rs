//! Table interpretation pipeline.
//!
//! Stages, applied per table: cell normalization ([`normalize_cell`]),
//! candidate filtering ([`is_candidate`]), header resolution
//! ([`find_header_row`], [`resolve_roles`]) and row extraction
//! ([`extract_row`]). [`extract_document`] runs them over every page.

mod candidate;
mod extractor;
mod header;
mod normalize;
mod options;
mod outcome;
mod quantity;
mod row;

pub use candidate::{filter_candidates, is_candidate};
pub use extractor::{extract, extract_document, extract_page, interpret_table};
pub use header::{find_header_row, resolve_roles, HeaderMap, Role};
pub use normalize::{normalize_cell, normalize_raw};
pub use options::{ColumnClaim, ExtractOptions, Keywords, PageSelection};
pub use outcome::{
    Diagnostic, KeywordFamily, RejectReason, RowOutcome, RowRejection, TableRejection,
};
pub use quantity::parse_quantity;
pub use row::{extract_row, find_diameter, find_tag};
