//! # valvespec
//!
//! Valve specification extraction from engineering drawing tables.
//!
//! An upstream extractor decomposes each drawing page into tables of text
//! cells. This library finds the tables that list valves, locates their
//! header rows, maps columns to roles (ordinal, item tag, nominal diameter,
//! quantity, sheet) and emits one record per conforming data row.
//!
//! ## Quick Start
//!
//! ```no_run
//! use valvespec::{parse_file, render, ExtractOptions};
//!
//! fn main() -> valvespec::Result<()> {
//!     // Load a table dump
//!     let doc = parse_file("drawing.tables.json")?;
//!
//!     // Extract valve items
//!     let report = valvespec::extract_document(&doc, &ExtractOptions::default());
//!     let json = render::to_json(&report.items, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Candidate filtering**: size and keyword checks drop title blocks and notes
//! - **Header resolution**: English and Russian column labels, positional fallback
//! - **Strict row gates**: item tags and `DN` diameters must conform to their patterns
//! - **Parallel processing**: Uses Rayon for multi-page documents
//! - **Diagnostics**: optional per-table and per-row rejection reasons

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_table_dump, InputFormat};
pub use error::{Error, Result};
pub use model::{Document, ItemList, Page, RawCell, Table, TableRow, ValveItem};
pub use parser::{
    extract, extract_document, parse_quantity, ColumnClaim, Diagnostic, ExtractOptions, Keywords,
    PageSelection, RejectReason, RowRejection, TableRejection,
};
pub use render::{ExtractionReport, ExtractionStats, JsonFormat};

use std::io::Read;
use std::path::Path;

/// Load a table dump file and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to the JSON table dump
///
/// # Example
///
/// ```no_run
/// use valvespec::parse_file;
///
/// let doc = parse_file("drawing.tables.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("loading table dump {}", path.display());
    let data = std::fs::read(path)?;
    parse_bytes(&data)
}

/// Load a table dump from bytes.
///
/// Both the paged shape and the bare page group shape are accepted; a
/// leading UTF-8 byte order mark is ignored.
///
/// # Example
///
/// ```
/// use valvespec::parse_bytes;
///
/// let doc = parse_bytes(br#"[[[["Item", "DN", "Qty"]]], []]"#).unwrap();
/// assert_eq!(doc.page_count(), 2);
/// assert_eq!(doc.pages[1].number, 2);
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let data = detect::strip_bom(data);
    let format = detect_format_from_bytes(data)?;

    let doc: Document = serde_json::from_slice(data)?;
    if doc.is_empty() {
        log::warn!("{} has no pages", format);
    }
    log::debug!(
        "parsed {} with {} pages and {} tables",
        format,
        doc.page_count(),
        doc.table_count()
    );
    Ok(doc)
}

/// Load a table dump from a string.
pub fn parse_str(data: &str) -> Result<Document> {
    parse_bytes(data.as_bytes())
}

/// Load a table dump from a reader.
///
/// # Example
///
/// ```no_run
/// use valvespec::parse_reader;
///
/// let doc = parse_reader(std::io::stdin()).unwrap();
/// ```
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_bytes(&data)
}

/// Extract valve items from a table dump file with default options.
///
/// # Example
///
/// ```no_run
/// use valvespec::extract_file;
///
/// let items = extract_file("drawing.tables.json").unwrap();
/// println!("{} valves", items.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Vec<ValveItem>> {
    let doc = parse_file(path)?;
    Ok(extract_document(&doc, &ExtractOptions::default()).items)
}

/// Extract valve items from a table dump file and render them as JSON.
///
/// # Example
///
/// ```no_run
/// use valvespec::{to_json, JsonFormat};
///
/// let json = to_json("drawing.tables.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("valves.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let items = extract_file(path)?;
    render::to_json(&items, format)
}

/// Builder for extracting valve items.
///
/// # Example
///
/// ```no_run
/// use valvespec::{PageSelection, ValveExtractor};
///
/// let report = ValveExtractor::new()
///     .with_pages(PageSelection::Range(1..=4))
///     .with_diagnostics()
///     .sequential()
///     .extract_file("drawing.tables.json")?;
///
/// for diagnostic in &report.diagnostics {
///     eprintln!("{}", diagnostic);
/// }
/// # Ok::<(), valvespec::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValveExtractor {
    options: ExtractOptions,
}

impl ValveExtractor {
    /// Create a new extractor with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Create an extractor from existing options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.options = self.options.with_pages(pages);
        self
    }

    /// Replace the column keywords.
    pub fn with_keywords(mut self, keywords: Keywords) -> Self {
        self.options = self.options.with_keywords(keywords);
        self
    }

    /// Set how columns are claimed when one label matches several roles.
    pub fn with_column_claim(mut self, claim: ColumnClaim) -> Self {
        self.options = self.options.with_column_claim(claim);
        self
    }

    /// Collect rejection diagnostics.
    pub fn with_diagnostics(mut self) -> Self {
        self.options = self.options.with_diagnostics(true);
        self
    }

    /// Get the options this extractor runs with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract from an already loaded document.
    pub fn extract(&self, doc: &Document) -> ExtractionReport {
        extract_document(doc, &self.options)
    }

    /// Extract from page groups, numbering pages from 1.
    pub fn extract_pages(&self, pages: &[Vec<Table>]) -> ExtractionReport {
        self.extract(&Document::from_page_groups(pages.to_vec()))
    }

    /// Load a table dump file and extract from it.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<ExtractionReport> {
        let doc = parse_file(path)?;
        Ok(self.extract(&doc))
    }

    /// Load a table dump from bytes and extract from it.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<ExtractionReport> {
        let doc = parse_bytes(data)?;
        Ok(self.extract(&doc))
    }
}
