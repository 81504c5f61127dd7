//! Extraction options and configuration.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::header::Role;

/// Options for extracting valve items from a document.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Keyword tables used for table acceptance and header resolution
    pub keywords: Keywords,

    /// Minimum number of non-empty rows for a candidate table
    pub min_rows: usize,

    /// Minimum number of cells in the first non-empty row
    pub min_columns: usize,

    /// Number of leading non-empty rows searched for keyword families
    pub candidate_window: usize,

    /// Number of leading non-empty rows searched for the header row
    pub header_scan_rows: usize,

    /// Whether a column may serve more than one role
    pub column_claim: ColumnClaim,

    /// Whether to process pages in parallel
    pub parallel: bool,

    /// Page selection (which pages to extract from)
    pub pages: PageSelection,

    /// Record every table and row rejection
    pub collect_diagnostics: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the keyword tables.
    pub fn with_keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the minimum row and column counts for candidate tables.
    pub fn with_min_size(mut self, rows: usize, columns: usize) -> Self {
        self.min_rows = rows;
        self.min_columns = columns;
        self
    }

    /// Set the header scan depth.
    pub fn with_header_scan_rows(mut self, rows: usize) -> Self {
        self.header_scan_rows = rows;
        self
    }

    /// Set the column claim policy.
    pub fn with_column_claim(mut self, claim: ColumnClaim) -> Self {
        self.column_claim = claim;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Enable or disable diagnostics collection.
    pub fn with_diagnostics(mut self, collect: bool) -> Self {
        self.collect_diagnostics = collect;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            keywords: Keywords::default(),
            min_rows: 2,
            min_columns: 3,
            candidate_window: 3,
            header_scan_rows: 5,
            column_claim: ColumnClaim::Exclusive,
            parallel: true,
            pages: PageSelection::All,
            collect_diagnostics: false,
        }
    }
}

/// How header columns are shared between roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnClaim {
    /// A column claimed by an earlier role is skipped by later roles
    #[default]
    Exclusive,
    /// Every role scans every column independently
    Shared,
}

/// Lower-case keyword lists per semantic role.
///
/// Header cells are case-folded and matched by substring, so each entry
/// should be a lower-case fragment (`"колич"` matches `"Количество"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "Keywords::empty")]
pub struct Keywords {
    /// Ordinal column labels
    pub ordinal: Vec<String>,
    /// Item tag column labels
    pub item_id: Vec<String>,
    /// Nominal diameter column labels
    pub diameter: Vec<String>,
    /// Quantity column labels
    pub quantity: Vec<String>,
    /// Sheet column labels
    pub sheet: Vec<String>,
}

impl Keywords {
    /// Keyword list for a role.
    pub fn for_role(&self, role: Role) -> &[String] {
        match role {
            Role::Ordinal => &self.ordinal,
            Role::ItemId => &self.item_id,
            Role::Diameter => &self.diameter,
            Role::Quantity => &self.quantity,
            Role::Sheet => &self.sheet,
        }
    }

    fn for_role_mut(&mut self, role: Role) -> &mut Vec<String> {
        match role {
            Role::Ordinal => &mut self.ordinal,
            Role::ItemId => &mut self.item_id,
            Role::Diameter => &mut self.diameter,
            Role::Quantity => &mut self.quantity,
            Role::Sheet => &mut self.sheet,
        }
    }

    /// Check whether case-folded text contains any keyword of a role.
    pub fn matches(&self, role: Role, folded: &str) -> bool {
        self.for_role(role)
            .iter()
            .any(|k| !k.is_empty() && folded.contains(k.as_str()))
    }

    /// Append synonyms from `other`, skipping duplicates.
    pub fn extend(&mut self, other: &Keywords) {
        for role in Role::ALL {
            let list = self.for_role_mut(role);
            for keyword in other.for_role(role) {
                if !list.contains(keyword) {
                    list.push(keyword.clone());
                }
            }
        }
    }

    /// Lower-case and trim every entry, dropping empty ones.
    pub fn normalized(mut self) -> Self {
        for role in Role::ALL {
            let list = self.for_role_mut(role);
            *list = list
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
        }
        self
    }

    /// Parse keyword lists from JSON, e.g. `{"quantity": ["menge"]}`.
    ///
    /// Roles missing from the JSON are empty in the result; combine with
    /// [`Keywords::extend`] to add synonyms on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let keywords: Keywords = serde_json::from_str(json)
            .map_err(|e| Error::InvalidKeywords(e.to_string()))?;
        Ok(keywords.normalized())
    }

    /// Default keywords extended with the synonyms in `json`.
    pub fn default_with_json(json: &str) -> Result<Self> {
        let mut keywords = Self::builtin();
        keywords.extend(&Self::from_json(json)?);
        Ok(keywords)
    }

    /// Built-in English and Russian labels.
    pub fn builtin() -> Self {
        fn list(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            ordinal: list(&["ord", "№", "no."]),
            item_id: list(&["item", "позици"]),
            diameter: list(&["dn", "nominal", "номин"]),
            quantity: list(&["qty", "колич"]),
            sheet: list(&["sheet", "лист"]),
        }
    }

    fn empty() -> Self {
        Self {
            ordinal: Vec::new(),
            item_id: Vec::new(),
            diameter: Vec::new(),
            quantity: Vec::new(),
            sheet: Vec::new(),
        }
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Page selection for extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Extract from all pages
    #[default]
    All,
    /// Extract from a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Extract from specific pages (1-indexed)
    Pages(Vec<u32>),
    /// Extract from several ranges, sorted and non-overlapping
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        let invalid = || Error::InvalidPageRange(s.to_string());
        let bound = |text: &str| text.trim().parse::<u32>().map_err(|_| invalid());

        let mut ranges = Vec::new();
        for part in s.split(',') {
            let (start, end) = match part.split_once('-') {
                Some((start, end)) => (bound(start)?, bound(end)?),
                None => {
                    let page = bound(part)?;
                    (page, page)
                }
            };
            if start > end {
                return Err(invalid());
            }
            ranges.push(start..=end);
        }

        if let [range] = ranges.as_slice() {
            if range.start() != range.end() {
                return Ok(PageSelection::Range(range.clone()));
            }
        }

        if ranges.iter().all(|r| r.start() == r.end()) {
            let mut pages: Vec<u32> = ranges.iter().map(|r| *r.start()).collect();
            pages.sort_unstable();
            pages.dedup();
            return Ok(PageSelection::Pages(pages));
        }

        // Merge overlapping or adjacent ranges without expanding them
        ranges.sort_by_key(|r| *r.start());
        let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if *range.start() <= last.end().saturating_add(1) => {
                    let end = (*last.end()).max(*range.end());
                    *last = *last.start()..=end;
                }
                _ => merged.push(range),
            }
        }
        Ok(PageSelection::Ranges(merged))
    }
}
