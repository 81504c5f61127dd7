//! Document-level types.

use super::{Page, Table};
use serde::{Deserialize, Serialize};

/// A document decomposed into per-page tables.
///
/// Deserializes from either a paged dump
/// (`{"pages": [{"number": 1, "tables": [...]}]}`, where `number` may be
/// omitted) or a bare array of page groups (`[[table, ...], ...]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentRepr")]
pub struct Document {
    /// Pages in document order
    pub pages: Vec<Page>,
}

impl Document {
    /// Build a document from page groups, numbering pages from 1.
    pub fn from_page_groups(groups: Vec<Vec<Table>>) -> Self {
        Self {
            pages: groups
                .into_iter()
                .enumerate()
                .map(|(i, tables)| Page::with_tables(i as u32 + 1, tables))
                .collect(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get the total number of tables across all pages.
    pub fn table_count(&self) -> usize {
        self.pages.iter().map(Page::table_count).sum()
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        self.pages.iter().find(|p| p.number == page_num)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentRepr {
    Groups(Vec<Vec<Table>>),
    Paged { pages: Vec<PageRepr> },
}

#[derive(Deserialize)]
struct PageRepr {
    #[serde(default)]
    number: Option<u32>,
    #[serde(default)]
    tables: Vec<Table>,
}

impl From<DocumentRepr> for Document {
    fn from(repr: DocumentRepr) -> Self {
        match repr {
            DocumentRepr::Paged { pages } => Self {
                pages: pages
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| {
                        let position = i as u32 + 1;
                        let number = match p.number {
                            Some(0) => {
                                log::warn!("page {} has number 0, using its position", position);
                                position
                            }
                            Some(n) => n,
                            None => position,
                        };
                        Page::with_tables(number, p.tables)
                    })
                    .collect(),
            },
            DocumentRepr::Groups(groups) => Self::from_page_groups(groups),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page_groups_numbers_pages() {
        let doc = Document::from_page_groups(vec![vec![], vec![Table::default()]]);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[1].number, 2);
        assert_eq!(doc.table_count(), 1);
    }

    #[test]
    fn test_deserialize_paged() {
        let doc: Document = serde_json::from_str(
            r#"{"pages": [{"number": 3, "tables": [[["a", "b"]]]}, {"tables": []}]}"#,
        )
        .unwrap();

        assert_eq!(doc.pages[0].number, 3);
        assert_eq!(doc.pages[1].number, 2);
        assert_eq!(doc.pages[0].tables[0].rows[0].cells, vec!["a", "b"]);
    }

    #[test]
    fn test_deserialize_groups() {
        let doc: Document = serde_json::from_str(r#"[[[["x", null]]], []]"#).unwrap();

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[0].tables[0].rows[0].cells, vec!["x", ""]);
        assert!(doc.get_page(2).unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_page_zero_uses_position() {
        let doc: Document =
            serde_json::from_str(r#"{"pages": [{"tables": []}, {"number": 0}]}"#).unwrap();

        assert_eq!(doc.pages[1].number, 2);
    }
}
