//! Data row extraction.
//!
//! A row is a valve line only when its item cell contains an equipment tag
//! and its diameter cell contains a DN value. Everything else in a
//! specification table (section titles, notes, spacer rows) fails this
//! identity gate and is rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{TableRow, ValveItem};

use super::header::HeaderMap;
use super::outcome::{RowOutcome, RowRejection};
use super::quantity::parse_quantity;

/// Equipment tag: 3 digits, 2-4 uppercase letters, 3-5 digits.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{3}-[A-Z]{2,4}-[0-9]{3,5}").expect("tag pattern is valid")
});

/// Nominal diameter: "DN" and digits, optionally space separated.
static DN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)DN\s*[0-9]+").expect("DN pattern is valid"));

/// First equipment tag in a cell.
///
/// ```
/// use valvespec::parser::find_tag;
///
/// assert_eq!(find_tag("TEST-040-BFV-2987"), Some("040-BFV-2987".to_string()));
/// assert_eq!(find_tag("see note 3"), None);
/// ```
pub fn find_tag(text: &str) -> Option<String> {
    TAG_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// First DN value in a cell, upper-cased with whitespace removed.
///
/// ```
/// use valvespec::parser::find_diameter;
///
/// assert_eq!(find_diameter("dn 100"), Some("DN100".to_string()));
/// ```
pub fn find_diameter(text: &str) -> Option<String> {
    DN_PATTERN.find(text).map(|m| {
        m.as_str()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase()
    })
}

/// Interpret one data row against a resolved header.
pub fn extract_row(row: &TableRow, header: &HeaderMap, page: u32) -> RowOutcome {
    if row.is_empty() {
        return RowOutcome::Rejected(RowRejection::Blank);
    }

    if let Some(max) = header.max_index() {
        if row.len() <= max {
            return RowOutcome::Rejected(RowRejection::TooShort {
                len: row.len(),
                required: max + 1,
            });
        }
    }

    let cell = |index: Option<usize>| index.and_then(|i| row.cell(i));

    let Some(item_id) = cell(header.item_id).and_then(find_tag) else {
        return RowOutcome::Rejected(RowRejection::MissingItemId);
    };
    let Some(dn) = cell(header.diameter).and_then(find_diameter) else {
        return RowOutcome::Rejected(RowRejection::MissingDiameter);
    };

    let number = |index: Option<usize>| {
        cell(index)
            .filter(|text| !text.is_empty())
            .and_then(parse_quantity)
    };

    RowOutcome::Accepted(ValveItem {
        ord_no: number(header.ordinal),
        item_id,
        dn,
        qty: number(header.quantity),
        sheet: number(header.sheet).unwrap_or(page),
        page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical() -> HeaderMap {
        HeaderMap {
            ordinal: Some(0),
            item_id: Some(1),
            diameter: Some(2),
            quantity: Some(3),
            sheet: None,
        }
    }

    fn with_sheet() -> HeaderMap {
        HeaderMap {
            sheet: Some(4),
            ..canonical()
        }
    }

    #[test]
    fn test_accepts_valve_line() {
        let row = TableRow::from_strings(["1", "040-BFV-2982", "DN100", "2"]);
        let outcome = extract_row(&row, &canonical(), 1);

        assert_eq!(
            outcome,
            RowOutcome::Accepted(ValveItem {
                ord_no: Some(1),
                item_id: "040-BFV-2982".to_string(),
                dn: "DN100".to_string(),
                qty: Some(2),
                sheet: 1,
                page: 1,
            })
        );
    }

    #[test]
    fn test_note_row_rejected() {
        let row = TableRow::from_strings(["1", "NOTE: see drawing", "-", "-"]);
        assert_eq!(
            extract_row(&row, &canonical(), 1),
            RowOutcome::Rejected(RowRejection::MissingItemId)
        );
    }

    #[test]
    fn test_missing_diameter_rejected() {
        let row = TableRow::from_strings(["1", "040-BFV-2982", "100 mm", "2"]);
        assert_eq!(
            extract_row(&row, &canonical(), 1),
            RowOutcome::Rejected(RowRejection::MissingDiameter)
        );
    }

    #[test]
    fn test_blank_row_rejected() {
        let row = TableRow::from_strings(["", " ", "", ""]);
        assert_eq!(
            extract_row(&row, &canonical(), 1),
            RowOutcome::Rejected(RowRejection::Blank)
        );
    }

    #[test]
    fn test_short_row_rejected() {
        let row = TableRow::from_strings(["1", "040-BFV-2982", "DN100", "2"]);
        assert_eq!(
            extract_row(&row, &with_sheet(), 1),
            RowOutcome::Rejected(RowRejection::TooShort {
                len: 4,
                required: 5
            })
        );
    }

    #[test]
    fn test_tag_and_dn_taken_from_inside_cells() {
        let row = TableRow::from_strings(["", "TEST-040-BFV-2987 (new)", "Ду dn  80 PN16", "1 pcs."]);
        let item = extract_row(&row, &canonical(), 2).item().unwrap();

        assert_eq!(item.item_id, "040-BFV-2987");
        assert_eq!(item.dn, "DN80");
        assert_eq!(item.qty, Some(1));
        assert_eq!(item.ord_no, None);
    }

    #[test]
    fn test_lowercase_tag_letters_do_not_match() {
        assert_eq!(find_tag("040-bfv-2982"), None);
        assert_eq!(find_tag("040-ABCDE-2982"), None);
        assert_eq!(find_tag("040-BF-29"), None);
    }

    #[test]
    fn test_unparseable_quantity_is_none() {
        let row = TableRow::from_strings(["a", "040-BFV-2982", "DN100", "see notes"]);
        let item = extract_row(&row, &canonical(), 1).item().unwrap();

        assert_eq!(item.qty, None);
        assert_eq!(item.ord_no, None);
    }

    #[test]
    fn test_sheet_parsed_from_column() {
        let row = TableRow::from_strings(["1", "040-BFV-2982", "DN100", "2", "Sheet 7"]);
        let item = extract_row(&row, &with_sheet(), 3).item().unwrap();
        assert_eq!(item.sheet, 7);
        assert_eq!(item.page, 3);
    }

    #[test]
    fn test_empty_sheet_falls_back_to_page() {
        let row = TableRow::from_strings(["1", "040-BFV-2982", "DN100", "2", ""]);
        let item = extract_row(&row, &with_sheet(), 3).item().unwrap();
        assert_eq!(item.sheet, 3);
    }

    #[test]
    fn test_unresolved_optional_roles() {
        let header = HeaderMap {
            item_id: Some(0),
            diameter: Some(1),
            ..HeaderMap::default()
        };
        let row = TableRow::from_strings(["040-BFV-2982", "DN 50"]);
        let item = extract_row(&row, &header, 5).item().unwrap();

        assert_eq!(item.dn, "DN50");
        assert_eq!(item.qty, None);
        assert_eq!(item.ord_no, None);
        assert_eq!(item.sheet, 5);
    }
}
