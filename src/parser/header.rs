//! Header row detection and column role resolution.
//!
//! Column labels differ between drawing offices and languages, so each
//! semantic role is recognized by an ordered list of case-folded label
//! fragments (see [`Keywords`]). Resolution is a pure function of the
//! header row; row extraction only ever sees the resulting [`HeaderMap`].

use crate::model::{Table, TableRow};

use super::options::{ColumnClaim, ExtractOptions, Keywords};

/// Semantic meaning of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Line number within the table
    Ordinal,
    /// Equipment tag
    ItemId,
    /// Nominal diameter
    Diameter,
    /// Quantity
    Quantity,
    /// Drawing sheet
    Sheet,
}

impl Role {
    /// All roles in canonical column order.
    pub const ALL: [Role; 5] = [
        Role::Ordinal,
        Role::ItemId,
        Role::Diameter,
        Role::Quantity,
        Role::Sheet,
    ];

    /// Order in which roles claim columns. Identity roles go first; ordinal
    /// labels ("no.") are generic enough to appear inside an item label.
    pub const RESOLUTION_ORDER: [Role; 5] = [
        Role::ItemId,
        Role::Diameter,
        Role::Quantity,
        Role::Sheet,
        Role::Ordinal,
    ];

    /// Column used when no label matches (Ordinal | Item | DN | Qty | Sheet).
    pub fn fallback_index(self) -> Option<usize> {
        match self {
            Role::ItemId => Some(1),
            Role::Diameter => Some(2),
            Role::Quantity => Some(3),
            Role::Ordinal | Role::Sheet => None,
        }
    }
}

/// Column index per role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderMap {
    /// Ordinal column
    pub ordinal: Option<usize>,
    /// Item tag column
    pub item_id: Option<usize>,
    /// Nominal diameter column
    pub diameter: Option<usize>,
    /// Quantity column
    pub quantity: Option<usize>,
    /// Sheet column
    pub sheet: Option<usize>,
}

impl HeaderMap {
    /// Column for a role.
    pub fn get(&self, role: Role) -> Option<usize> {
        match role {
            Role::Ordinal => self.ordinal,
            Role::ItemId => self.item_id,
            Role::Diameter => self.diameter,
            Role::Quantity => self.quantity,
            Role::Sheet => self.sheet,
        }
    }

    fn set(&mut self, role: Role, index: Option<usize>) {
        let slot = match role {
            Role::Ordinal => &mut self.ordinal,
            Role::ItemId => &mut self.item_id,
            Role::Diameter => &mut self.diameter,
            Role::Quantity => &mut self.quantity,
            Role::Sheet => &mut self.sheet,
        };
        *slot = index;
    }

    /// Check whether any role already uses a column.
    pub fn is_claimed(&self, index: usize) -> bool {
        Role::ALL.iter().any(|&role| self.get(role) == Some(index))
    }

    /// Rightmost resolved column.
    pub fn max_index(&self) -> Option<usize> {
        Role::ALL.iter().filter_map(|&role| self.get(role)).max()
    }

    /// Both identity columns (item and diameter) are resolved.
    pub fn has_identity(&self) -> bool {
        self.item_id.is_some() && self.diameter.is_some()
    }
}

/// Find the header row: the first of the leading non-empty rows that
/// carries both a quantity and a diameter label.
///
/// Returns the row's index in `table.rows`.
pub fn find_header_row(table: &Table, options: &ExtractOptions) -> Option<usize> {
    table
        .non_empty_rows()
        .take(options.header_scan_rows)
        .find(|(_, row)| {
            let folded = row.folded_text();
            options.keywords.matches(Role::Quantity, &folded)
                && options.keywords.matches(Role::Diameter, &folded)
        })
        .map(|(index, _)| index)
}

/// Map header columns to roles.
///
/// Each role takes the leftmost column whose label contains one of its
/// keywords. Item, diameter and quantity fall back to their canonical
/// positions when unlabeled and the header is wide enough.
pub fn resolve_roles(header: &TableRow, keywords: &Keywords, claim: ColumnClaim) -> HeaderMap {
    let folded: Vec<String> = header.cells.iter().map(|c| c.to_lowercase()).collect();
    let mut map = HeaderMap::default();
    let available =
        |map: &HeaderMap, index: usize| claim == ColumnClaim::Shared || !map.is_claimed(index);

    for role in Role::RESOLUTION_ORDER {
        let found = folded
            .iter()
            .enumerate()
            .find(|(index, label)| available(&map, *index) && keywords.matches(role, label))
            .map(|(index, _)| index);
        map.set(role, found);
    }

    for role in Role::RESOLUTION_ORDER {
        if map.get(role).is_some() {
            continue;
        }
        if let Some(index) = role.fallback_index() {
            if index < header.len() && available(&map, index) {
                map.set(role, Some(index));
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(labels: &[&str]) -> HeaderMap {
        resolve_roles(
            &TableRow::from_strings(labels.iter().copied()),
            &Keywords::default(),
            ColumnClaim::Exclusive,
        )
    }

    #[test]
    fn test_canonical_header() {
        let map = resolve(&["Ord", "Item", "DN", "Qty", "Sheet"]);
        assert_eq!(map.ordinal, Some(0));
        assert_eq!(map.item_id, Some(1));
        assert_eq!(map.diameter, Some(2));
        assert_eq!(map.quantity, Some(3));
        assert_eq!(map.sheet, Some(4));
    }

    #[test]
    fn test_russian_header_out_of_order() {
        let map = resolve(&["Лист", "№ п/п", "Количество", "Позиция", "Номинальный диаметр"]);
        assert_eq!(map.sheet, Some(0));
        assert_eq!(map.ordinal, Some(1));
        assert_eq!(map.quantity, Some(2));
        assert_eq!(map.item_id, Some(3));
        assert_eq!(map.diameter, Some(4));
    }

    #[test]
    fn test_positional_fallback() {
        let map = resolve(&["#", "Tag", "Size", "Count"]);
        assert_eq!(map.ordinal, None);
        assert_eq!(map.item_id, Some(1));
        assert_eq!(map.diameter, Some(2));
        assert_eq!(map.quantity, Some(3));
        assert_eq!(map.sheet, None);
    }

    #[test]
    fn test_fallback_requires_width() {
        let map = resolve(&["#", "Tag", "Size"]);
        assert_eq!(map.item_id, Some(1));
        assert_eq!(map.diameter, Some(2));
        assert_eq!(map.quantity, None);
    }

    #[test]
    fn test_leftmost_label_wins() {
        let map = resolve(&["Qty", "Item", "DN", "Qty (spare)"]);
        assert_eq!(map.quantity, Some(0));
    }

    #[test]
    fn test_exclusive_claim_keeps_item_column_from_ordinal() {
        let map = resolve(&["Pos", "Item No.", "DN", "Qty"]);
        assert_eq!(map.item_id, Some(1));
        assert_eq!(map.ordinal, None);
    }

    #[test]
    fn test_identity_roles_claim_before_ordinal() {
        // "no." matches both labels; the item role must keep column 1
        let map = resolve(&["No.", "Item No.", "DN", "Qty"]);
        assert_eq!(map.item_id, Some(1));
        assert_eq!(map.ordinal, Some(0));
        assert_eq!(map.diameter, Some(2));
        assert_eq!(map.quantity, Some(3));
        assert!(map.has_identity());
    }

    #[test]
    fn test_shared_claim_allows_double_use() {
        let map = resolve_roles(
            &TableRow::from_strings(["Pos", "Item No.", "DN", "Qty"]),
            &Keywords::default(),
            ColumnClaim::Shared,
        );
        assert_eq!(map.item_id, Some(1));
        assert_eq!(map.ordinal, Some(1));
    }

    #[test]
    fn test_fallback_skips_claimed_column() {
        // "Qty" sits where the diameter fallback would point
        let map = resolve(&["Tag", "Item", "Qty"]);
        assert_eq!(map.item_id, Some(1));
        assert_eq!(map.quantity, Some(2));
        assert_eq!(map.diameter, None);
        assert!(!map.has_identity());
    }

    #[test]
    fn test_find_header_row_skips_empty_rows() {
        let table = Table::from_strings(vec![
            vec!["", "", ""],
            vec!["VALVE LIST", "", ""],
            vec!["Item", "DN", "Qty"],
            vec!["040-BFV-2982", "DN100", "1"],
        ]);
        assert_eq!(find_header_row(&table, &ExtractOptions::default()), Some(2));
    }

    #[test]
    fn test_find_header_row_limited_to_scan_window() {
        let mut rows = vec![vec!["note", "", ""]; 5];
        rows.push(vec!["Item", "DN", "Qty"]);
        let table = Table::from_strings(rows);
        assert_eq!(find_header_row(&table, &ExtractOptions::default()), None);
    }

    #[test]
    fn test_header_needs_quantity_and_diameter_in_same_row() {
        let table = Table::from_strings(vec![
            vec!["Item", "DN", ""],
            vec!["", "", "Qty"],
        ]);
        assert_eq!(find_header_row(&table, &ExtractOptions::default()), None);
    }

    #[test]
    fn test_max_index() {
        let map = resolve(&["Ord", "Item", "DN", "Qty", "Sheet"]);
        assert_eq!(map.max_index(), Some(4));
        assert!(map.has_identity());
        assert_eq!(HeaderMap::default().max_index(), None);
    }
}
