//! Table candidate filter.
//!
//! Drawings carry many tables (title block, revision history, notes). A
//! valve specification table is recognized by its size and by labels for
//! quantity, diameter and item somewhere in its leading rows.

use crate::model::Table;

use super::header::Role;
use super::options::ExtractOptions;
use super::outcome::{KeywordFamily, TableRejection};

/// Decide whether a table can be a valve specification table.
pub fn is_candidate(table: &Table, options: &ExtractOptions) -> Result<(), TableRejection> {
    let non_empty: Vec<_> = table.non_empty_rows().map(|(_, row)| row).collect();

    if non_empty.len() < options.min_rows {
        return Err(TableRejection::TooFewRows(non_empty.len()));
    }

    let columns = non_empty.first().map(|row| row.len()).unwrap_or(0);
    if columns < options.min_columns {
        return Err(TableRejection::TooFewColumns(columns));
    }

    let window = non_empty
        .iter()
        .take(options.candidate_window)
        .map(|row| row.folded_text())
        .collect::<Vec<_>>()
        .join(" ");

    let families = [
        (KeywordFamily::Quantity, Role::Quantity),
        (KeywordFamily::Diameter, Role::Diameter),
        (KeywordFamily::Item, Role::ItemId),
    ];
    for (family, role) in families {
        if !options.keywords.matches(role, &window) {
            return Err(TableRejection::MissingKeywords(family));
        }
    }

    Ok(())
}

/// Keep only candidate tables, in their original order.
pub fn filter_candidates<'a>(tables: &'a [Table], options: &ExtractOptions) -> Vec<&'a Table> {
    tables
        .iter()
        .filter(|table| is_candidate(table, options).is_ok())
        .collect()
}
