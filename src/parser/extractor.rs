//! Document-level aggregation.
//!
//! Pages are independent, so they are interpreted in parallel with rayon.
//! Per-page reports are collected by page position and merged in page
//! order, giving the same output as a sequential run.

use rayon::prelude::*;

use crate::model::{Document, Page, Table, ValveItem};
use crate::render::{ExtractionReport, ExtractionStats};

use super::candidate::is_candidate;
use super::header::{find_header_row, resolve_roles};
use super::options::ExtractOptions;
use super::outcome::{Diagnostic, RejectReason, RowOutcome, TableRejection};
use super::row::extract_row;

/// Interpret a single table.
///
/// Returns every data row below the header with its index in the table
/// and its outcome, or the reason the whole table was rejected.
pub fn interpret_table(
    table: &Table,
    page: u32,
    options: &ExtractOptions,
) -> Result<Vec<(usize, RowOutcome)>, TableRejection> {
    is_candidate(table, options)?;

    let header_index = find_header_row(table, options).ok_or(TableRejection::NoHeader)?;
    let header = resolve_roles(
        &table.rows[header_index],
        &options.keywords,
        options.column_claim,
    );
    if !header.has_identity() {
        return Err(TableRejection::NoRoleColumns);
    }
    log::debug!("page {}: header at row {} -> {:?}", page, header_index, header);

    Ok(table
        .rows
        .iter()
        .enumerate()
        .skip(header_index + 1)
        .map(|(index, row)| (index, extract_row(row, &header, page)))
        .collect())
}

/// Extract items from one page.
pub fn extract_page(page: &Page, options: &ExtractOptions) -> ExtractionReport {
    let mut report = ExtractionReport {
        stats: ExtractionStats {
            page_count: 1,
            ..Default::default()
        },
        ..Default::default()
    };

    for (table_index, table) in page.tables.iter().enumerate() {
        report.stats.table_count += 1;

        let rows = match interpret_table(table, page.number, options) {
            Ok(rows) => rows,
            Err(rejection) => {
                if !matches!(
                    rejection,
                    TableRejection::TooFewRows(_)
                        | TableRejection::TooFewColumns(_)
                        | TableRejection::MissingKeywords(_)
                ) {
                    report.stats.candidate_count += 1;
                }
                reject(&mut report, options, page.number, table_index, None, rejection.into());
                continue;
            }
        };

        report.stats.candidate_count += 1;
        report.stats.accepted_table_count += 1;

        for (row_index, outcome) in rows {
            report.stats.row_count += 1;
            match outcome {
                RowOutcome::Accepted(item) => {
                    report.stats.item_count += 1;
                    report.items.push(item);
                }
                RowOutcome::Rejected(rejection) => {
                    report.stats.rejected_row_count += 1;
                    reject(
                        &mut report,
                        options,
                        page.number,
                        table_index,
                        Some(row_index),
                        rejection.into(),
                    );
                }
            }
        }
    }

    report
}

fn reject(
    report: &mut ExtractionReport,
    options: &ExtractOptions,
    page: u32,
    table: usize,
    row: Option<usize>,
    reason: RejectReason,
) {
    log::debug!(
        "page {} table {} row {:?}: rejected ({})",
        page,
        table,
        row,
        reason
    );
    if options.collect_diagnostics {
        report.diagnostics.push(Diagnostic {
            page,
            table,
            row,
            reason,
        });
    }
}

/// Extract items from a document.
///
/// Pages outside `options.pages` are skipped. The output is ordered by page
/// number, then by table order on the page, then by row order.
pub fn extract_document(doc: &Document, options: &ExtractOptions) -> ExtractionReport {
    let selected: Vec<&Page> = doc
        .pages
        .iter()
        .filter(|page| options.pages.includes(page.number))
        .collect();

    let mut pages: Vec<(u32, ExtractionReport)> = if options.parallel {
        selected
            .par_iter()
            .map(|page| (page.number, extract_page(page, options)))
            .collect()
    } else {
        selected
            .iter()
            .map(|page| (page.number, extract_page(page, options)))
            .collect()
    };

    // Stable: pages sharing a number keep their input order
    pages.sort_by_key(|(number, _)| *number);

    let mut report = ExtractionReport::default();
    for (_, page_report) in pages {
        report.merge(page_report);
    }

    log::debug!(
        "extracted {} items from {} tables on {} pages",
        report.stats.item_count,
        report.stats.table_count,
        report.stats.page_count
    );

    report
}

/// Extract items from page groups, numbering pages from 1.
///
/// # Example
///
/// ```
/// use valvespec::{extract, Table};
///
/// let table = Table::from_strings(vec![
///     vec!["Ord", "Item", "DN", "Qty"],
///     vec!["1", "040-BFV-2982", "DN100", "2"],
/// ]);
/// let items = extract(&[vec![table]]);
///
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].dn, "DN100");
/// ```
pub fn extract(pages: &[Vec<Table>]) -> Vec<ValveItem> {
    let doc = Document::from_page_groups(pages.to_vec());
    extract_document(&doc, &ExtractOptions::default()).items
}
