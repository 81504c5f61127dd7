//! Cell text normalization.

use unicode_normalization::UnicodeNormalization;

use crate::model::RawCell;

/// Invisible or decorative characters that table extractors leave behind.
const STRIPPED_CHARS: [char; 6] = [
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{2060}', // word joiner
    '\u{FEFF}', // byte order mark
    '\u{00AD}', // soft hyphen
];

/// Normalize a cell's text.
///
/// Applies NFC, drops invisible characters and the replacement character,
/// turns line breaks into spaces, collapses whitespace runs to a single
/// space and trims. Never fails.
///
/// # Example
///
/// ```
/// use valvespec::parser::normalize_cell;
///
/// assert_eq!(normalize_cell("  DN\n  100\t"), "DN 100");
/// assert_eq!(normalize_cell(""), "");
/// ```
pub fn normalize_cell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.nfc() {
        if STRIPPED_CHARS.contains(&c) || c == '\u{FFFD}' {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

/// Stringify and normalize a raw upstream cell. Absent cells become empty.
pub fn normalize_raw(cell: &RawCell) -> String {
    match cell {
        RawCell::Absent => String::new(),
        RawCell::Text(s) | RawCell::Number(s) => normalize_cell(s),
        RawCell::Bool(b) => b.to_string(),
    }
}
