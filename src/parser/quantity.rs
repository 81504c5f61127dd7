//! Numeric token extraction shared by quantity, ordinal and sheet cells.

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Parse the number in a cell.
///
/// A cell made only of digits parses directly; otherwise the first run of
/// digits is used, so `"1 pcs."` and `"1 шт."` both give 1. Returns `None`
/// when there is no digit run or the run does not fit in a `u32`.
///
/// # Example
///
/// ```
/// use valvespec::parser::parse_quantity;
///
/// assert_eq!(parse_quantity("12"), Some(12));
/// assert_eq!(parse_quantity("1 pcs."), Some(1));
/// assert_eq!(parse_quantity("qty"), None);
/// ```
pub fn parse_quantity(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.parse().ok();
    }

    DIGIT_RUN
        .find(trimmed)
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_digits() {
        assert_eq!(parse_quantity("12"), Some(12));
        assert_eq!(parse_quantity(" 007 "), Some(7));
    }

    #[test]
    fn test_suffixed_units() {
        assert_eq!(parse_quantity("1 pcs."), Some(1));
        assert_eq!(parse_quantity("4 шт."), Some(4));
        assert_eq!(parse_quantity("x2, 3"), Some(2));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_quantity("qty"), None);
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("-"), None);
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(parse_quantity("99999999999"), None);
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        // Arabic-Indic digits are not treated as numbers
        assert_eq!(parse_quantity("\u{0663}"), None);
    }
}
