//! Table dump format detection.
//!
//! The upstream table extractor writes JSON in one of two shapes: an object
//! with a `pages` array, or a bare array of page groups. Detection only
//! looks at the first significant byte so bad input fails before a full
//! parse.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Shape of a table dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `{"pages": [{"number": 1, "tables": [...]}]}`
    Paged,
    /// `[[table, ...], ...]`
    PageGroups,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Paged => write!(f, "paged table dump"),
            InputFormat::PageGroups => write!(f, "page group table dump"),
        }
    }
}

pub(crate) const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Drop a leading UTF-8 byte order mark.
pub(crate) fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

/// Number of leading bytes read from files for detection.
const SNIFF_LEN: usize = 1024;

/// Detect the dump format from a file path.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    BufReader::new(file)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the dump format from bytes.
///
/// # Returns
/// * `Ok(InputFormat)` if the data starts like a table dump
/// * `Err(Error::InvalidInput)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    match strip_bom(data).iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Ok(InputFormat::Paged),
        Some(b'[') => Ok(InputFormat::PageGroups),
        Some(_) => Err(Error::InvalidInput(
            "expected a JSON object or array".to_string(),
        )),
        None => Err(Error::InvalidInput("empty input".to_string())),
    }
}

/// Check if bytes look like a table dump.
pub fn is_table_dump(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
