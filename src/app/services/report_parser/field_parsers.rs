//! Field extraction utilities and the value normalizer
//!
//! Two extraction strategies are used across the report layouts: indexing
//! into whitespace-split tokens, and slicing fixed byte-offset columns from
//! right-padded lines. Both funnel raw column text through one normalizer so
//! that sentinel tokens (runs of `!` or `*`, a lone `-`, blank) become
//! absent everywhere, never zero. Conversion failure also yields absent;
//! no extraction here ever raises.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{SENTINEL_DASH, is_sentinel_fill};

/// Pattern for a number immediately followed by a percent sign
static PERCENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+|\d+)\s*%").expect("percent pattern compiles"));

/// Normalize raw column text, mapping sentinel tokens to absent
pub fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == SENTINEL_DASH || is_sentinel_fill(trimmed) {
        None
    } else {
        Some(trimmed)
    }
}

/// Convert raw column text to a float, absent on sentinel or failure
pub fn parse_float(raw: &str) -> Option<f64> {
    normalize(raw).and_then(|value| value.replace(',', "").parse().ok())
}

/// Convert raw column text to an integer, absent on sentinel or failure
pub fn parse_int(raw: &str) -> Option<i64> {
    normalize(raw).and_then(|value| value.replace(',', "").parse().ok())
}

// =============================================================================
// Tokenized Extraction
// =============================================================================

/// Fetch a float from a token position, absent when out of range
pub fn token_float(tokens: &[&str], index: usize) -> Option<f64> {
    tokens.get(index).copied().and_then(parse_float)
}

/// Fetch an integer from a token position, absent when out of range
pub fn token_int(tokens: &[&str], index: usize) -> Option<i64> {
    tokens.get(index).copied().and_then(parse_int)
}

// =============================================================================
// Fixed-Offset Extraction
// =============================================================================

/// Right-pad a line with spaces to at least `width` bytes
///
/// Padding up front means every subsequent column slice stays in range on
/// short lines.
pub fn pad_line(line: &str, width: usize) -> Cow<'_, str> {
    if line.len() >= width {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(format!("{line:<width$}"))
    }
}

/// Slice a fixed column from a line, tolerating short lines
///
/// `end = None` reads to the end of the line (the final, open-ended column).
/// A start past the end of the line yields an empty slice.
pub fn slice_column(line: &str, start: usize, end: Option<usize>) -> &str {
    let len = line.len();
    if start >= len {
        return "";
    }
    let end = end.map_or(len, |e| e.min(len));
    line.get(start..end).unwrap_or("")
}

/// Fetch a float from a fixed column
pub fn column_float(line: &str, start: usize, end: Option<usize>) -> Option<f64> {
    parse_float(slice_column(line, start, end))
}

/// Fetch an integer from a fixed column
pub fn column_int(line: &str, start: usize, end: Option<usize>) -> Option<i64> {
    parse_int(slice_column(line, start, end))
}

// =============================================================================
// Percentage Extraction
// =============================================================================

/// Extract a percentage from text: a number followed by `%`, or failing
/// that the whole trimmed text parsed as a bare number
pub fn percentage_from_str(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(captures) = PERCENT_PATTERN.captures(trimmed) {
        return captures[1].parse().ok();
    }

    let cleaned = trimmed.replace('%', "");
    let cleaned = cleaned.trim();
    if cleaned.chars().any(|c| c.is_ascii_digit()) {
        cleaned.parse().ok()
    } else {
        None
    }
}

/// Fetch a percentage from a fixed column
pub fn column_percentage(line: &str, start: usize, end: Option<usize>) -> Option<f64> {
    percentage_from_str(slice_column(line, start, end))
}
