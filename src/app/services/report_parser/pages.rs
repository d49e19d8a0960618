//! Page segmentation for form-feed paginated report text
//!
//! Printed reports arrive as one text blob with a form-feed control character
//! between pages. Splitting never fails: a document with no form feed is a
//! single page, and a trailing empty page (the page-break artifact at end of
//! file) is dropped.

use crate::constants::PAGE_BREAK;

/// One printed page of a report
///
/// Pages are ephemeral: they borrow from the raw report text and are consumed
/// during parsing, never retained in the structured result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    /// Zero-based page index within the report
    pub index: usize,

    /// Raw page text between form feeds
    pub text: &'a str,
}

impl<'a> Page<'a> {
    /// Page lines with surrounding page whitespace intact
    ///
    /// Used by layouts where leading indentation on the first line is
    /// significant (the sales journal's category indentation).
    pub fn lines(&self) -> Vec<&'a str> {
        self.text.split('\n').collect()
    }

    /// Page lines after stripping leading/trailing page whitespace
    ///
    /// Most layouts address header lines by index from the first printed
    /// line, so the page is trimmed before splitting.
    pub fn trimmed_lines(&self) -> Vec<&'a str> {
        self.text.trim().split('\n').collect()
    }
}

/// Split raw report text into its ordered pages
pub fn split_pages(raw: &str) -> Vec<Page<'_>> {
    let mut segments: Vec<&str> = raw.split(PAGE_BREAK).collect();

    // A form feed at end of file leaves an empty trailing segment
    if segments.last() == Some(&"") {
        segments.pop();
    }

    segments
        .into_iter()
        .enumerate()
        .map(|(index, text)| Page { index, text })
        .collect()
}
