//! Application constants for the POS report parser
//!
//! This module contains the literal markers, sentinel tokens, and shared
//! layout values used across the report parsers. Column-offset tables are
//! report-type-specific contracts and live in their layout modules; only
//! values shared by more than one parser belong here.

// =============================================================================
// Pagination and Header Markers
// =============================================================================

/// Form feed control character separating printed pages
pub const PAGE_BREAK: char = '\u{c}';

/// Delimiter between store id and store name on the second header line
pub const STORE_INFO_DELIMITER: &str = " - ";

/// Accounting day marker within the second header line
pub const ACCOUNTING_DAY_MARKER: &str = "Accounting Day";

/// Accounting day delimiter, including the trailing dash
pub const ACCOUNTING_DAY_DELIMITER: &str = "Accounting Day - ";

/// Page number marker within page header lines
pub const PAGE_MARKER: &str = "Page";

/// Footer banner printed on the final page
pub const END_OF_REPORT_MARKER: &str = "End of Report";

/// Number of leading lines scanned per page for data-kind header tokens
pub const DATA_KIND_SCAN_LINES: usize = 10;

// =============================================================================
// Sentinel Tokens
// =============================================================================

/// Sentinel characters printed as a run when a value is intentionally omitted
pub const SENTINEL_FILL_CHARS: &[char] = &['!', '*'];

/// A lone dash marks an intentionally blank numeric column
pub const SENTINEL_DASH: &str = "-";

// =============================================================================
// Identity Keys
// =============================================================================

/// Maximum length of an alphanumeric employee/salesrep identity key
pub const IDENTITY_KEY_MAX_LEN: usize = 6;

// =============================================================================
// Column Header Signatures
// =============================================================================

/// Header token signatures distinguishing the two data-line layouts.
///
/// Signatures are matched against a header line with all spaces removed,
/// since column spacing varies between report revisions.
pub mod data_kind_signatures {
    /// Invoice/line-count layout ("# Inv  Lines  Vd  Ret ..." headers)
    pub const INVOICE: &str = "InvLinesVdRet";

    /// Sales-metric layout ("Net  Gross  Net ..." headers)
    pub const SALES: &str = "NetGrossNet";
}

// =============================================================================
// Transaction Types
// =============================================================================

/// Transaction-type tags that open a transaction register data line
pub const TRANSACTION_TYPES: &[&str] = &["CASH", "CHG", "CR MEM", "ROA", "REFUND"];

/// Credit memo tag; its financial figures are coerced negative
pub const CREDIT_MEMO_TYPE: &str = "CR MEM";

// =============================================================================
// Helper Predicates
// =============================================================================

/// Check whether a trimmed token is a sentinel fill run (e.g. "!!!!!!")
pub fn is_sentinel_fill(token: &str) -> bool {
    !token.is_empty()
        && SENTINEL_FILL_CHARS
            .iter()
            .any(|&fill| token.chars().all(|c| c == fill))
}

/// Check whether a line is a separator rule of dashes (and optional spaces)
pub fn is_dash_rule(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c == '-' || c.is_whitespace())
}
