//! POS Report Parser Library
//!
//! A Rust library for converting fixed-pitch, line-printer-style point-of-sale
//! back-office reports into structured, JSON-serializable records.
//!
//! This library provides tools for:
//! - Splitting form-feed paginated report text into pages
//! - Extracting report metadata (date, store, accounting day, page number)
//! - Stateful section scanning that survives page boundaries
//! - Whitespace-tokenized and fixed-byte-offset field extraction
//! - Uniform sentinel-value normalization (absent, never zero)
//! - Dispatching report type codes to their layout-specific parsers
//!
//! The parser consumes a decoded text blob plus a report type code and returns
//! a structured result. It performs no I/O: enumerating report files,
//! decompression, and persistence belong to external collaborators.

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod report_parser;
    }
}

// Re-export commonly used types
pub use app::models::{Metadata, ReportBody, ReportInstance, ReportType, SalesId};
pub use app::services::report_parser::{ParseOutcome, ParseStats, ReportParser};

/// Result type alias for the POS report parser
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report parsing operations
///
/// Only [`Error::UnsupportedReportType`] surfaces to callers of
/// [`ReportParser::parse`]. Malformed lines and missing metadata are absorbed
/// locally: the affected field or record is left absent and parsing continues.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Report type code has no registered layout
    #[error("unsupported report type code '{code}': no layout registered")]
    UnsupportedReportType { code: String },

    /// Identity key failed the employee/salesrep acceptance predicate
    #[error(
        "invalid identity key '{value}': must be all digits or alphanumeric with at most 6 characters"
    )]
    InvalidIdentityKey { value: String },
}

impl Error {
    /// Create an unsupported report type error
    pub fn unsupported_report_type(code: impl Into<String>) -> Self {
        Self::UnsupportedReportType { code: code.into() }
    }

    /// Create an invalid identity key error
    pub fn invalid_identity_key(value: impl Into<String>) -> Self {
        Self::InvalidIdentityKey {
            value: value.into(),
        }
    }
}
