//! Parser for fixed-pitch line-printer POS back-office reports
//!
//! This module converts raw ASCII report text, as produced by the store
//! back-office print spooler, into structured JSON-serializable records. The
//! input is a decoded text blob plus a report type code; the parser performs
//! no I/O of its own.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Report type dispatch and parse orchestration
//! - [`pages`] - Form-feed page segmentation
//! - [`header`] - Page-header metadata extraction
//! - [`scanner`] - Section and data-kind state carried across pages
//! - [`field_parsers`] - Tokenized and fixed-offset field extraction with
//!   sentinel normalization
//! - [`layouts`] - One parser per fully specified report layout
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use pos_report_parser::ReportParser;
//!
//! # fn example() -> pos_report_parser::Result<()> {
//! let parser = ReportParser::new();
//! let outcome = parser.parse("RPT003", "12/02/24 09:15\n1042 - MAIN ST Page 1\n")?;
//!
//! println!(
//!     "Parsed {} records from {} pages",
//!     outcome.stats.data_records, outcome.stats.pages
//! );
//! let json = outcome.report.to_json();
//! # let _ = json;
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod header;
pub mod layouts;
pub mod pages;
pub mod parser;
pub mod scanner;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use pages::{Page, split_pages};
pub use parser::ReportParser;
pub use scanner::{DataKind, ScanState, Section};
pub use stats::{ParseOutcome, ParseStats};
