//! Parsing statistics and outcome structures
//!
//! This module provides types for tracking how much of a report survived
//! parsing. Per-line failures never abort a report, so the statistics are the
//! only visibility a caller has into skipped lines.

use crate::app::models::ReportInstance;

/// Parsing outcome: the structured report plus basic statistics
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The structured, JSON-serializable report
    pub report: ReportInstance,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of pages in the report
    pub pages: usize,

    /// Number of data records successfully extracted
    pub data_records: usize,

    /// Number of candidate data lines dropped as malformed
    pub lines_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            pages: 0,
            data_records: 0,
            lines_skipped: 0,
        }
    }

    /// Check whether any data record survived parsing
    pub fn has_data(&self) -> bool {
        self.data_records > 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
