//! Section scanning state shared by the layout parsers
//!
//! A report's data tables span page boundaries, and a table's column-header
//! line is not guaranteed to reappear on every continuation page. The scanner
//! therefore carries two pieces of state across pages: which logical section
//! the walker is inside, and which of the two data-line layouts (sales
//! metrics vs. invoice counts) applies to the rows currently being read.
//! Each parse call owns its own [`ScanState`]; nothing is shared across
//! concurrent parses.

use crate::constants::{DATA_KIND_SCAN_LINES, data_kind_signatures};

/// Which of the two mutually exclusive column layouts applies to data lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    /// Net / gross profit / GP% sales metrics
    Sales,
    /// Invoice, line, void, and return counts
    Invoice,
}

/// Logical region of a report the scanner currently believes it is in
///
/// Only the employee sales report carries named sections; the other layouts
/// locate their tables positionally and leave the section unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Employee table of the employee sales report
    Employee,
    /// Salesrep table of the employee sales report
    Salesrep,
    /// Memo-of-delivery-sales block
    MemoDelivery,
}

/// Mutable parse context threaded through a page/line loop
///
/// Lifetime is one pass over one report's pages. Section and data kind both
/// persist across page boundaries; the data kind is refreshed whenever a
/// page's leading lines carry a recognizable column-header signature.
#[derive(Debug, Clone)]
pub struct ScanState {
    /// Current logical section, if any marker has been seen
    pub section: Option<Section>,

    /// Data-line layout in effect; sales until a header says otherwise
    pub data_kind: DataKind,
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            section: None,
            data_kind: DataKind::Sales,
        }
    }

    /// Refresh the data kind from a page's leading lines, keeping the
    /// previous kind when no header signature is found
    pub fn observe_page(&mut self, lines: &[&str]) {
        if let Some(kind) = detect_data_kind(lines) {
            self.data_kind = kind;
        }
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the data kind from a page's leading column-header lines
///
/// Header token spacing varies between report revisions, so signatures are
/// matched with all spaces removed.
pub fn detect_data_kind(lines: &[&str]) -> Option<DataKind> {
    for line in lines.iter().take(DATA_KIND_SCAN_LINES) {
        let squashed: String = line.chars().filter(|c| *c != ' ').collect();
        if squashed.contains(data_kind_signatures::INVOICE) {
            return Some(DataKind::Invoice);
        }
        if squashed.contains(data_kind_signatures::SALES) {
            return Some(DataKind::Sales);
        }
    }
    None
}

/// Check whether a line is a page-number-only stub (e.g. "Page  3")
pub fn is_page_stub(line: &str) -> bool {
    line.contains("Page") && line.trim().len() < 10
}
