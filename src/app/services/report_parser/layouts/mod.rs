//! Layout-specific report parsers
//!
//! One module per fully specified report layout. Each layout exposes a
//! `parse` function taking the raw report text and the running statistics,
//! and returning the extracted metadata plus the typed report body. Layouts
//! never fail: malformed lines are skipped and counted, and a report with no
//! recognizable data yields an empty body.

pub mod employee_sales;
pub mod inventory_effectiveness;
pub mod quarter_hour;
pub mod sales_journal;
pub mod transaction_register;

use tracing::debug;

use crate::app::models::{Metadata, ReportBody, UnspecifiedReport};
use crate::app::services::report_parser::header;
use crate::app::services::report_parser::pages::split_pages;
use crate::app::services::report_parser::stats::ParseStats;

/// Parse a registered report type whose column layout has not been encoded
///
/// The shared page-header metadata is still extracted; the body is an empty
/// object until the layout has been derived from sample documents.
pub fn parse_unspecified(raw: &str, stats: &mut ParseStats) -> (Metadata, ReportBody) {
    let mut metadata = Metadata::default();
    let pages = split_pages(raw);
    stats.pages = pages.len();

    for page in &pages {
        let lines = page.trimmed_lines();
        header::extract_first_page_metadata(&lines, &mut metadata);
        header::extract_page_number(&lines, &mut metadata);
    }

    debug!("no layout registered for this report type, body left empty");
    (metadata, ReportBody::Unspecified(UnspecifiedReport::default()))
}
