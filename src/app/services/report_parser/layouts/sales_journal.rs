//! RPT004 - Sales journal
//!
//! A two-level category tree rendered by indentation: category lines are
//! indented exactly two spaces, subcategory lines four or more. Leading
//! whitespace is significant, so this layout reads raw page lines instead of
//! trimmed ones. Metric columns are fixed-offset with per-column widths; a
//! line whose columns are all empty contributes structure but no data.

use crate::app::models::{JournalMetrics, Metadata, ReportBody, SalesJournalReport};
use crate::app::services::report_parser::field_parsers::{column_float, slice_column};
use crate::app::services::report_parser::header;
use crate::app::services::report_parser::pages::split_pages;
use crate::app::services::report_parser::stats::ParseStats;
use crate::constants::is_dash_rule;

/// Description column
const COL_DESCRIPTION: (usize, usize) = (0, 33);

/// Metric column offsets and widths, in output order
const METRIC_COLUMNS: [(usize, usize); 9] = [
    (33, 11),  // today_current
    (44, 11),  // today_last_year
    (56, 7),   // percent_change
    (64, 10),  // mtd_current
    (75, 11),  // mtd_last_year
    (87, 7),   // mtd_percent_change
    (95, 12),  // ytd_current
    (107, 12), // ytd_last_year
    (120, 8),  // ytd_percent_change
];

const MEMO_HEADER: &str = "----------- Memo -------------";

pub fn parse(raw: &str, stats: &mut ParseStats) -> (Metadata, ReportBody) {
    let mut metadata = Metadata::default();
    let mut report = SalesJournalReport::default();
    let mut current_category: Option<String> = None;

    let pages = split_pages(raw);
    stats.pages = pages.len();

    'pages: for page in &pages {
        let lines = page.lines();

        header::extract_first_page_metadata(&lines, &mut metadata);
        header::extract_page_number(&lines, &mut metadata);

        // The header can sit at the very end of a page, putting the data
        // start past the last line
        let data_start = find_data_start(&lines);

        for line in lines.get(data_start..).unwrap_or_default() {
            // The trailing legend section ends the journal
            if line.starts_with("**") {
                break 'pages;
            }
            if line.contains(MEMO_HEADER) {
                continue;
            }
            if line.trim().is_empty() || is_dash_rule(line) {
                continue;
            }

            let desc = slice_column(line, COL_DESCRIPTION.0, Some(COL_DESCRIPTION.1)).trim();
            if desc.is_empty() {
                continue;
            }

            // Indentation decides the tree level
            let mut current_subcategory: Option<String> = None;
            if line.starts_with("  ") && !line.starts_with("    ") {
                current_category = Some(desc.to_string());
                report.categories.entry(desc.to_string()).or_default();
            } else if line.starts_with("    ") {
                current_subcategory = Some(desc.to_string());
            }

            let Some(category_name) = current_category.clone() else {
                stats.lines_skipped += 1;
                continue;
            };

            let metrics = extract_metrics(line);
            if !has_data(&metrics) {
                continue;
            }

            let category = report.categories.entry(category_name).or_default();
            match current_subcategory {
                Some(subcategory) => {
                    category.subcategories.insert(subcategory, metrics);
                }
                None => {
                    category.data = Some(metrics);
                }
            }
            stats.data_records += 1;
        }
    }

    (metadata, ReportBody::SalesJournal(report))
}

/// Two lines past the Today/MTD/YTD column-header line, or the top of the
/// page when no header is present (continuation pages)
fn find_data_start(lines: &[&str]) -> usize {
    lines
        .iter()
        .position(|line| line.contains("Today") && line.contains("MTD") && line.contains("YTD"))
        .map_or(0, |i| i + 2)
}

fn extract_metrics(line: &str) -> JournalMetrics {
    let col = |i: usize| {
        let (start, width) = METRIC_COLUMNS[i];
        column_float(line, start, Some(start + width))
    };
    JournalMetrics {
        today_current: col(0),
        today_last_year: col(1),
        percent_change: col(2),
        mtd_current: col(3),
        mtd_last_year: col(4),
        mtd_percent_change: col(5),
        ytd_current: col(6),
        ytd_last_year: col(7),
        ytd_percent_change: col(8),
    }
}

fn has_data(metrics: &JournalMetrics) -> bool {
    metrics.today_current.is_some()
        || metrics.today_last_year.is_some()
        || metrics.percent_change.is_some()
        || metrics.mtd_current.is_some()
        || metrics.mtd_last_year.is_some()
        || metrics.mtd_percent_change.is_some()
        || metrics.ytd_current.is_some()
        || metrics.ytd_last_year.is_some()
        || metrics.ytd_percent_change.is_some()
}
