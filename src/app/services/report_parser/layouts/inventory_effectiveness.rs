//! RPT083 - Inventory effectiveness
//!
//! A single-page report: five fixed inventory sections identified by their
//! label text, four period-total columns each, closed by a ratings banner.
//! There is no form feed and no page number; the header prints its date in
//! the first twenty columns of line 0.

use tracing::debug;

use crate::app::models::{
    EffectivenessRatings, InventoryEffectivenessReport, Metadata, PeriodTotals, ReportBody,
};
use crate::app::services::report_parser::field_parsers::{
    column_int, column_percentage, percentage_from_str, slice_column,
};
use crate::app::services::report_parser::header;
use crate::app::services::report_parser::stats::ParseStats;
use crate::constants::is_dash_rule;

/// Section label column; period columns follow
const LABEL_END: usize = 56;
const COL_TODAY: (usize, usize) = (56, 66);
const COL_MTD: (usize, usize) = (66, 79);
const COL_YTD: (usize, usize) = (79, 92);
const COL_LAST_YEAR_START: usize = 92;

const RATING_MARKER: &str = "* * Rating * *";

/// Explanatory footnote lines interleaved with the data
const FOOTNOTE_MARKERS: &[&str] = &["An item is", "The initial", "Any other part"];

pub fn parse(raw: &str, stats: &mut ParseStats) -> (Metadata, ReportBody) {
    let mut metadata = Metadata::default();
    let mut report = InventoryEffectivenessReport::default();

    let lines: Vec<&str> = raw.split('\n').collect();
    stats.pages = 1;

    header::extract_single_page_metadata(&lines, &mut metadata);

    let data_start = find_data_start(&lines);

    for line in lines.get(data_start..).unwrap_or_default() {
        if line.trim().is_empty() || is_dash_rule(line) {
            continue;
        }

        if line.contains(RATING_MARKER) {
            report.ratings = extract_ratings(line);
            stats.data_records += 1;
            break;
        }

        if FOOTNOTE_MARKERS.iter().any(|marker| line.contains(marker)) {
            continue;
        }

        let Some(section) = section_slot(line, &mut report) else {
            continue;
        };
        *section = PeriodTotals {
            total_today: column_int(line, COL_TODAY.0, Some(COL_TODAY.1)),
            total_mtd: column_int(line, COL_MTD.0, Some(COL_MTD.1)),
            total_ytd: column_int(line, COL_YTD.0, Some(COL_YTD.1)),
            total_last_year: last_year_total(line),
        };
        stats.data_records += 1;
    }

    if stats.data_records == 0 {
        debug!("no inventory sections recognized");
    }

    (metadata, ReportBody::InventoryEffectiveness(report))
}

/// Two lines past the Merchandise Inventory column-header line
fn find_data_start(lines: &[&str]) -> usize {
    lines
        .iter()
        .position(|line| {
            line.contains("Merchandise Inventory") && line.contains("Today") && line.contains("MTD")
        })
        .map_or(0, |i| i + 2)
}

/// Identify which inventory section a line belongs to by its label text
///
/// Match order matters: "Instore Items" is a substring of "Non-Instore
/// Items", so the longer label is tested first.
fn section_slot<'a>(
    line: &str,
    report: &'a mut InventoryEffectivenessReport,
) -> Option<&'a mut PeriodTotals> {
    if line.len() < LABEL_END {
        return None;
    }
    let label = slice_column(line, 0, Some(LABEL_END)).trim();

    let inventory = &mut report.inventory;
    if label.contains("Non-Instore Items") {
        Some(&mut inventory.non_instore_items)
    } else if label.contains("Instore Items") {
        Some(&mut inventory.instore_items)
    } else if label.contains("Merchandise Total") {
        Some(&mut inventory.merchandise_total)
    } else if label.contains("Lost Sales") {
        Some(&mut inventory.lost_sales)
    } else if label.contains("Total Merchandise & Lost") || label.contains("Total Merchandise and Lost")
    {
        Some(&mut inventory.total_merchandise_and_lost)
    } else {
        None
    }
}

/// The open-ended last-year column, truncated at the first character that is
/// not part of a printed integer
fn last_year_total(line: &str) -> Option<i64> {
    let text = slice_column(line, COL_LAST_YEAR_START, None).trim();
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '-'))
        .unwrap_or(text.len());
    let value = text[..end].replace(',', "");
    if value.is_empty() {
        None
    } else {
        value.parse().ok()
    }
}

/// Percentages from the ratings banner line
fn extract_ratings(line: &str) -> EffectivenessRatings {
    EffectivenessRatings {
        today_percent: column_percentage(line, COL_TODAY.0, Some(COL_TODAY.1)),
        mtd_percent: column_percentage(line, COL_MTD.0, Some(COL_MTD.1)),
        ytd_percent: column_percentage(line, COL_YTD.0, Some(COL_YTD.1)),
        last_year_percent: last_year_percentage(line),
    }
}

/// The open-ended last-year rating, truncated at the first character that
/// cannot be part of a printed percentage
fn last_year_percentage(line: &str) -> Option<f64> {
    let text = slice_column(line, COL_LAST_YEAR_START, None).trim();
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '%' || c == ' '))
        .unwrap_or(text.len());
    percentage_from_str(&text[..end])
}
