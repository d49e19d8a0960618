//! Report header metadata extraction
//!
//! Page headers share a common shape across report types: the report date on
//! the first line, then a store line carrying the store id/name, accounting
//! day, and page number. Extraction is tolerant throughout: a missing
//! delimiter or unparsable token leaves the field unset and the report
//! continues. The first non-empty extraction of each field wins; only the
//! page number is refreshed on every page.

use tracing::debug;

use crate::app::models::Metadata;
use crate::constants::{
    ACCOUNTING_DAY_DELIMITER, ACCOUNTING_DAY_MARKER, PAGE_MARKER, STORE_INFO_DELIMITER,
};

/// Extract the shared first-page header fields into `metadata`
pub fn extract_first_page_metadata(lines: &[&str], metadata: &mut Metadata) {
    if let Some(line) = lines.first() {
        if metadata.report_date.is_none() {
            let mut tokens = line.split_whitespace();
            if let (Some(date), Some(time)) = (tokens.next(), tokens.next()) {
                metadata.report_date = Some(format!("{} {}", date, time));
            }
        }
    }

    if let Some(line) = lines.get(1) {
        let store_info: Vec<&str> = line.split(STORE_INFO_DELIMITER).collect();
        if store_info.len() >= 2 {
            if metadata.store_id.is_none() {
                metadata.store_id = Some(store_info[0].trim().to_string());
            }
            if metadata.store_name.is_none() {
                metadata.store_name = Some(
                    store_info[1]
                        .replace(ACCOUNTING_DAY_MARKER, "")
                        .trim_end()
                        .to_string(),
                );
            }
        }

        if metadata.accounting_day.is_none() {
            if let Some(remainder) = line.split(ACCOUNTING_DAY_DELIMITER).nth(1) {
                metadata.accounting_day = remainder
                    .split_whitespace()
                    .next()
                    .map(|token| token.to_string());
            }
        }
    }

    if metadata.report_date.is_none() || metadata.store_id.is_none() {
        debug!("incomplete page header: some metadata fields left unset");
    }
}

/// Scan the leading header lines for a `"Last <Month>-"` reference label
pub fn extract_last_month(lines: &[&str], metadata: &mut Metadata) {
    if metadata.last_month.is_some() {
        return;
    }

    for line in lines.iter().take(5) {
        if !(line.contains("Last") && line.contains('-')) {
            continue;
        }
        if let Some(after) = line.split("Last").nth(1) {
            if let Some(month) = after.split('-').next() {
                let month = month.trim();
                if !month.is_empty() {
                    metadata.last_month = Some(month.to_string());
                }
            }
        }
    }
}

/// Refresh the page number from this page's header
///
/// A missing `Page` marker or a non-numeric token leaves the previous value
/// in place.
pub fn extract_page_number(lines: &[&str], metadata: &mut Metadata) {
    if let Some(line) = lines.get(1) {
        if let Some(remainder) = line.split(PAGE_MARKER).nth(1) {
            if let Ok(page) = remainder.trim().parse::<i64>() {
                metadata.page_count = Some(page);
            }
        }
    }
}

/// Extract header fields from a single-page report without pagination
///
/// The inventory effectiveness report prints its date in the first twenty
/// columns of line 0 and carries no page number; the accounting day follows
/// a dash after the accounting-day marker.
pub fn extract_single_page_metadata(lines: &[&str], metadata: &mut Metadata) {
    if let Some(line) = lines.first() {
        let date = line.get(..20).unwrap_or(line).trim();
        if !date.is_empty() {
            metadata.report_date = Some(date.to_string());
        }
    }

    let Some(line) = lines.get(1) else {
        return;
    };
    let Some((store_id, rest)) = line.split_once(STORE_INFO_DELIMITER) else {
        debug!("single-page header missing store delimiter");
        return;
    };
    metadata.store_id = Some(store_id.trim().to_string());

    if let Some((name, remainder)) = rest.split_once(ACCOUNTING_DAY_MARKER) {
        metadata.store_name = Some(name.trim().to_string());
        if let Some(after_dash) = remainder.split('-').nth(1) {
            let digits: String = after_dash
                .chars()
                .skip_while(|c| !c.is_ascii_digit())
                .take_while(|c| c.is_ascii_digit())
                .collect();
            if !digits.is_empty() {
                metadata.accounting_day = Some(digits);
            }
        }
    } else {
        metadata.store_name = Some(rest.trim().to_string());
    }
}
