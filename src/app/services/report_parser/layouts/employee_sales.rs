//! RPT001 - Employee sales report
//!
//! The report prints two tables per person population (employees, then
//! salesreps): a sales-metric table and an invoice-count table, followed by
//! an optional memo-of-delivery-sales block. Tables span page boundaries and
//! the section banner is not reprinted on continuation pages, so the section
//! and data kind carry across pages in the scan state. Rows are
//! whitespace-tokenized; the identity key in the first token decides whether
//! a line is a data row at all.

use tracing::debug;

use crate::app::models::{
    EmployeeSalesReport, InvoiceMetrics, MemoDeliveryInvoiceMetrics, MemoDeliverySalesMetrics,
    Metadata, ReportBody, SalesId, SalesMetrics,
};
use crate::app::services::report_parser::field_parsers::{token_float, token_int};
use crate::app::services::report_parser::header;
use crate::app::services::report_parser::pages::split_pages;
use crate::app::services::report_parser::scanner::{DataKind, ScanState, Section, is_page_stub};
use crate::app::services::report_parser::stats::ParseStats;
use crate::constants::{
    ACCOUNTING_DAY_MARKER, END_OF_REPORT_MARKER, PAGE_MARKER, STORE_INFO_DELIMITER,
};

// Token-count minimums per row shape. Trailing last-year columns are only
// printed on some reports, so rows come in a short and a long form.
const SALES_ROW_MIN_TOKENS: usize = 11;
const SALES_ROW_LAST_YEAR_TOKENS: usize = 14;
const INVOICE_ROW_MIN_TOKENS: usize = 16;
const INVOICE_ROW_LAST_YEAR_TOKENS: usize = 21;
const SALES_TOTAL_MIN_TOKENS: usize = 14;
const INVOICE_TOTAL_MIN_TOKENS: usize = 20;
const MEMO_INVOICE_MIN_TOKENS: usize = 4;
const MEMO_SALES_MIN_TOKENS: usize = 6;

const EMPLOYEE_SECTION_MARKER: &str = "*Employee";
const SALESREP_SECTION_MARKER: &str = "*Salesrep";
const MEMO_DELIVERY_MARKER: &str = "Memo of Delivery Sales";

pub fn parse(raw: &str, stats: &mut ParseStats) -> (Metadata, ReportBody) {
    let mut metadata = Metadata::default();
    let mut report = EmployeeSalesReport::default();
    let mut state = ScanState::new();

    let pages = split_pages(raw);
    stats.pages = pages.len();

    for page in &pages {
        let lines = page.trimmed_lines();

        if lines.len() > 5 {
            header::extract_first_page_metadata(&lines, &mut metadata);
            header::extract_last_month(&lines, &mut metadata);
            header::extract_page_number(&lines, &mut metadata);
        }

        state.observe_page(&lines);

        for line in &lines {
            if let Some(section) = section_marker(line) {
                state.section = Some(section);
                continue;
            }

            if is_noise_line(line) || is_column_header(line, state.data_kind) {
                continue;
            }

            let Some(section) = state.section.clone() else {
                continue;
            };
            if line.trim().is_empty() {
                continue;
            }

            if line.trim_start().starts_with("Total") {
                parse_total_line(line, &section, state.data_kind, &mut report, stats);
            } else if section == Section::MemoDelivery {
                parse_memo_line(line, state.data_kind, &mut report, stats);
            } else {
                parse_person_line(line, &section, state.data_kind, &mut report, stats);
            }
        }
    }

    (metadata, ReportBody::EmployeeSales(report))
}

/// Match a section banner line, if any
fn section_marker(line: &str) -> Option<Section> {
    if line.contains(EMPLOYEE_SECTION_MARKER) {
        Some(Section::Employee)
    } else if line.contains(SALESREP_SECTION_MARKER) {
        Some(Section::Salesrep)
    } else if line.contains(MEMO_DELIVERY_MARKER) {
        Some(Section::MemoDelivery)
    } else {
        None
    }
}

/// Separator rules, banners, footers, page-number stubs, and reprinted
/// store header lines
fn is_noise_line(line: &str) -> bool {
    line.contains("-----")
        || line.trim().is_empty()
        || line.to_uppercase().contains("EMPLOYEE SALES REPORT")
        || line.contains(END_OF_REPORT_MARKER)
        || is_page_stub(line)
        || is_store_header(line)
        || line.contains("***")
        || line.contains("# Inv")
}

/// Store header line reprinted on every page
///
/// With sections carried across pages, the header's store id would pass the
/// identity predicate and a sales-kind header happens to meet the sales-row
/// token minimum, so headers must be excluded before row parsing.
fn is_store_header(line: &str) -> bool {
    line.contains(STORE_INFO_DELIMITER)
        && (line.contains(ACCOUNTING_DAY_MARKER) || line.contains(PAGE_MARKER))
}

/// Column-header lines for the data kind currently in effect
fn is_column_header(line: &str, kind: DataKind) -> bool {
    match kind {
        DataKind::Sales => {
            (line.contains("Emp") && line.contains("Sales"))
                || (line.contains("Net") && line.contains("Gross"))
        }
        DataKind::Invoice => {
            (line.contains("Emp") && line.contains("Inv"))
                || (line.contains("Lines") && line.contains("Vd") && line.contains("Ret"))
        }
    }
}

/// Store-wide total row for the employee or salesrep section
///
/// A total inside the memo block has no destination record and is dropped.
fn parse_total_line(
    line: &str,
    section: &Section,
    kind: DataKind,
    report: &mut EmployeeSalesReport,
    stats: &mut ParseStats,
) {
    let record = match section {
        Section::Employee => &mut report.totals.employee,
        Section::Salesrep => &mut report.totals.salesrep,
        _ => {
            debug!("total row outside a person section, skipping");
            stats.lines_skipped += 1;
            return;
        }
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match kind {
        DataKind::Sales if tokens.len() >= SALES_TOTAL_MIN_TOKENS => {
            record.sales = Some(sales_metrics(&tokens));
            stats.data_records += 1;
        }
        DataKind::Invoice if tokens.len() >= INVOICE_TOTAL_MIN_TOKENS => {
            // Total rows guard each trailing column individually
            record.invoice = Some(invoice_metrics(&tokens, INVOICE_ROW_MIN_TOKENS + 1));
            stats.data_records += 1;
        }
        _ => {
            debug!(tokens = tokens.len(), "short total row, skipping");
            stats.lines_skipped += 1;
        }
    }
}

/// Aggregate row inside the memo-of-delivery-sales block
fn parse_memo_line(
    line: &str,
    kind: DataKind,
    report: &mut EmployeeSalesReport,
    stats: &mut ParseStats,
) {
    // The memo block reprints its own miniature column header
    if line.contains("Inv Lines") {
        return;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MEMO_INVOICE_MIN_TOKENS {
        return;
    }

    match kind {
        DataKind::Invoice => {
            report.memo_delivery_sales.invoice = Some(MemoDeliveryInvoiceMetrics {
                today_invoices: token_int(&tokens, 0),
                today_lines: token_int(&tokens, 1),
                mtd_invoices: token_int(&tokens, 2),
                mtd_lines: token_int(&tokens, 3),
            });
            stats.data_records += 1;
        }
        DataKind::Sales if tokens.len() >= MEMO_SALES_MIN_TOKENS => {
            report.memo_delivery_sales.sales = Some(MemoDeliverySalesMetrics {
                today_net_sales: token_float(&tokens, 0),
                today_gross_profit: token_float(&tokens, 1),
                today_gp_percent: token_float(&tokens, 2),
                mtd_net_sales: token_float(&tokens, 3),
                mtd_gross_profit: token_float(&tokens, 4),
                mtd_gp_percent: token_float(&tokens, 5),
            });
            stats.data_records += 1;
        }
        DataKind::Sales => {
            stats.lines_skipped += 1;
        }
    }
}

/// Individual employee/salesrep data row
fn parse_person_line(
    line: &str,
    section: &Section,
    kind: DataKind,
    report: &mut EmployeeSalesReport,
    stats: &mut ParseStats,
) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&id_token) = tokens.first() else {
        return;
    };
    if !SalesId::is_valid(id_token) {
        return;
    }

    let collection = match section {
        Section::Employee => &mut report.employees,
        Section::Salesrep => &mut report.salesreps,
        _ => return,
    };

    // The record is only created once a row of the right shape shows up,
    // so stray text surviving the noise predicates cannot mint empty
    // records under a carried-over section.
    match kind {
        DataKind::Sales if tokens.len() >= SALES_ROW_MIN_TOKENS => {
            let record = collection.entry(id_token.to_string()).or_default();
            record.sales = Some(sales_metrics(&tokens));
            stats.data_records += 1;
        }
        DataKind::Invoice if tokens.len() >= INVOICE_ROW_MIN_TOKENS => {
            let record = collection.entry(id_token.to_string()).or_default();
            record.invoice = Some(invoice_metrics(&tokens, INVOICE_ROW_LAST_YEAR_TOKENS));
            stats.data_records += 1;
        }
        _ => {
            debug!(id = id_token, tokens = tokens.len(), "short data row, skipping");
            stats.lines_skipped += 1;
        }
    }
}

/// Sales-metric columns from a tokenized row; last-year columns only when
/// the long row form is present
fn sales_metrics(tokens: &[&str]) -> SalesMetrics {
    let mut metrics = SalesMetrics {
        today_net_sales: token_float(tokens, 1),
        today_gross_profit: token_float(tokens, 2),
        today_gp_percent: token_float(tokens, 3),
        mtd_net_sales: token_float(tokens, 4),
        mtd_gross_profit: token_float(tokens, 5),
        mtd_gp_percent: token_float(tokens, 6),
        mtd_percent_change: token_float(tokens, 7),
        ytd_net_sales: token_float(tokens, 8),
        ytd_gross_profit: token_float(tokens, 9),
        ytd_gp_percent: token_float(tokens, 10),
        ..Default::default()
    };

    if tokens.len() >= SALES_ROW_LAST_YEAR_TOKENS {
        metrics.last_year_net_sales = token_float(tokens, 11);
        metrics.last_year_gross_profit = token_float(tokens, 12);
        metrics.last_year_gp_percent = token_float(tokens, 13);
    }

    metrics
}

/// Invoice-count columns from a tokenized row
///
/// The last-year block is populated once the row reaches `last_year_min`
/// tokens; within the block each column tolerates absence, since total rows
/// may stop anywhere past the minimum.
fn invoice_metrics(tokens: &[&str], last_year_min: usize) -> InvoiceMetrics {
    let mut metrics = InvoiceMetrics {
        today_invoices: token_int(tokens, 1),
        today_lines: token_int(tokens, 2),
        today_voided: token_int(tokens, 3),
        today_returns: token_int(tokens, 4),
        today_returns_value: token_float(tokens, 5),
        mtd_invoices: token_int(tokens, 6),
        mtd_lines: token_int(tokens, 7),
        mtd_voided: token_int(tokens, 8),
        mtd_returns: token_int(tokens, 9),
        mtd_returns_value: token_float(tokens, 10),
        ytd_invoices: token_int(tokens, 11),
        ytd_lines: token_int(tokens, 12),
        ytd_voided: token_int(tokens, 13),
        ytd_returns: token_int(tokens, 14),
        ytd_returns_value: token_float(tokens, 15),
        ..Default::default()
    };

    if tokens.len() >= last_year_min {
        metrics.last_year_invoices = token_int(tokens, 16);
        metrics.last_year_lines = token_int(tokens, 17);
        metrics.last_year_voided = token_int(tokens, 18);
        metrics.last_year_returns = token_int(tokens, 19);
        metrics.last_year_returns_value = token_float(tokens, 20);
    }

    metrics
}
