//! RPT002 - Transaction register
//!
//! Transactions are fixed-width lines opened by a transaction-type tag. The
//! last page carries a memo section after a `-----MEMO-----` marker with
//! three side-by-side summary columns (sales totals, rebates, codes legend)
//! plus transaction-count lines.

use tracing::debug;

use crate::app::models::{Metadata, RegisterSummary, ReportBody, Transaction, TransactionRegisterReport};
use crate::app::services::report_parser::field_parsers::{pad_line, parse_float, slice_column};
use crate::app::services::report_parser::header;
use crate::app::services::report_parser::pages::split_pages;
use crate::app::services::report_parser::stats::ParseStats;
use crate::constants::{CREDIT_MEMO_TYPE, END_OF_REPORT_MARKER, TRANSACTION_TYPES};

/// A candidate line must reach the transaction-total column to qualify
const MIN_TRANSACTION_LINE_LEN: usize = 75;

/// Width every transaction line is padded to before slicing
const PADDED_LINE_LEN: usize = 130;

/// Memo section marker on the last page
const MEMO_MARKER: &str = "-----MEMO-----";

// Column offsets of a transaction line, 0-indexed and end-exclusive
const COL_TYPE: (usize, usize) = (0, 8);
const COL_INV_NUMBER: (usize, usize) = (8, 15);
const COL_CUSTOMER: (usize, usize) = (15, 24);
const COL_EMPLOYEE: (usize, usize) = (24, 31);
const COL_SALESREP: (usize, usize) = (31, 39);
const COL_CASHIER: (usize, usize) = (39, 47);
const COL_PURCHASE_ORDER: (usize, usize) = (47, 75);
const COL_TOTAL: (usize, usize) = (75, 87);
const COL_NET_SALES: (usize, usize) = (87, 97);
const COL_COST: (usize, usize) = (97, 107);
const COL_GP_AMOUNT: (usize, usize) = (107, 117);
const COL_GP_PERCENT: (usize, usize) = (117, 125);
const COL_CODES_START: usize = 125;

// Memo summary columns run side by side on the same line
const MEMO_SALES_TOTALS_END: usize = 45;
const MEMO_REBATES: (usize, usize) = (48, 82);
const MEMO_LEGEND_START: usize = 85;

pub fn parse(raw: &str, stats: &mut ParseStats) -> (Metadata, ReportBody) {
    let mut metadata = Metadata::default();
    let mut report = TransactionRegisterReport::default();

    let pages = split_pages(raw);
    stats.pages = pages.len();

    for page in &pages {
        let lines = page.trimmed_lines();

        header::extract_first_page_metadata(&lines, &mut metadata);
        header::extract_page_number(&lines, &mut metadata);

        for line in &lines {
            // The memo section ends the transaction listing
            if line.contains(MEMO_MARKER) {
                break;
            }
            if is_noise_line(line) {
                continue;
            }

            let trimmed = line.trim_start();
            if TRANSACTION_TYPES.iter().any(|tag| trimmed.starts_with(tag)) {
                match parse_transaction_line(line) {
                    Some(transaction) => {
                        report.transactions.push(transaction);
                        stats.data_records += 1;
                    }
                    None => {
                        debug!(len = line.len(), "transaction line too short, skipping");
                        stats.lines_skipped += 1;
                    }
                }
            }
        }
    }

    if let Some(last_page) = pages.last() {
        parse_memo_section(&last_page.trimmed_lines(), &mut report.summary, stats);
    }

    (metadata, ReportBody::TransactionRegister(report))
}

fn is_noise_line(line: &str) -> bool {
    line.trim().is_empty()
        || line.contains("-----")
        || line.contains("Page")
        || line.to_uppercase().contains("TRANSACTION REGISTER")
        || line.contains(END_OF_REPORT_MARKER)
        || line.contains("Inv #")
}

/// Slice one fixed-width transaction line into a record
///
/// Lines shorter than the transaction-total column are rejected; anything
/// longer is padded so every slice is in range. Credit memo amounts print
/// unsigned and are coerced negative, leaving zero and already-negative
/// values untouched.
fn parse_transaction_line(line: &str) -> Option<Transaction> {
    if line.len() < MIN_TRANSACTION_LINE_LEN {
        return None;
    }
    let line = pad_line(line, PADDED_LINE_LEN);

    let text_field = |(start, end)| {
        let value = slice_column(&line, start, Some(end)).trim();
        (!value.is_empty()).then(|| value.to_string())
    };
    let money_field = |(start, end)| parse_float(slice_column(&line, start, Some(end)));

    let transaction_type = slice_column(&line, COL_TYPE.0, Some(COL_TYPE.1)).trim().to_string();

    let mut transaction_total = money_field(COL_TOTAL);
    let mut net_sales = money_field(COL_NET_SALES);
    let mut cost = money_field(COL_COST);
    let mut gross_profit_amount = money_field(COL_GP_AMOUNT);

    if transaction_type == CREDIT_MEMO_TYPE {
        transaction_total = negate_positive(transaction_total);
        net_sales = negate_positive(net_sales);
        cost = negate_positive(cost);
        gross_profit_amount = negate_positive(gross_profit_amount);
    }

    let codes = {
        let value = slice_column(&line, COL_CODES_START, None).trim();
        (!value.is_empty()).then(|| value.to_string())
    };

    Some(Transaction {
        transaction_type,
        inv_number: text_field(COL_INV_NUMBER),
        customer: text_field(COL_CUSTOMER),
        employee: text_field(COL_EMPLOYEE),
        salesrep: text_field(COL_SALESREP),
        cashier: text_field(COL_CASHIER),
        purchase_order: text_field(COL_PURCHASE_ORDER),
        transaction_total,
        net_sales,
        cost,
        gross_profit_amount,
        gross_profit_percent: money_field(COL_GP_PERCENT),
        codes,
    })
}

/// Force a positive amount negative, leaving zero and negatives alone
fn negate_positive(value: Option<f64>) -> Option<f64> {
    value.map(|v| if v > 0.0 { -v } else { v })
}

/// Parse the memo summary from the last page
///
/// Each memo line can contribute to up to three columns at once; the
/// transaction-count lines are matched separately by their wording.
fn parse_memo_section(lines: &[&str], summary: &mut RegisterSummary, stats: &mut ParseStats) {
    let Some(memo_index) = lines.iter().position(|line| line.contains(MEMO_MARKER)) else {
        return;
    };

    for line in &lines[memo_index + 1..] {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.contains("------") || trimmed.contains("***") {
            continue;
        }

        // The column-header line of the count block carries no data
        let is_count_header = trimmed.contains('#') && trimmed.contains("Transactions");
        if !is_count_header {
            parse_summary_columns(line, summary);
        }

        if trimmed.contains("of ") && trimmed.contains("Transaction") {
            let parts: Vec<&str> = trimmed.split("of").collect();
            if parts.len() == 2 && parts[1].contains("Transaction") {
                if let Some(kind) = parts[1].split("Transaction").next() {
                    let key = format!("{}_transactions", kind.trim().to_lowercase());
                    summary.transaction_counts.insert(key, last_token_count(trimmed));
                    stats.data_records += 1;
                }
            }
        } else if trimmed.contains("Total Transaction Count") {
            summary
                .transaction_counts
                .insert("total".to_string(), last_token_count(trimmed));
            stats.data_records += 1;
        }
    }
}

/// Extract the three side-by-side summary columns from one memo line
fn parse_summary_columns(line: &str, summary: &mut RegisterSummary) {
    let sales_tokens: Vec<&str> = slice_column(line, 0, Some(MEMO_SALES_TOTALS_END))
        .split_whitespace()
        .collect();
    if let Some((name, amount)) = name_amount(&sales_tokens, 3) {
        summary.sales_totals.insert(name, amount);
    }

    let rebate_tokens: Vec<&str> = slice_column(line, MEMO_REBATES.0, Some(MEMO_REBATES.1))
        .split_whitespace()
        .collect();
    if let Some((name, amount)) = name_amount(&rebate_tokens, 4) {
        summary.rebates.insert(name, amount);
    }

    let legend_parts: Vec<&str> = slice_column(line, MEMO_LEGEND_START, None)
        .split(" = ")
        .collect();
    if legend_parts.len() == 2 {
        summary
            .codes_legend
            .insert(legend_parts[0].trim().to_string(), legend_parts[1].trim().to_string());
    }
}

/// Interpret tokens as `<name...> <amount>` with a bounded name length
fn name_amount(tokens: &[&str], max_tokens: usize) -> Option<(String, Option<f64>)> {
    if tokens.len() < 2 || tokens.len() > max_tokens {
        return None;
    }
    let (amount_token, name_tokens) = tokens.split_last()?;
    Some((name_tokens.join(" "), parse_float(amount_token)))
}

/// Last whitespace token of a count line as an integer, zero when absent
fn last_token_count(line: &str) -> i64 {
    line.split_whitespace()
        .last()
        .and_then(|token| token.parse().ok())
        .unwrap_or(0)
}
