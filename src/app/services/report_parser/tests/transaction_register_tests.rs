//! Tests for the transaction register layout (report type 002)

use super::super::layouts::transaction_register;
use super::super::stats::ParseStats;
use super::{init_test_logging, line_with_fields, transaction_register_report};
use crate::app::models::{ReportBody, TransactionRegisterReport};

fn parse_fixture() -> (crate::app::models::Metadata, TransactionRegisterReport) {
    init_test_logging();
    let mut stats = ParseStats::new();
    let (metadata, body) = transaction_register::parse(&transaction_register_report(), &mut stats);
    match body {
        ReportBody::TransactionRegister(report) => (metadata, report),
        other => panic!("unexpected body variant: {other:?}"),
    }
}

#[test]
fn test_metadata_extraction() {
    let (metadata, _) = parse_fixture();

    assert_eq!(metadata.report_date.as_deref(), Some("12/03/24 08:00"));
    assert_eq!(metadata.store_id.as_deref(), Some("1042"));
    assert_eq!(metadata.accounting_day.as_deref(), Some("28"));
    assert_eq!(metadata.page_count, Some(2));
}

#[test]
fn test_transactions_in_report_order() {
    let (_, report) = parse_fixture();

    let types: Vec<&str> = report
        .transactions
        .iter()
        .map(|t| t.transaction_type.as_str())
        .collect();
    assert_eq!(types, vec!["CASH", "CR MEM", "CHG"]);
}

#[test]
fn test_cash_transaction_fields() {
    let (_, report) = parse_fixture();

    let cash = &report.transactions[0];
    assert_eq!(cash.inv_number.as_deref(), Some("123456"));
    assert_eq!(cash.customer.as_deref(), Some("C100"));
    assert_eq!(cash.employee.as_deref(), Some("55"));
    assert_eq!(cash.salesrep.as_deref(), Some("7"));
    assert_eq!(cash.purchase_order.as_deref(), Some("PO-9"));
    assert_eq!(cash.transaction_total, Some(125.50));
    assert_eq!(cash.net_sales, Some(110.0));
    assert_eq!(cash.cost, Some(80.0));
    assert_eq!(cash.gross_profit_amount, Some(30.0));
    assert_eq!(cash.gross_profit_percent, Some(27.3));
    assert_eq!(cash.codes.as_deref(), Some("T"));
}

#[test]
fn test_credit_memo_amounts_coerced_negative() {
    let (_, report) = parse_fixture();

    let credit_memo = &report.transactions[1];
    assert_eq!(credit_memo.transaction_total, Some(-45.0));
    assert_eq!(credit_memo.net_sales, Some(-40.0));
    assert_eq!(credit_memo.gross_profit_amount, Some(-5.0));
    // Zero stays zero, the percentage is never coerced
    assert_eq!(credit_memo.cost, Some(0.0));
    assert_eq!(credit_memo.gross_profit_percent, Some(11.1));
    // Empty text columns are absent, not empty strings
    assert_eq!(credit_memo.purchase_order, None);
    assert_eq!(credit_memo.codes, None);
}

#[test]
fn test_cash_amounts_untouched() {
    let (_, report) = parse_fixture();

    let cash = &report.transactions[0];
    assert!(cash.transaction_total.unwrap() > 0.0);
    assert!(cash.net_sales.unwrap() > 0.0);
}

#[test]
fn test_short_line_rejected() {
    let mut stats = ParseStats::new();
    let short = line_with_fields(&[(0, "CASH"), (8, "123456")]);
    let raw = format!("12/03/24  08:00\nstore line\n{short}\n");
    let (_, body) = transaction_register::parse(&raw, &mut stats);

    match body {
        ReportBody::TransactionRegister(report) => assert!(report.transactions.is_empty()),
        other => panic!("unexpected body variant: {other:?}"),
    }
    assert_eq!(stats.lines_skipped, 1);
}

#[test]
fn test_memo_sales_totals_and_rebates() {
    let (_, report) = parse_fixture();

    assert_eq!(report.summary.sales_totals["Cash"], Some(1250.0));
    assert_eq!(report.summary.sales_totals["Charge Sales"], Some(890.0));
    assert_eq!(report.summary.rebates["Core Rebate"], Some(45.0));
    assert_eq!(report.summary.rebates["Mfg Rebate"], Some(12.5));
}

#[test]
fn test_memo_codes_legend() {
    let (_, report) = parse_fixture();

    assert_eq!(report.summary.codes_legend["T"], "Taxable");
    assert_eq!(report.summary.codes_legend["R"], "Return");
}

#[test]
fn test_memo_transaction_counts() {
    let (_, report) = parse_fixture();

    assert_eq!(report.summary.transaction_counts["cash_transactions"], 12);
    assert_eq!(report.summary.transaction_counts["total"], 25);
}

#[test]
fn test_report_without_memo_section() {
    let mut stats = ParseStats::new();
    let cash = line_with_fields(&[(0, "CASH"), (8, "1"), (75, "10.00"), (87, "9.00")]);
    let raw = format!("12/03/24  08:00\nstore line\n{cash}\n");
    let (_, body) = transaction_register::parse(&raw, &mut stats);

    match body {
        ReportBody::TransactionRegister(report) => {
            assert_eq!(report.transactions.len(), 1);
            assert!(report.summary.sales_totals.is_empty());
            assert!(report.summary.transaction_counts.is_empty());
        }
        other => panic!("unexpected body variant: {other:?}"),
    }
}
