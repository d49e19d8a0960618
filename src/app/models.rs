//! Data models for POS report parsing
//!
//! This module contains the report type registry, the validated identity key
//! type, and the structured output tree produced by the parsers. Every output
//! type serializes to JSON with numeric fields as numbers and absent fields as
//! explicit nulls; identity-keyed collections are `BTreeMap`s so that
//! serialization of the same input is byte-identical across runs.

use crate::constants::IDENTITY_KEY_MAX_LEN;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

// =============================================================================
// Report Type Registry
// =============================================================================

/// Closed registry of known report type codes
///
/// One variant per report the back-office system emits. Five layouts are
/// fully specified; the remaining codes are registered but parse to an empty
/// body until their column layouts have been derived from sample documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    /// RPT001 - Employee sales report (employee/salesrep sales and invoice counts)
    EmployeeSales,
    /// RPT002 - Transaction register
    TransactionRegister,
    /// RPT003 - Transaction activity by quarter hour
    QuarterHourActivity,
    /// RPT004 - Sales journal
    SalesJournal,
    /// RPT005 - Sales posted (day sales info)
    SalesPosted,
    /// RPT006 - Sales by department
    SalesByDepartment,
    /// RPT008 - Received on account
    ReceivedOnAccount,
    /// RPT012 - Saved invoice report
    SavedInvoices,
    /// RPT013 - Inventory status
    InventoryStatus,
    /// RPT015 - Special order communication report
    SpecialOrderCommunication,
    /// RPT017 - Daily reportable sales
    DailyReportableSales,
    /// RPT077 - Cash report
    CashReport,
    /// RPT078 - Inventory activity
    InventoryActivity,
    /// RPT079 - Checks
    Checks,
    /// RPT080 - Payment cards
    PaymentCards,
    /// RPT082 - Price overrides
    PriceOverrides,
    /// RPT083 - Inventory effectiveness
    InventoryEffectiveness,
    /// RPT113 - Uncataloged report, no description in the source system
    Report113,
    /// RPT121 - Return defective / labor claim
    ReturnDefective,
    /// RPT130 - Special invoice report
    SpecialInvoices,
    /// RPT203 - Transfers invoiced (interstore)
    TransfersInvoiced,
}

impl ReportType {
    /// All registered report types
    pub const ALL: &[ReportType] = &[
        ReportType::EmployeeSales,
        ReportType::TransactionRegister,
        ReportType::QuarterHourActivity,
        ReportType::SalesJournal,
        ReportType::SalesPosted,
        ReportType::SalesByDepartment,
        ReportType::ReceivedOnAccount,
        ReportType::SavedInvoices,
        ReportType::InventoryStatus,
        ReportType::SpecialOrderCommunication,
        ReportType::DailyReportableSales,
        ReportType::CashReport,
        ReportType::InventoryActivity,
        ReportType::Checks,
        ReportType::PaymentCards,
        ReportType::PriceOverrides,
        ReportType::InventoryEffectiveness,
        ReportType::Report113,
        ReportType::ReturnDefective,
        ReportType::SpecialInvoices,
        ReportType::TransfersInvoiced,
    ];

    /// Three-digit report type code
    pub fn code(&self) -> &'static str {
        match self {
            ReportType::EmployeeSales => "001",
            ReportType::TransactionRegister => "002",
            ReportType::QuarterHourActivity => "003",
            ReportType::SalesJournal => "004",
            ReportType::SalesPosted => "005",
            ReportType::SalesByDepartment => "006",
            ReportType::ReceivedOnAccount => "008",
            ReportType::SavedInvoices => "012",
            ReportType::InventoryStatus => "013",
            ReportType::SpecialOrderCommunication => "015",
            ReportType::DailyReportableSales => "017",
            ReportType::CashReport => "077",
            ReportType::InventoryActivity => "078",
            ReportType::Checks => "079",
            ReportType::PaymentCards => "080",
            ReportType::PriceOverrides => "082",
            ReportType::InventoryEffectiveness => "083",
            ReportType::Report113 => "113",
            ReportType::ReturnDefective => "121",
            ReportType::SpecialInvoices => "130",
            ReportType::TransfersInvoiced => "203",
        }
    }

    /// Human-readable report type label used in output metadata
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::EmployeeSales => "Employee Sales",
            ReportType::TransactionRegister => "Transaction Register",
            ReportType::QuarterHourActivity => "Transaction by Quarter Hour",
            ReportType::SalesJournal => "Sales Journal",
            ReportType::SalesPosted => "Sales Posted",
            ReportType::SalesByDepartment => "Sales by Department",
            ReportType::ReceivedOnAccount => "Received on Account",
            ReportType::SavedInvoices => "Saved Invoice Report",
            ReportType::InventoryStatus => "Inventory Status",
            ReportType::SpecialOrderCommunication => "Special Order Communication Report",
            ReportType::DailyReportableSales => "Daily Reportable Sales",
            ReportType::CashReport => "Cash Report",
            ReportType::InventoryActivity => "Inventory Activity",
            ReportType::Checks => "Checks",
            ReportType::PaymentCards => "Payment Cards",
            ReportType::PriceOverrides => "Price Overrides",
            ReportType::InventoryEffectiveness => "Inventory Effectiveness",
            ReportType::Report113 => "Report 113",
            ReportType::ReturnDefective => "Return Defective / Labor Claim",
            ReportType::SpecialInvoices => "Special Invoice Report",
            ReportType::TransfersInvoiced => "Transfers Invoiced",
        }
    }

    /// Look up a report type from its code
    ///
    /// A case-insensitive `RPT` prefix is stripped before matching the
    /// remaining digits. Unknown codes are a hard failure for the call.
    pub fn from_code(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let digits = match trimmed.get(..3) {
            Some(prefix) if trimmed.len() > 3 && prefix.eq_ignore_ascii_case("rpt") => {
                &trimmed[3..]
            }
            _ => trimmed,
        };

        ReportType::ALL
            .iter()
            .find(|report_type| report_type.code() == digits)
            .copied()
            .ok_or_else(|| Error::unsupported_report_type(raw))
    }
}

impl FromStr for ReportType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ReportType::from_code(s)
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RPT{}", self.code())
    }
}

// =============================================================================
// Identity Keys
// =============================================================================

/// Validated employee/salesrep identity key
///
/// A token is accepted as an identity key when it is all digits, or
/// alphanumeric with at most six characters. The same predicate decides
/// whether a scanned line is a data line at all, so construction failure is
/// absorbed by the scanners rather than surfaced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SalesId(String);

impl SalesId {
    /// Check the acceptance predicate without constructing a key
    pub fn is_valid(token: &str) -> bool {
        !token.is_empty()
            && (token.chars().all(|c| c.is_ascii_digit())
                || (token.chars().all(|c| c.is_ascii_alphanumeric())
                    && token.len() <= IDENTITY_KEY_MAX_LEN))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, yielding the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for SalesId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if SalesId::is_valid(token) {
            Ok(SalesId(token.to_string()))
        } else {
            Err(Error::invalid_identity_key(token))
        }
    }
}

impl std::fmt::Display for SalesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Report Metadata
// =============================================================================

/// Report-level metadata extracted from page headers
///
/// Every field tolerates absence: a missing delimiter or unparsable token
/// leaves the field unset rather than failing the report. The first non-empty
/// extraction wins; `page_count` alone is updated on every page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Report date and time, first two tokens of the header joined by a space
    pub report_date: Option<String>,

    /// Store identifier from the second header line
    pub store_id: Option<String>,

    /// Store name with the accounting-day marker stripped
    pub store_name: Option<String>,

    /// Accounting day token following the accounting-day delimiter
    pub accounting_day: Option<String>,

    /// Human-readable report type label
    pub report_type_label: Option<String>,

    /// Reference month captured from a "Last <Month>-" header line
    pub last_month: Option<String>,

    /// Most recently extracted page number
    pub page_count: Option<i64>,
}

// =============================================================================
// Structured Report Tree
// =============================================================================

/// One parsed report instance: a (store, date, report-type) document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportInstance {
    /// Three-digit report type code
    pub report_type_code: String,

    /// Header metadata
    pub metadata: Metadata,

    /// Layout-specific report body
    pub body: ReportBody,
}

impl ReportInstance {
    /// Serialize the report to a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        // Serialization of this tree cannot fail: no maps with non-string
        // keys, no non-finite floats are ever constructed by the parsers.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Layout-specific report body, one variant per fully specified layout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportBody {
    EmployeeSales(EmployeeSalesReport),
    TransactionRegister(TransactionRegisterReport),
    QuarterHourActivity(QuarterHourReport),
    SalesJournal(SalesJournalReport),
    InventoryEffectiveness(InventoryEffectivenessReport),
    /// Registered report type whose column layout has not been encoded yet
    Unspecified(UnspecifiedReport),
}

/// Empty body for report types without an encoded layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnspecifiedReport {}

// =============================================================================
// RPT001 - Employee Sales
// =============================================================================

/// Employee sales report body: per-person records, section totals, and the
/// optional memo-delivery aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSalesReport {
    /// Employee records keyed by identity
    pub employees: BTreeMap<String, PersonRecord>,

    /// Salesrep records keyed by identity
    pub salesreps: BTreeMap<String, PersonRecord>,

    /// Store-wide totals per section
    pub totals: EmployeeSalesTotals,

    /// Memo of delivery sales aggregate bucket
    pub memo_delivery_sales: MemoDeliverySales,
}

/// One employee or salesrep row pair: sales metrics and invoice counts are
/// printed in separate tables and either may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub sales: Option<SalesMetrics>,
    pub invoice: Option<InvoiceMetrics>,
}

/// Store-wide total rows, same shape as an individual record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSalesTotals {
    pub employee: PersonRecord,
    pub salesrep: PersonRecord,
}

/// Sales-metric columns for one employee/salesrep row
///
/// The trailing last-year block is only printed on some reports; its fields
/// stay absent when the row is short.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesMetrics {
    pub today_net_sales: Option<f64>,
    pub today_gross_profit: Option<f64>,
    pub today_gp_percent: Option<f64>,
    pub mtd_net_sales: Option<f64>,
    pub mtd_gross_profit: Option<f64>,
    pub mtd_gp_percent: Option<f64>,
    pub mtd_percent_change: Option<f64>,
    pub ytd_net_sales: Option<f64>,
    pub ytd_gross_profit: Option<f64>,
    pub ytd_gp_percent: Option<f64>,
    pub last_year_net_sales: Option<f64>,
    pub last_year_gross_profit: Option<f64>,
    pub last_year_gp_percent: Option<f64>,
}

/// Invoice/line-count columns for one employee/salesrep row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceMetrics {
    pub today_invoices: Option<i64>,
    pub today_lines: Option<i64>,
    pub today_voided: Option<i64>,
    pub today_returns: Option<i64>,
    pub today_returns_value: Option<f64>,
    pub mtd_invoices: Option<i64>,
    pub mtd_lines: Option<i64>,
    pub mtd_voided: Option<i64>,
    pub mtd_returns: Option<i64>,
    pub mtd_returns_value: Option<f64>,
    pub ytd_invoices: Option<i64>,
    pub ytd_lines: Option<i64>,
    pub ytd_voided: Option<i64>,
    pub ytd_returns: Option<i64>,
    pub ytd_returns_value: Option<f64>,
    pub last_year_invoices: Option<i64>,
    pub last_year_lines: Option<i64>,
    pub last_year_voided: Option<i64>,
    pub last_year_returns: Option<i64>,
    pub last_year_returns_value: Option<f64>,
}

/// Memo of delivery sales aggregate; which sub-struct is populated depends on
/// the data kind active when the memo block is printed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoDeliverySales {
    pub sales: Option<MemoDeliverySalesMetrics>,
    pub invoice: Option<MemoDeliveryInvoiceMetrics>,
}

/// Sales-kind memo delivery figures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoDeliverySalesMetrics {
    pub today_net_sales: Option<f64>,
    pub today_gross_profit: Option<f64>,
    pub today_gp_percent: Option<f64>,
    pub mtd_net_sales: Option<f64>,
    pub mtd_gross_profit: Option<f64>,
    pub mtd_gp_percent: Option<f64>,
}

/// Invoice-kind memo delivery counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoDeliveryInvoiceMetrics {
    pub today_invoices: Option<i64>,
    pub today_lines: Option<i64>,
    pub mtd_invoices: Option<i64>,
    pub mtd_lines: Option<i64>,
}

// =============================================================================
// RPT002 - Transaction Register
// =============================================================================

/// Transaction register body: the ordered transaction list plus the memo-page
/// summary columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRegisterReport {
    /// Transactions in report order
    pub transactions: Vec<Transaction>,

    /// Summary parsed from the memo section of the last page
    pub summary: RegisterSummary,
}

/// One transaction register line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction type tag (CASH, CHG, CR MEM, ROA, REFUND)
    pub transaction_type: String,
    pub inv_number: Option<String>,
    pub customer: Option<String>,
    pub employee: Option<String>,
    pub salesrep: Option<String>,
    pub cashier: Option<String>,
    pub purchase_order: Option<String>,
    pub transaction_total: Option<f64>,
    pub net_sales: Option<f64>,
    pub cost: Option<f64>,
    pub gross_profit_amount: Option<f64>,
    pub gross_profit_percent: Option<f64>,
    /// Free-form flag codes from the end of the line
    pub codes: Option<String>,
}

/// Memo-section summary: three side-by-side columns plus transaction counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterSummary {
    /// Sales totals by tender/category name
    pub sales_totals: BTreeMap<String, Option<f64>>,

    /// Rebate amounts by rebate name
    pub rebates: BTreeMap<String, Option<f64>>,

    /// Flag code legend (code letter to description)
    pub codes_legend: BTreeMap<String, String>,

    /// Transaction counts by kind, plus the overall total
    pub transaction_counts: BTreeMap<String, i64>,
}

// =============================================================================
// RPT003 - Transaction Activity by Quarter Hour
// =============================================================================

/// Quarter-hour activity body keyed by time label (e.g. "9:00 AM")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuarterHourReport {
    /// Activity per quarter-hour period
    pub time_periods: BTreeMap<String, TimePeriodRecord>,

    /// Report-level totals from the Total row
    pub totals: QuarterHourTotals,
}

/// Paired today / month-to-date activity for one quarter hour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimePeriodRecord {
    pub today: PeriodActivity,
    pub mtd: PeriodActivity,
}

/// Activity metrics for one period column group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodActivity {
    pub cash_sales: Option<f64>,
    pub charge_sales: Option<f64>,
    pub perc_of_sales: Option<f64>,
    pub number_of_invoices: Option<i64>,
    pub number_of_lines: Option<i64>,
    pub perc_of_lines: Option<f64>,
}

/// Totals row, which omits the percentage columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuarterHourTotals {
    pub today: PeriodTotalActivity,
    pub mtd: PeriodTotalActivity,
}

/// Total-row metrics for one period column group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotalActivity {
    pub cash_sales: Option<f64>,
    pub charge_sales: Option<f64>,
    pub number_of_invoices: Option<i64>,
    pub number_of_lines: Option<i64>,
}

// =============================================================================
// RPT004 - Sales Journal
// =============================================================================

/// Sales journal body: category tree with exactly two levels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesJournalReport {
    /// Categories keyed by name
    pub categories: BTreeMap<String, JournalCategory>,
}

/// One journal category: its own metric row plus subcategory rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalCategory {
    /// Metrics printed on the category line itself, when present
    pub data: Option<JournalMetrics>,

    /// Subcategory metrics keyed by subcategory name
    pub subcategories: BTreeMap<String, JournalMetrics>,
}

/// Journal metric columns: current/last-year/percent-change per period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalMetrics {
    pub today_current: Option<f64>,
    pub today_last_year: Option<f64>,
    pub percent_change: Option<f64>,
    pub mtd_current: Option<f64>,
    pub mtd_last_year: Option<f64>,
    pub mtd_percent_change: Option<f64>,
    pub ytd_current: Option<f64>,
    pub ytd_last_year: Option<f64>,
    pub ytd_percent_change: Option<f64>,
}

// =============================================================================
// RPT083 - Inventory Effectiveness
// =============================================================================

/// Inventory effectiveness body: five fixed sections plus ratings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryEffectivenessReport {
    pub inventory: InventorySections,
    pub ratings: EffectivenessRatings,
}

/// The five named inventory sections, identified by label text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySections {
    pub instore_items: PeriodTotals,
    pub non_instore_items: PeriodTotals,
    pub merchandise_total: PeriodTotals,
    pub lost_sales: PeriodTotals,
    pub total_merchandise_and_lost: PeriodTotals,
}

/// Four period totals for one inventory section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub total_today: Option<i64>,
    pub total_mtd: Option<i64>,
    pub total_ytd: Option<i64>,
    pub total_last_year: Option<i64>,
}

/// Rating percentages from the ratings banner line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessRatings {
    pub today_percent: Option<f64>,
    pub mtd_percent: Option<f64>,
    pub ytd_percent: Option<f64>,
    pub last_year_percent: Option<f64>,
}
