//! Report type dispatch
//!
//! Entry point of the service: resolve the report type code against the
//! closed registry, run the matching layout parser, and assemble the final
//! report instance. An unknown code is the only hard failure; everything
//! past dispatch degrades per line.

use tracing::{debug, info};

use crate::Result;
use crate::app::models::{ReportInstance, ReportType};
use crate::app::services::report_parser::layouts;
use crate::app::services::report_parser::stats::{ParseOutcome, ParseStats};

/// Parser for fixed-pitch line-printer POS reports
///
/// Stateless; one instance can parse any number of reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportParser;

impl ReportParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a raw report into its structured, JSON-serializable form
    ///
    /// `report_type_code` is the three-digit code, with or without the
    /// `RPT` prefix. Returns [`crate::Error::UnsupportedReportType`] for a
    /// code outside the registry; any other input yields a report, however
    /// empty.
    pub fn parse(&self, report_type_code: &str, raw_text: &str) -> Result<ParseOutcome> {
        let report_type = ReportType::from_code(report_type_code)?;
        info!(%report_type, bytes = raw_text.len(), "parsing report");

        let mut stats = ParseStats::new();
        let (mut metadata, body) = match report_type {
            ReportType::EmployeeSales => layouts::employee_sales::parse(raw_text, &mut stats),
            ReportType::TransactionRegister => {
                layouts::transaction_register::parse(raw_text, &mut stats)
            }
            ReportType::QuarterHourActivity => layouts::quarter_hour::parse(raw_text, &mut stats),
            ReportType::SalesJournal => layouts::sales_journal::parse(raw_text, &mut stats),
            ReportType::InventoryEffectiveness => {
                layouts::inventory_effectiveness::parse(raw_text, &mut stats)
            }
            ReportType::SalesPosted
            | ReportType::SalesByDepartment
            | ReportType::ReceivedOnAccount
            | ReportType::SavedInvoices
            | ReportType::InventoryStatus
            | ReportType::SpecialOrderCommunication
            | ReportType::DailyReportableSales
            | ReportType::CashReport
            | ReportType::InventoryActivity
            | ReportType::Checks
            | ReportType::PaymentCards
            | ReportType::PriceOverrides
            | ReportType::Report113
            | ReportType::ReturnDefective
            | ReportType::SpecialInvoices
            | ReportType::TransfersInvoiced => layouts::parse_unspecified(raw_text, &mut stats),
        };

        metadata.report_type_label = Some(report_type.label().to_string());

        debug!(
            pages = stats.pages,
            data_records = stats.data_records,
            lines_skipped = stats.lines_skipped,
            "report parsed"
        );

        Ok(ParseOutcome {
            report: ReportInstance {
                report_type_code: report_type.code().to_string(),
                metadata,
                body,
            },
            stats,
        })
    }
}
