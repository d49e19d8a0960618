//! RPT003 - Transaction activity by quarter hour
//!
//! One fixed-width row per quarter-hour period, today and month-to-date
//! column groups side by side, closed by a Total row. The table is located
//! by its separator rule under the "Time" column-header line; rows are
//! validated by their time label (a colon plus an AM/PM suffix).

use crate::app::models::{
    Metadata, PeriodActivity, PeriodTotalActivity, QuarterHourReport, ReportBody, TimePeriodRecord,
};
use crate::app::services::report_parser::field_parsers::{column_float, column_int, pad_line, slice_column};
use crate::app::services::report_parser::header;
use crate::app::services::report_parser::pages::split_pages;
use crate::app::services::report_parser::stats::ParseStats;
use crate::constants::END_OF_REPORT_MARKER;

/// Width every data row is padded to before slicing
const ROW_PAD: usize = 120;

/// Time label column
const COL_TIME: (usize, usize) = (0, 9);

pub fn parse(raw: &str, stats: &mut ParseStats) -> (Metadata, ReportBody) {
    let mut metadata = Metadata::default();
    let mut report = QuarterHourReport::default();

    let pages = split_pages(raw);
    stats.pages = pages.len();

    for page in &pages {
        let lines = page.trimmed_lines();

        header::extract_first_page_metadata(&lines, &mut metadata);
        header::extract_page_number(&lines, &mut metadata);

        let Some(data_start) = find_data_start(&lines) else {
            continue;
        };

        for line in &lines[data_start..] {
            let line = pad_line(line, ROW_PAD);

            if line.contains("Total") && line.trim_start().starts_with("Total") {
                report.totals.today = PeriodTotalActivity {
                    cash_sales: column_float(&line, 10, Some(20)),
                    charge_sales: column_float(&line, 20, Some(30)),
                    number_of_invoices: column_int(&line, 37, Some(44)),
                    number_of_lines: column_int(&line, 44, Some(54)),
                };
                report.totals.mtd = PeriodTotalActivity {
                    cash_sales: column_float(&line, 67, Some(77)),
                    charge_sales: column_float(&line, 77, Some(87)),
                    number_of_invoices: column_int(&line, 95, Some(102)),
                    number_of_lines: column_int(&line, 102, None),
                };
                stats.data_records += 1;
                break;
            }

            if line.trim().is_empty()
                || line.contains("---")
                || line.contains('*')
                || line.contains(END_OF_REPORT_MARKER)
            {
                continue;
            }

            let time_period = slice_column(&line, COL_TIME.0, Some(COL_TIME.1)).trim();
            if !is_time_label(time_period) {
                stats.lines_skipped += 1;
                continue;
            }

            let record = TimePeriodRecord {
                today: PeriodActivity {
                    cash_sales: column_float(&line, 10, Some(20)),
                    charge_sales: column_float(&line, 20, Some(30)),
                    perc_of_sales: column_float(&line, 30, Some(37)),
                    number_of_invoices: column_int(&line, 37, Some(44)),
                    number_of_lines: column_int(&line, 44, Some(54)),
                    perc_of_lines: column_float(&line, 54, Some(67)),
                },
                mtd: PeriodActivity {
                    cash_sales: column_float(&line, 67, Some(77)),
                    charge_sales: column_float(&line, 77, Some(87)),
                    perc_of_sales: column_float(&line, 87, Some(94)),
                    number_of_invoices: column_int(&line, 94, Some(101)),
                    number_of_lines: column_int(&line, 101, Some(111)),
                    perc_of_lines: column_float(&line, 111, None),
                },
            };
            report.time_periods.insert(time_period.to_string(), record);
            stats.data_records += 1;
        }
    }

    (metadata, ReportBody::QuarterHourActivity(report))
}

/// Locate the first data row: the line after the separator rule that sits
/// directly under the "Time" column-header line
fn find_data_start(lines: &[&str]) -> Option<usize> {
    (1..lines.len())
        .find(|&i| lines[i].contains("---------") && lines[i - 1].contains("Time"))
        .map(|i| i + 1)
}

/// A valid time label carries a colon and an AM/PM suffix
fn is_time_label(label: &str) -> bool {
    label.contains(':') && (label.contains("AM") || label.contains("PM"))
}
