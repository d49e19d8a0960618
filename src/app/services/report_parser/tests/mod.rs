//! Test utilities and report fixtures for the report parser
//!
//! This module provides the fixture builders used across the test modules.
//! Fixtures are built field-by-field at byte offsets so each layout test
//! exercises the exact column contract of its report type.

mod pages_tests;
mod transaction_register_tests;

/// Install the fmt subscriber once so parser diagnostics surface under
/// `cargo test -- --nocapture`
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Build a line by placing each text fragment at its byte offset
pub fn line_with_fields(fields: &[(usize, &str)]) -> String {
    let mut line = String::new();
    for &(start, text) in fields {
        while line.len() < start {
            line.push(' ');
        }
        line.push_str(text);
    }
    line
}

/// Join page texts with form-feed separators
pub fn join_pages(pages: &[String]) -> String {
    pages.join("\u{c}")
}

/// A three-page employee sales report: sales page, invoice page, memo page
///
/// The memo page carries no column-header signature, so the invoice data
/// kind must survive the page boundary.
pub fn employee_sales_report() -> String {
    let sales_page = [
        "12/02/24  09:15                         Last Jan- Dec Comparison".to_string(),
        "1042 - MAIN STREET AUTO              Accounting Day - 27                 Page 1"
            .to_string(),
        "EMPLOYEE SALES REPORT".to_string(),
        String::new(),
        "Emp   Name                Net      Gross     Net".to_string(),
        "*Employee*".to_string(),
        "101 1200.50 350.25 29.2 15000.00 4200.00 28.0 5.5 98000.00 27500.00 28.1".to_string(),
        "102 800.00 !!!!!! 25.0 9000.00 2500.00 27.8 - 45000.00 12000.00 26.7".to_string(),
        "Total 2000.50 600.25 29.0 24000.00 6700.00 27.9 4.4 143000.00 39500.00 27.6 1950.00 580.00 27.4".to_string(),
        "*Salesrep*".to_string(),
        "S1 900.00 250.00 27.8 8000.00 2200.00 27.5 3.1 52000.00 14300.00 27.5 850.00 230.00 27.1".to_string(),
        "Total 900.00 250.00 27.8 8000.00 2200.00 27.5 3.1 52000.00 14300.00 27.5 850.00 230.00 27.1".to_string(),
    ]
    .join("\n");

    let invoice_page = [
        "12/02/24  09:15".to_string(),
        "1042 - MAIN STREET AUTO              Accounting Day - 27                 Page 2"
            .to_string(),
        "EMPLOYEE SALES REPORT".to_string(),
        String::new(),
        "Emp      # Inv   Lines   Vd   Ret   Returns".to_string(),
        "*Employee*".to_string(),
        "101 12 45 1 2 150.00 240 890 15 22 1800.50 2800 10200 160 250 21000.00 11 40 1 2 140.00"
            .to_string(),
        "Total 50 180 4 8 600.00 960 3560 60 88 7200.00 11200 40800 640 1000 84000.00 44 160 4 8 560.00"
            .to_string(),
        "*Salesrep*".to_string(),
        "S1 5 20 0 1 75.00 100 400 5 10 900.00 1200 4800 60 120 10500.00 4 18 0 1 70.00"
            .to_string(),
        "Total 5 20 0 1 75.00 100 400 5 10 900.00 1200 4800 60 120 10500.00 4 18 0 1 70.00"
            .to_string(),
    ]
    .join("\n");

    let memo_page = [
        "12/02/24  09:15".to_string(),
        "1042 - MAIN STREET AUTO              Accounting Day - 27                 Page 3"
            .to_string(),
        "EMPLOYEE SALES REPORT".to_string(),
        String::new(),
        "Memo of Delivery Sales".to_string(),
        "  # Inv   Lines    # Inv   Lines".to_string(),
        "    3      12       28      95".to_string(),
        "End of Report".to_string(),
    ]
    .join("\n");

    join_pages(&[sales_page, invoice_page, memo_page])
}

/// A two-page transaction register with a memo summary on the last page
pub fn transaction_register_report() -> String {
    let cash_line = line_with_fields(&[
        (0, "CASH"),
        (8, "123456"),
        (15, "C100"),
        (24, "55"),
        (31, "7"),
        (39, "55"),
        (47, "PO-9"),
        (75, "125.50"),
        (87, "110.00"),
        (97, "80.00"),
        (107, "30.00"),
        (117, "27.3"),
        (125, "T"),
    ]);
    let credit_memo_line = line_with_fields(&[
        (0, "CR MEM"),
        (8, "123457"),
        (15, "C101"),
        (24, "55"),
        (31, "7"),
        (39, "55"),
        (75, "45.00"),
        (87, "40.00"),
        (97, "0.00"),
        (107, "5.00"),
        (117, "11.1"),
    ]);
    let charge_line = line_with_fields(&[
        (0, "CHG"),
        (8, "123458"),
        (15, "C102"),
        (24, "61"),
        (31, "8"),
        (39, "61"),
        (75, "310.00"),
        (87, "280.00"),
        (97, "200.00"),
        (107, "80.00"),
        (117, "28.6"),
    ]);

    let first_page = [
        "12/03/24  08:00".to_string(),
        "1042 - MAIN STREET AUTO              Accounting Day - 28                 Page 1"
            .to_string(),
        "TRANSACTION REGISTER".to_string(),
        String::new(),
        "Type    Inv #  Customer  Employee".to_string(),
        cash_line,
        credit_memo_line,
    ]
    .join("\n");

    let memo_page = [
        "12/03/24  08:00".to_string(),
        "1042 - MAIN STREET AUTO              Accounting Day - 28                 Page 2"
            .to_string(),
        charge_line,
        "                  -----MEMO-----".to_string(),
        String::new(),
        line_with_fields(&[
            (0, "Cash"),
            (20, "1250.00"),
            (48, "Core Rebate"),
            (70, "45.00"),
            (85, "T = Taxable"),
        ]),
        line_with_fields(&[
            (0, "Charge Sales"),
            (20, "890.00"),
            (48, "Mfg Rebate"),
            (70, "12.50"),
            (85, "R = Return"),
        ]),
        "   #  Transactions".to_string(),
        line_with_fields(&[(0, "Number of Cash Transactions"), (71, "12")]),
        line_with_fields(&[(0, "Total Transaction Count"), (71, "25")]),
        "End of Report".to_string(),
    ]
    .join("\n");

    join_pages(&[first_page, memo_page])
}

/// A single-page quarter-hour activity report with two periods and totals
pub fn quarter_hour_report() -> String {
    let header = line_with_fields(&[(3, "Time"), (20, "Today"), (80, "MTD")]);
    let first_row = line_with_fields(&[
        (0, "9:00 AM"),
        (10, "150.00"),
        (20, "75.50"),
        (30, "5.2"),
        (37, "12"),
        (44, "40"),
        (54, "4.8"),
        (67, "3200.00"),
        (77, "1500.00"),
        (87, "5.0"),
        (94, "260"),
        (101, "900"),
        (111, "4.9"),
    ]);
    let second_row = line_with_fields(&[
        (0, "9:15 AM"),
        (10, "!!!!!!"),
        (20, "85.00"),
        (30, "-"),
        (37, "15"),
        (44, "55"),
        (54, "5.1"),
        (67, "3600.00"),
        (77, "1700.00"),
        (87, "5.3"),
        (94, "290"),
        (101, "1010"),
        (111, "5.2"),
    ]);
    let total_row = line_with_fields(&[
        (0, "Total"),
        (10, "350.00"),
        (20, "160.50"),
        (37, "27"),
        (44, "95"),
        (67, "6800.00"),
        (77, "3300.00"),
        (95, "560"),
        (102, "1950"),
    ]);

    [
        "12/04/24  07:45".to_string(),
        "1042 - MAIN STREET AUTO              Accounting Day - 29                 Page 1"
            .to_string(),
        "TRANSACTION ACTIVITY BY QUARTER HOUR".to_string(),
        String::new(),
        header,
        "   ---------".to_string(),
        first_row,
        second_row,
        String::new(),
        total_row,
        "End of Report".to_string(),
    ]
    .join("\n")
}

/// A two-page sales journal: the category tree opens on page one and a
/// subcategory continues onto page two before the closing legend
pub fn sales_journal_report() -> String {
    let first_page = [
        "12/05/24  06:30".to_string(),
        "1042 - MAIN STREET AUTO              Accounting Day - 30                 Page 1"
            .to_string(),
        "SALES JOURNAL".to_string(),
        line_with_fields(&[(40, "Today"), (70, "MTD"), (100, "YTD")]),
        "  ------------".to_string(),
        line_with_fields(&[
            (2, "Merchandise Sales"),
            (33, "1200.50"),
            (44, "1100.00"),
            (56, "9.1"),
            (64, "15000.00"),
            (75, "14000.00"),
            (87, "7.1"),
            (95, "98000.00"),
            (107, "91000.00"),
            (120, "7.7"),
        ]),
        line_with_fields(&[
            (4, "Cost"),
            (33, "800.00"),
            (44, "760.00"),
            (56, "-"),
            (64, "10200.00"),
            (75, "9800.00"),
            (87, "4.1"),
            (95, "67000.00"),
            (107, "63000.00"),
            (120, "6.3"),
        ]),
        line_with_fields(&[(2, "Labor Sales")]),
        line_with_fields(&[(4, "Install"), (33, "400.00"), (64, "5200.00")]),
        String::new(),
    ]
    .join("\n");

    let second_page = [
        line_with_fields(&[(4, "Freight"), (33, "60.00")]),
        "** T = Total".to_string(),
    ]
    .join("\n");

    join_pages(&[first_page, second_page])
}

/// A single-page inventory effectiveness report, no form feeds
pub fn inventory_effectiveness_report() -> String {
    [
        line_with_fields(&[(0, "12/06/24 05:15"), (30, "INVENTORY EFFECTIVENESS")]),
        "1042 - MAIN STREET AUTO       Accounting Day - 31".to_string(),
        String::new(),
        line_with_fields(&[
            (8, "Merchandise Inventory"),
            (58, "Today"),
            (68, "MTD"),
            (81, "YTD"),
            (94, "Last Year"),
        ]),
        "   ----------------------------------------".to_string(),
        line_with_fields(&[
            (3, "Instore Items"),
            (56, "1,250"),
            (66, "38,500"),
            (79, "425,000"),
            (92, "410,000"),
        ]),
        line_with_fields(&[
            (3, "Non-Instore Items"),
            (56, "310"),
            (66, "9,800"),
            (79, "101,000"),
            (92, "98,500"),
        ]),
        "An item is considered instore when it is stocked on hand.".to_string(),
        line_with_fields(&[
            (3, "Merchandise Total"),
            (56, "1,560"),
            (66, "48,300"),
            (79, "526,000"),
            (92, "508,500"),
        ]),
        line_with_fields(&[
            (3, "Lost Sales"),
            (56, "45"),
            (66, "1,200"),
            (79, "14,000"),
            (92, "13,100"),
        ]),
        line_with_fields(&[
            (3, "Total Merchandise & Lost"),
            (56, "1,605"),
            (66, "49,500"),
            (79, "540,000"),
            (92, "521,600"),
        ]),
        line_with_fields(&[
            (20, "* * Rating * *"),
            (56, "92.5%"),
            (66, "91.0%"),
            (79, "90.2%"),
            (92, "89.9%"),
        ]),
        "End of Report".to_string(),
    ]
    .join("\n")
}
