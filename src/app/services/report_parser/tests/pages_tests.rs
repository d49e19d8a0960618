//! Tests for form-feed page segmentation

use super::super::pages::split_pages;

#[test]
fn test_split_on_form_feed() {
    let raw = "page one\nline two\u{c}page two\nline two";
    let pages = split_pages(raw);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].index, 0);
    assert_eq!(pages[0].text, "page one\nline two");
    assert_eq!(pages[1].index, 1);
    assert_eq!(pages[1].text, "page two\nline two");
}

#[test]
fn test_document_without_form_feed_is_single_page() {
    let pages = split_pages("just one page\nwith two lines");

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].text, "just one page\nwith two lines");
}

#[test]
fn test_trailing_form_feed_drops_empty_page() {
    let pages = split_pages("page one\u{c}page two\u{c}");

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].text, "page two");
}

#[test]
fn test_interior_empty_page_is_kept() {
    let pages = split_pages("page one\u{c}\u{c}page three");

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[1].text, "");
}

#[test]
fn test_empty_input_yields_no_pages() {
    // A single empty segment is the trailing artifact and is dropped
    assert!(split_pages("").is_empty());
}

#[test]
fn test_trimmed_lines_strips_page_whitespace() {
    let pages = split_pages("\n\n  header line\ndata line\n\n");

    let trimmed = pages[0].trimmed_lines();
    assert_eq!(trimmed, vec!["header line", "data line"]);
}

#[test]
fn test_raw_lines_keep_indentation() {
    let pages = split_pages("\n  Category\n    Subcategory");

    let lines = pages[0].lines();
    assert_eq!(lines, vec!["", "  Category", "    Subcategory"]);
}
