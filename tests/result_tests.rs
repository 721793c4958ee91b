//! Result interpretation against report fixtures
//!
//! These tests load raw reports as the console writes them and check the
//! verdict together with typical console output.

use std::path::PathBuf;

use bitdiffer_runner::{BitDifferResult, RawReport};

const DEFAULT_OUTPUT: [&str; 6] = [
    "Version 1.5.0.4 (29.05.2019)",
    r"Loading assembly C:\src\MyDll1.dll",
    r"Loading assembly C:\src\MyDll2.dll",
    r"Writing XML normal report to C:\src\comparison.xml",
    r"Writing XML raw report to C:\src\311fa9a8-e6eb-498d-9288-3f8a14fdef96.xml",
    "Done!",
];

fn output() -> Vec<String> {
    DEFAULT_OUTPUT.iter().map(|s| s.to_string()).collect()
}

fn fixture(name: &str) -> RawReport {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    RawReport::from_file(&path).unwrap()
}

#[test]
fn test_member_change_breaking_report_has_changes() {
    let sut = BitDifferResult::new(output(), Some(fixture("MemberChangeBreaking.xml")));

    assert!(sut.has_changes());
    assert!(
        sut.change_message()
            .unwrap()
            .contains("MembersChangedBreaking")
    );
}

#[test]
fn test_no_changes_report_has_no_changes() {
    let sut = BitDifferResult::new(output(), Some(fixture("NoChanges.xml")));

    assert!(!sut.has_changes());
    assert!(sut.change_message().unwrap_or_default().is_empty());
}

#[test]
fn test_load_error_report_uses_error_detail() {
    let sut = BitDifferResult::new(output(), Some(fixture("LoadError.xml")));

    assert!(sut.has_changes());
    assert_eq!(
        sut.change_message().as_deref(),
        Some("Could not load file or assembly 'Syncfusion.Licensing, Version=16.2.0.46'")
    );
}

#[test]
fn test_absent_report_with_error_line_has_changes() {
    let mut lines = output();
    lines.push("ERROR : dependency not found".to_string());
    let sut = BitDifferResult::new(lines, None);

    assert!(sut.has_changes());
    assert!(sut.change_message().unwrap().contains("ERROR"));
}

#[test]
fn test_absent_report_with_clean_output_has_no_changes() {
    let sut = BitDifferResult::new(output(), None);

    assert!(!sut.has_changes());
    assert_eq!(sut.change_message(), None);
}

#[test]
fn test_error_lines_take_precedence_over_report() {
    let mut lines = output();
    lines.push("Error: could not resolve dependency".to_string());
    let sut = BitDifferResult::new(lines, Some(fixture("MemberChangeBreaking.xml")));

    assert!(sut.has_changes());
    assert_eq!(
        sut.change_message().as_deref(),
        Some("Error: could not resolve dependency")
    );
}
