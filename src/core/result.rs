//! Interpretation of one console run: did anything change, and why.
use serde::{Deserialize, Serialize};

use crate::io::log::ToolLog;
use crate::io::report::{GroupChange, RawReport};

/// Outcome of a comparison, built once per run from the captured output and the raw report.
///
/// A missing raw report contributes no change; only the output lines can then
/// signal a problem.
#[derive(Debug, Clone, Default)]
pub struct BitDifferResult {
    pub raw_report: Option<RawReport>,
    pub output: ToolLog,
    pub exit_code: Option<i32>,
}

impl BitDifferResult {
    pub fn new(output: Vec<String>, raw_report: Option<RawReport>) -> Self {
        Self {
            raw_report,
            output: ToolLog::new(output),
            exit_code: None,
        }
    }

    pub fn with_exit_code(mut self, code: Option<i32>) -> Self {
        self.exit_code = code;
        self
    }

    fn report_change(&self) -> Option<GroupChange<'_>> {
        self.raw_report.as_ref()?.first_changed_group()
    }

    fn output_errors(&self) -> Option<String> {
        let lines: Vec<&str> = self.output.error_lines().collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    pub fn has_changes(&self) -> bool {
        self.report_change().is_some() || self.output_errors().is_some()
    }

    /// Error lines from the output when there are any, else the change or error
    /// detail of the first changed group.
    pub fn change_message(&self) -> Option<String> {
        self.output_errors()
            .or_else(|| self.report_change()?.message().map(str::to_string))
    }

    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            has_changes: self.has_changes(),
            message: self.change_message(),
            exit_code: self.exit_code,
            report_available: self.raw_report.is_some(),
            error_lines: self.output.error_lines().map(str::to_string).collect(),
            compared_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Serializable verdict, printed by the CLI with `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub has_changes: bool,
    pub message: Option<String>,
    pub exit_code: Option<i32>,
    pub report_available: bool,
    pub error_lines: Vec<String>,
    pub compared_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_OUTPUT: [&str; 6] = [
        "Version 1.5.0.4 (29.05.2019)",
        r"Loading assembly C:\src\MyDll1.dll",
        r"Loading assembly C:\src\MyDll2.dll",
        r"Writing XML normal report to C:\src\comparison.xml",
        r"Writing XML raw report to C:\src\311fa9a8-e6eb-498d-9288-3f8a14fdef96.xml",
        "Done!",
    ];

    fn output() -> Vec<String> {
        DEFAULT_OUTPUT.map(String::from).to_vec()
    }

    fn report(xml: &str) -> Option<RawReport> {
        Some(RawReport::parse_str(xml).unwrap())
    }

    #[test]
    fn absent_report_and_clean_output_has_no_changes() {
        let sut = BitDifferResult::new(output(), None);
        assert!(!sut.has_changes());
        assert_eq!(sut.change_message(), None);
    }

    #[test]
    fn absent_report_and_no_output_has_no_changes() {
        let sut = BitDifferResult::new(Vec::new(), None);
        assert!(!sut.has_changes());
    }

    #[test]
    fn empty_report_with_error_output_has_changes() {
        let mut lines = output();
        lines.insert(
            5,
            r#"ERROR : Die Datei oder Assembly "Syncfusion.Licensing, Version=16.2.0.46" wurde nicht gefunden."#
                .to_string(),
        );
        let sut = BitDifferResult::new(lines, report(""));
        assert!(sut.has_changes());
        assert!(sut.change_message().unwrap().contains("ERROR"));
    }

    #[test]
    fn empty_report_has_no_changes() {
        let sut = BitDifferResult::new(output(), report(""));
        assert!(!sut.has_changes());
    }

    #[test]
    fn error_output_wins_over_report_message() {
        let sut = BitDifferResult::new(
            vec!["error one".into(), "Done".into(), "ERROR two".into()],
            report(
                r#"<AssemblyComparison><Groups><Group Change="MembersAdded" /></Groups></AssemblyComparison>"#,
            ),
        );
        assert!(sut.has_changes());
        assert_eq!(sut.change_message().as_deref(), Some("error one\nERROR two"));
    }

    #[test]
    fn report_message_used_without_error_output() {
        let sut = BitDifferResult::new(
            output(),
            report(
                r#"<AssemblyComparison><Groups><Group Change="MembersAdded" /></Groups></AssemblyComparison>"#,
            ),
        );
        assert_eq!(sut.change_message().as_deref(), Some("MembersAdded"));
    }

    #[test]
    fn has_errors_attribute_counts_whatever_its_value() {
        let sut = BitDifferResult::new(
            output(),
            report(
                r#"<AssemblyComparison><Groups><Group Change="None" HasErrors="False" /></Groups></AssemblyComparison>"#,
            ),
        );
        assert!(sut.has_changes());
        assert_eq!(sut.change_message().as_deref(), Some("None"));
    }

    #[test]
    fn summary_reflects_verdict() {
        let sut = BitDifferResult::new(vec!["ERROR : dependency not found".into()], None)
            .with_exit_code(Some(1));
        let summary = sut.summary();
        assert!(summary.has_changes);
        assert!(!summary.report_available);
        assert_eq!(summary.exit_code, Some(1));
        assert_eq!(summary.error_lines, ["ERROR : dependency not found"]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["message"], "ERROR : dependency not found");
    }
}
