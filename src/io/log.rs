use std::path::PathBuf;

/// Captured standard output of one console run, one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolLog {
    pub lines: Vec<String>,
}

impl ToolLog {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn from_stdout(stdout: &[u8]) -> Self {
        let text = String::from_utf8_lossy(stdout);
        Self::new(text.lines().map(str::to_string).collect())
    }

    /// Lines starting with `error`, case-insensitively.
    pub fn error_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| is_error_line(line))
    }

    /// Report files the console announced with `Writing <kind> report to <path>`,
    /// except the raw report requested through `-raw`.
    pub fn written_reports(&self) -> Vec<PathBuf> {
        self.lines
            .iter()
            .filter_map(|line| parse_written_report(line))
            .filter(|(kind, _)| !kind.to_ascii_lowercase().contains("raw"))
            .map(|(_, path)| PathBuf::from(path))
            .collect()
    }
}

pub fn is_error_line(line: &str) -> bool {
    line.get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("error"))
}

fn parse_written_report(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix("Writing ")?;
    let (kind, path) = rest.split_once(" report to ")?;
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    Some((kind, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_output() -> ToolLog {
        ToolLog::new(
            [
                "Version 1.5.0.4 (29.05.2019)",
                r"Loading assembly C:\src\MyDll1.dll",
                r"Loading assembly C:\src\MyDll2.dll",
                r"Writing XML normal report to C:\src\comparison.xml",
                r"Writing XML raw report to C:\src\311fa9a8-e6eb-498d-9288-3f8a14fdef96.xml",
                "Done!",
            ]
            .map(String::from)
            .to_vec(),
        )
    }

    #[test]
    fn regular_output_has_no_errors() {
        assert_eq!(default_output().error_lines().count(), 0);
    }

    #[test]
    fn error_prefix_is_case_insensitive() {
        let log = ToolLog::new(
            ["ERROR : dependency not found", "error: x", "Error", "an error", " ERROR indented", "Err"]
                .map(String::from)
                .to_vec(),
        );
        let errors: Vec<&str> = log.error_lines().collect();
        assert_eq!(errors, ["ERROR : dependency not found", "error: x", "Error"]);
    }

    #[test]
    fn multibyte_lines_do_not_panic() {
        assert!(!is_error_line("Fehlerä"));
        assert!(!is_error_line("ä"));
        assert!(is_error_line("errorä"));
    }

    #[test]
    fn stdout_is_split_into_lines() {
        let log = ToolLog::from_stdout(b"Version 1.5\r\nERROR : boom\nDone!\n");
        assert_eq!(log.lines, ["Version 1.5", "ERROR : boom", "Done!"]);
    }

    #[test]
    fn written_reports_exclude_raw() {
        let reports = default_output().written_reports();
        assert_eq!(reports, [PathBuf::from(r"C:\src\comparison.xml")]);
    }
}
