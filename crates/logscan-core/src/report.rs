use crate::error::{Error, Result};
use crate::model::ScanResult;
use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const REPORT_TITLE: &str = "Log Analyzer Report";
pub const NO_ERRORS_LINE: &str = "✅ No errors found in log files.";

/// Where the report landed and how many errors it lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub path: PathBuf,
    pub total: usize,
}

/// Render the full report text. Pure: the timestamp is supplied by the caller.
pub fn render_report(result: &ScanResult, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_sections(&mut out, result, generated_at);
    out
}

fn write_sections(
    out: &mut String,
    result: &ScanResult,
    generated_at: NaiveDateTime,
) -> std::fmt::Result {
    let total = result.total();

    writeln!(out, "{}", REPORT_TITLE)?;
    writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%dT%H:%M:%S"))?;
    writeln!(out)?;
    writeln!(out, "Total number of errors: {}", total)?;
    writeln!(out)?;

    if total == 0 {
        return writeln!(out, "{}", NO_ERRORS_LINE);
    }

    writeln!(out, "Per-file error counts:")?;
    for (path, count) in result.sorted_counts() {
        writeln!(out, "  {}: {}", path, count)?;
    }

    writeln!(out)?;
    writeln!(out, "Here are all the errors:")?;
    writeln!(out)?;
    for record in result.records() {
        writeln!(out, "{} :: {}", record.path, record.line)?;
    }

    Ok(())
}

/// `log_report_<YYYYMMDD_HHMMSS>.txt`
pub fn report_file_name(generated_at: NaiveDateTime) -> String {
    format!("log_report_{}.txt", generated_at.format("%Y%m%d_%H%M%S"))
}

/// Write the report into `out_dir` (created if needed) and echo the same
/// text to `console`.
///
/// Any failure here is fatal for the run; nothing is retried.
pub fn write_report<W: Write>(
    result: &ScanResult,
    out_dir: &Path,
    generated_at: NaiveDateTime,
    console: &mut W,
) -> Result<ReportOutcome> {
    let rendered = render_report(result, generated_at);

    fs::create_dir_all(out_dir).map_err(|err| Error::output(out_dir, err))?;

    let path = out_dir.join(report_file_name(generated_at));
    fs::write(&path, rendered.as_bytes()).map_err(|err| Error::output(&path, err))?;

    console
        .write_all(rendered.as_bytes())
        .and_then(|_| console.flush())
        .map_err(|err| Error::output("<stdout>", err))?;

    let total = result.total();
    info!(path = %path.display(), total, "report written");

    Ok(ReportOutcome { path, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileScan;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn sample_result() -> ScanResult {
        let mut result = ScanResult::new();
        result.record(
            "logs/b.log",
            FileScan::from_lines(vec!["ERROR: timeout".into(), "ERROR: timeout".into()]),
        );
        result.record(
            "logs/a.log",
            FileScan::from_lines(vec!["ERROR: disk full".into()]),
        );
        result
    }

    #[test]
    fn test_render_report_with_errors() {
        let rendered = render_report(&sample_result(), at(3, 4, 5));

        insta::assert_snapshot!(rendered, @r"
        Log Analyzer Report
        Generated: 2024-01-02T03:04:05

        Total number of errors: 3

        Per-file error counts:
          logs/a.log: 1
          logs/b.log: 2

        Here are all the errors:

        logs/b.log :: ERROR: timeout
        logs/b.log :: ERROR: timeout
        logs/a.log :: ERROR: disk full
        ");
    }

    #[test]
    fn test_render_report_without_errors() {
        let rendered = render_report(&ScanResult::new(), at(23, 59, 1));

        assert_eq!(
            rendered,
            "Log Analyzer Report\n\
             Generated: 2024-01-02T23:59:01\n\
             \n\
             Total number of errors: 0\n\
             \n\
             ✅ No errors found in log files.\n"
        );
        assert!(!rendered.contains("Per-file error counts"));
    }

    #[test]
    fn test_report_file_name_uses_compact_timestamp() {
        assert_eq!(report_file_name(at(3, 4, 5)), "log_report_20240102_030405.txt");
    }

    #[test]
    fn test_write_report_creates_directory_and_mirrors_console() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("reports/nested");
        let mut console = Vec::new();

        let outcome =
            write_report(&sample_result(), &out_dir, at(3, 4, 5), &mut console).unwrap();

        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.path, out_dir.join("log_report_20240102_030405.txt"));
        let written = std::fs::read_to_string(&outcome.path).unwrap();
        assert_eq!(written, String::from_utf8(console).unwrap());
        assert_eq!(written, render_report(&sample_result(), at(3, 4, 5)));
    }

    #[test]
    fn test_write_report_fails_when_directory_cannot_be_created() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "file in the way").unwrap();
        let mut console = Vec::new();

        let out_dir = blocker.join("reports");
        let err = write_report(&ScanResult::new(), &out_dir, at(0, 0, 0), &mut console).unwrap_err();

        assert!(matches!(err, Error::Output { .. }));
        assert!(console.is_empty());
    }
}
