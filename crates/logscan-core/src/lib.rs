//! Scan a directory tree of `.log` files for lines containing `ERROR` and
//! produce a plain-text report.
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`discover_log_files`] lists every `*.log` entry below a root, sorted by path.
//! 2. [`scan_file`] reads each file and keeps the matching lines. A file that
//!    cannot be read becomes a single `[ANALYZER] Could not read ...` line
//!    rather than an error.
//! 3. [`write_report`] renders the aggregated [`ScanResult`] to a timestamped
//!    file and echoes it to the console.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let result = logscan_core::analyze_logs(Path::new("logs"));
//! let now = chrono::Local::now().naive_local();
//! let outcome = logscan_core::write_report(&result, Path::new("."), now, &mut std::io::stdout())?;
//! println!("{} errors, report at {}", outcome.total, outcome.path.display());
//! # Ok::<(), logscan_core::Error>(())
//! ```

// Error types
pub mod error;

// Data model
pub mod model;

// Pipeline stages
pub mod discovery;
pub mod report;
pub mod scanner;

pub use discovery::{LOG_SUFFIX, discover_log_files, is_log_file, normalize_path};
pub use error::{Error, Result};
pub use model::{ErrorRecord, FileErrorCounts, FileScan, ScanResult, sort_by_path};
pub use report::{ReportOutcome, render_report, report_file_name, write_report};
pub use scanner::{ERROR_MARKER, read_error_lines, scan_file};

use std::path::Path;
use tracing::debug;

/// Discover and scan every log file under `root`, in path order.
pub fn analyze_logs(root: &Path) -> ScanResult {
    let mut result = ScanResult::new();

    for path in discover_log_files(root) {
        let scan = scan_file(&path);
        result.record(&path.display().to_string(), scan);
    }

    debug!(
        root = %root.display(),
        files = result.per_file_counts().len(),
        total = result.total(),
        "analysis complete"
    );
    result
}
