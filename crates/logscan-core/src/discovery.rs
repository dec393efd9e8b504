use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File name suffix that marks a candidate log file.
pub const LOG_SUFFIX: &str = ".log";

/// True when the entry's file name ends with [`LOG_SUFFIX`].
///
/// Only the name is checked. Directories or dangling links named `*.log`
/// still qualify and are reported as unreadable by the scanner.
pub fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(LOG_SUFFIX.as_bytes()))
}

/// Drop `.` components, so `./logs/a.log` is reported as `logs/a.log`.
/// A path made only of `.` components collapses to `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Recursively collect every `*.log` entry below `root`, sorted by full path.
///
/// A missing root is not an error; it simply yields nothing. Paths are
/// compared as whole strings rather than component by component, so
/// `logs/a-b/x.log` comes before `logs/a/x.log`.
pub fn discover_log_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                debug!(root = %root.display(), error = %err, "log directory not readable");
                continue;
            }
            Err(err) => {
                warn!(error = %err, "skipping entry during discovery");
                continue;
            }
        };

        if is_log_file(entry.path()) {
            files.push(normalize_path(entry.path()));
        }
    }

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    debug!(root = %root.display(), count = files.len(), "discovered log files");
    files
}
