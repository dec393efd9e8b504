use std::collections::HashMap;

/// A single matched line and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub path: String,
    pub line: String,
}

impl ErrorRecord {
    pub fn new(path: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line: line.into(),
        }
    }
}

/// Matched-line count per file path. Files without matches are never present.
pub type FileErrorCounts = HashMap<String, usize>;

/// Outcome of scanning one file: how many lines matched and the lines
/// themselves, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileScan {
    pub count: usize,
    pub lines: Vec<String>,
}

impl FileScan {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            count: lines.len(),
            lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Everything the report stage needs: per-file counts plus every matched
/// line in discovery order.
///
/// The sum of all counts always equals the number of records. Results are
/// only added through [`ScanResult::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    per_file_counts: FileErrorCounts,
    records: Vec<ErrorRecord>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the results of one file. Files with no matches are ignored.
    pub fn record(&mut self, path: &str, scan: FileScan) {
        if scan.is_empty() {
            return;
        }

        *self.per_file_counts.entry(path.to_string()).or_insert(0) += scan.lines.len();
        self.records.extend(
            scan.lines
                .into_iter()
                .map(|line| ErrorRecord::new(path, line)),
        );
    }

    pub fn per_file_counts(&self) -> &FileErrorCounts {
        &self.per_file_counts
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    pub fn total(&self) -> usize {
        self.per_file_counts.values().sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Per-file counts ordered by path string, ascending.
    pub fn sorted_counts(&self) -> Vec<(&str, usize)> {
        sort_by_path(
            self.per_file_counts
                .iter()
                .map(|(path, count)| (path.as_str(), *count)),
        )
    }
}

/// Order (path, count) pairs by path. Counts never influence the order.
pub fn sort_by_path<'a>(
    pairs: impl IntoIterator<Item = (&'a str, usize)>,
) -> Vec<(&'a str, usize)> {
    let mut sorted: Vec<_> = pairs.into_iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    sorted
}
