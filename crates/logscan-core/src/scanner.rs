use crate::model::FileScan;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Fixed, case-sensitive marker that classifies a line as an error.
pub const ERROR_MARKER: &str = "ERROR";

/// Prefix of the pseudo-line recorded for a file that could not be read.
pub const READ_FAILURE_PREFIX: &str = "[ANALYZER] Could not read";

/// Scan one file, turning any read failure into a single diagnostic line.
///
/// A failed file is reported with a count of one so that it shows up in the
/// per-file counts as well as in the listing.
pub fn scan_file(path: &Path) -> FileScan {
    match read_error_lines(path) {
        Ok(lines) => {
            debug!(path = %path.display(), matches = lines.len(), "scanned log file");
            FileScan::from_lines(lines)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read log file");
            FileScan::from_lines(vec![read_failure_line(path, &err)])
        }
    }
}

/// Read `path` and return every line containing [`ERROR_MARKER`], with
/// trailing whitespace removed.
///
/// Only I/O problems fail here; bytes that are not valid UTF-8 are dropped.
pub fn read_error_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = std::fs::read(path)?;
    let text = decode_lossy(&bytes);

    Ok(split_lines(&text)
        .into_iter()
        .filter(|line| line.contains(ERROR_MARKER))
        .map(|line| line.trim_end().to_string())
        .collect())
}

pub fn read_failure_line(path: &Path, err: &io::Error) -> String {
    format!("{} {}: {}", READ_FAILURE_PREFIX, path.display(), err)
}

/// Split on `\n`, `\r\n` and a lone `\r`, without the terminators.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Decode UTF-8, skipping invalid sequences instead of substituting U+FFFD.
fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
