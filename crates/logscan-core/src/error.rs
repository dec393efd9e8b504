use std::fmt;
use std::path::PathBuf;

/// Result type for logscan-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a run.
///
/// Per-file read problems never show up here: the scanner turns them into
/// diagnostic lines inside the report instead.
#[derive(Debug)]
pub enum Error {
    /// Creating the report directory, writing the report file or echoing it
    /// to the console failed
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Output {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Output { path, source } => {
                write!(f, "Failed to write report to {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Output { source, .. } => Some(source),
        }
    }
}
