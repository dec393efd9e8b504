use crate::types::LogLevel;

/// Send diagnostics to stderr; stdout carries the report.
pub fn init(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level.as_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
