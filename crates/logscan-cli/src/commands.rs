use crate::args::Cli;
use crate::logging;
use anyhow::{Context, Result};
use chrono::Local;
use std::io::Write;
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);
    info!(log_dir = %cli.log_dir.display(), "scanning");

    let result = logscan_core::analyze_logs(&cli.log_dir);
    let generated_at = Local::now().naive_local();

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    let outcome = logscan_core::write_report(&result, &cli.output_dir, generated_at, &mut console)
        .with_context(|| format!("Could not produce report for {}", cli.log_dir.display()))?;

    writeln!(console)?;
    writeln!(console, "📄 Report written to: {}", outcome.path.display())?;

    Ok(())
}
