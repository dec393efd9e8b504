use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: logscan <path_to_log_directory>";

#[derive(Parser, Debug)]
#[command(name = "logscan")]
#[command(about = "Count ERROR lines across a directory of .log files and write a report", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory to scan recursively for *.log files
    pub log_dir: PathBuf,

    /// Directory that receives log_report_<timestamp>.txt
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
