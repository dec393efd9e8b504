mod args;
mod commands;
mod logging;
pub mod types;

pub use args::{Cli, USAGE};
pub use commands::run;
