use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct StoreArgs {
    /// Path of the persisted cookie snapshot.
    #[arg(long = "cookie-store", default_value = jdbean_store::json_file::DEFAULT_SNAPSHOT_PATH)]
    pub cookie_store: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct HttpArgs {
    /// Per-request timeout in milliseconds.
    #[arg(long, default_value_t = 30000)]
    pub timeout: u64,
}

#[derive(Debug, Args, Clone)]
pub struct LoggingArgs {
    /// Directory for the rotating debug log.
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
    /// Disable the debug log file entirely.
    #[arg(long)]
    pub no_log_file: bool,
}
