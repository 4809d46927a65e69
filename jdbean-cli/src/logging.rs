use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::args::LoggingArgs;

/// Console at INFO (WARN when quiet, overridable via RUST_LOG) plus a rolling
/// debug log file under `log_dir`.
///
/// The returned guard must stay alive until process exit so buffered file
/// lines get flushed.
pub fn init(logging: &LoggingArgs, quiet: bool) -> Option<WorkerGuard> {
    let console_level = if quiet { "warn" } else { "info" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_level));
    let console = fmt::layer().with_target(false).with_filter(console_filter);

    if logging.no_log_file {
        tracing_subscriber::registry().with(console).init();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logging.log_dir, "jdbean.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry().with(console).with(file).init();
    Some(guard)
}
