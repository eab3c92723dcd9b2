//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `spectre.log` in the plugin directory with 10 MB size-based
//! rotation. Set `DEBUG_LOGGING=1` to enable debug output for spectre crates.

use std::path::Path;

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_FILE_NAME: &str = "spectre.log";
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

fn filter_directive(debug_logging: bool) -> &'static str {
    if debug_logging {
        "info,spectre_core=debug,spectre_overlay=debug"
    } else {
        "info"
    }
}

/// Initialize logging to both `log_dir/spectre.log` and stdout.
///
/// The returned guard must be held until exit so buffered lines are flushed.
/// Returns `None` and logs to stdout only when the file can't be opened.
pub fn init(log_dir: &Path) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    if let Err(e) = std::fs::create_dir_all(log_dir) {
        // Subscriber not installed yet
        eprintln!(
            "Failed to create log directory {:?}: {}, using stdout only",
            log_dir, e
        );
        init_stdout_only(debug_logging);
        return None;
    }

    let log_path = log_dir.join(LOG_FILE_NAME);
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(MAX_LOG_SIZE),
        1,
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {:?}: {}", log_path, e);
            init_stdout_only(debug_logging);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive(debug_logging)))
        .init();

    tracing::info!(log_file = ?log_path, debug_logging, "Spectre logging initialized");

    Some(guard)
}

fn init_stdout_only(debug_logging: bool) {
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive(debug_logging)))
        .init();

    tracing::info!(debug_logging, "Spectre logging initialized (stdout only)");
}
