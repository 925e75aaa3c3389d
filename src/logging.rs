//! Tracing setup and the gateway logging macros
//!
//! The TUI owns stdout, so everything goes to a rolling file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "gusflix";
const DEFAULT_FILTER: &str = "gusflix=debug,reqwest=info,warn";

/// Start writing `.logs/gusflix.YYYY-MM-DD.log`, rotated daily.
///
/// `RUST_LOG` overrides the default filter. Gateway requests run inside a
/// `get_json` span whose close event records how long the request took.
///
/// Buffered lines are flushed when the returned guard is dropped, so keep it
/// alive until the terminal has been restored.
pub fn init_logging() -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(Path::new(LOG_DIR))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE),
        )
        .try_init()?;

    tracing::info!(dir = LOG_DIR, "Logging to file");
    Ok(guard)
}

/// Log a catalog API request and its result
#[macro_export]
macro_rules! log_api_result {
    ($operation:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::info!(operation = $operation, "API request successful"),
            Err(e) => tracing::error!(operation = $operation, error = %e, "API request failed"),
        }
    };
}

/// Log a catalog API request with additional context
#[macro_export]
macro_rules! log_api_request {
    ($operation:expr) => {
        tracing::debug!(operation = $operation, "API request started");
    };
    ($operation:expr, $($field:tt)*) => {
        tracing::debug!(operation = $operation, $($field)*, "API request started");
    };
}
