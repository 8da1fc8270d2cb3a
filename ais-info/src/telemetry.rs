use tracing::Level;

use crate::settings::LogLevel;

/// Logs go to stderr, stdout is reserved for reports.
pub fn init_tracer(log_level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(Level::from(log_level))
        .with_writer(std::io::stderr)
        .init();
}
