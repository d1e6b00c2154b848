use log::{info, log_enabled, Level};

/// Initializes the logger with the `env_logger` crate.
///
/// Log level is selected through the `RUST_LOG` environment variable.
pub fn init_logger() {
    env_logger::init();
}

/// Logs an informational message.
pub fn log_info(message: &str) {
    if log_enabled!(Level::Info) {
        info!("{message}");
    }
}
