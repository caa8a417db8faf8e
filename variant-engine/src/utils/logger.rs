//! Logging Infrastructure
//!
//! Structured logging setup for the CLI driver.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// `RUST_LOG` takes precedence; otherwise `log_level` applies to the
/// engine crates. Logs go to stderr so stdout stays machine-readable.
pub fn init_logger(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("variant_engine={log_level},shared={log_level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
