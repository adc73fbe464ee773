//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber, writing to stderr.
///
/// The filter comes from `RUST_LOG` (default `warn`). The format follows
/// `LOG_FORMAT` from the loaded configuration; without a configuration
/// (for example a missing token) text logs are used.
pub fn init(config: Option<&Config>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = config.is_some_and(Config::uses_json_logs);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // Ignore the error if a subscriber is already installed
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
