//! Logging setup
//!
//! Events go to stderr so schedules written to stdout stay machine-readable.
//! `RUST_LOG` controls the level (default `warn`); `DFMIS_LOG_FORMAT=json`
//! switches to JSON lines.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the log format
pub const LOG_FORMAT_ENV_VAR: &str = "DFMIS_LOG_FORMAT";

/// Install the global tracing subscriber
pub fn init_tracing() {
    let log_format = std::env::var(LOG_FORMAT_ENV_VAR).unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
