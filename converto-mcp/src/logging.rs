//! Logging setup - tracing-subscriber writing to stderr
//!
//! stdout carries the protocol, so every log line goes to stderr, without
//! colour codes.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use crate::config::DEFAULT_LOG_FILTER;

/// Build the filter, falling back to the default on an invalid directive.
/// The second value is the parse error, if any.
pub fn build_env_filter(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (
            EnvFilter::new(DEFAULT_LOG_FILTER),
            Some(format!("invalid log filter '{}': {}", directive, e)),
        ),
    }
}

/// Install the global subscriber. Returns a warning when the directive was rejected.
pub fn init_logging(directive: &str) -> Option<String> {
    let (filter, warning) = build_env_filter(directive);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    // try_init: a subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
    warning
}
