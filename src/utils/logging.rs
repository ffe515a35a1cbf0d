//! Structured logging setup
//!
//! Installs the global `tracing` subscriber. Records are written to stderr
//! so that stdout carries only command output.

use crate::config::Settings;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Level filter for this run: `--debug` always lowers it to DEBUG,
/// otherwise the configured log level applies.
pub fn effective_level(settings: &Settings, debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::DEBUG
    } else {
        settings.log_level.as_level_filter()
    }
}

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(settings: &Settings, debug: bool) -> String {
    format!(
        "{}={}",
        env!("CARGO_CRATE_NAME"),
        effective_level(settings, debug)
    )
}

fn output_layer(settings: &Settings) -> Box<dyn Layer<Registry> + Send + Sync> {
    let ansi = io::stderr().is_terminal();

    match (settings.json_logs, settings.include_timestamp) {
        (true, true) => fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(io::stderr)
            .boxed(),
        (true, false) => fmt::layer()
            .json()
            .flatten_event(true)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        (false, true) => fmt::layer()
            .with_ansi(ansi)
            .with_writer(io::stderr)
            .boxed(),
        (false, false) => fmt::layer()
            .with_ansi(ansi)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
    }
}

/// Initialize logging from resolved settings and the global debug flag
pub fn init_logging(settings: &Settings, debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(settings, debug).into());

    // A subscriber may already be installed when embedded in a test harness
    let _ = tracing_subscriber::registry()
        .with(output_layer(settings))
        .with(filter)
        .try_init();
}
