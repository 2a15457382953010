use std::env;
use tracing_subscriber::EnvFilter;

use crate::error::{ErrorCore, Result};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `info`, or `debug` when
/// `PROMPTIFY_DEBUG=true`.
pub fn try_init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug_enabled())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ErrorCore::LoggerInit(e.to_string()))
}

pub fn init_tracing() {
    if let Err(err) = try_init_tracing() {
        eprintln!("{err}");
    }
}

fn debug_enabled() -> bool {
    env::var("PROMPTIFY_DEBUG")
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}
