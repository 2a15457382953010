use pf_core::logger::init_tracing;
use tracing::error;

use crate::config::Settings;

mod application;
mod clients;
mod config;
mod domain;
mod error;
mod server;
#[cfg(test)]
mod test_support;

fn run() -> error::Result<()> {
    init_tracing();
    let settings = Settings::from_env();
    server::http_server::http_server_backend(settings)
}

fn main() {
    if let Err(e) = run() {
        error!("Application error: {e}");
        std::process::exit(1);
    }
}
