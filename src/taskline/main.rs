//! # tl
//!
//! The binary is thin: argument parsing, dispatch and rendering live in `src/cli/`; this
//! file installs logging, runs `cli::run()` and turns an error into an exit code.
//!
//! Logging is opt-in through `RUST_LOG`, e.g. `RUST_LOG=taskline=debug tl check 2`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

fn main() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = cli::run() {
        match e.detail() {
            Some(detail) => eprintln!("Error: {}: {}", e, detail),
            None => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
