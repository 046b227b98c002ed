//! `pay-classifier` entry point.
//!
//! Prompts on stdout for base pay, overtime pay and bonus, then prints the
//! salary band. Diagnostics go to stderr, filtered by `RUST_LOG` (default
//! `warn`).

use std::io;
use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match pay_classifier::console::run(stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\nError: {}", err);
            ExitCode::FAILURE
        }
    }
}
