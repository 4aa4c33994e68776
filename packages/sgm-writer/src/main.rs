//! CLI entry point for the SGM writer.

use sgm_writer::config::FAILURE_EXIT_CODE;
use sgm_writer::{cli, SgmError};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli::run() {
        Ok(()) => {}
        Err(SgmError::Info(text)) => print!("{text}"),
        Err(SgmError::Usage(usage)) => {
            eprint!("{usage}");
            std::process::exit(FAILURE_EXIT_CODE);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(FAILURE_EXIT_CODE);
        }
    }
}
