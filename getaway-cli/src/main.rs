//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use getaway_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match getaway_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => report_and_exit(&err),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors to the terminal"
)]
fn report_and_exit(err: &CliError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
