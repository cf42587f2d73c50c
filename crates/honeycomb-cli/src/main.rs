//! honeycomb binary
//!
//! Usage:
//!   honeycomb <honeycomb.txt> <dictionary.txt>

use std::io;
use std::process::ExitCode;

use honeycomb_cli::config::{DEFAULT_LOG_FILTER, LOG_VAR};
use honeycomb_cli::{print_usage, run, Error, SearchConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only results
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env(LOG_VAR)
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = SearchConfig::from_env().and_then(|config| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run(&args, &config, &mut out)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, Error::Usage(_)) {
                eprintln!();
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
