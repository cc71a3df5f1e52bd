//! `maze-solve`: solve a maze file and render the solution.
//!
//! Exit status: 0 on success (solved or provably unsolvable), 2 for usage
//! errors, 65 for malformed maze data, 66 for an unreadable maze file,
//! 74 when an output file cannot be written.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use maze_harness::cli::Cli;
use maze_harness::runner::{run, EXIT_IO_ERROR};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.into_config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(&config, &mut out) {
        Ok(summary) => match summary.render {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                let err =
                    anyhow::Error::new(e).context("search completed but the image was not saved");
                eprintln!("error: {err:#}");
                ExitCode::from(EXIT_IO_ERROR)
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let err = anyhow::Error::new(e);
            eprintln!("error: {err:#}");
            ExitCode::from(code)
        }
    }
}
