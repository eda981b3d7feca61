//! Planck: startup configuration resolver for the ClojureScript launcher.
//!
//! This is the main entry point for the `planck` CLI. It resolves arguments
//! and environment into a configuration, hands the resulting plan to the
//! evaluator, and maps errors to exit codes.

mod classpath;
mod cli;
pub mod config;
mod deps;
pub mod env;
pub mod error;
pub mod evaluator;
pub mod exit_codes;
mod handoff;
mod logging;
mod paths;
mod plan;
mod text;

#[cfg(test)]
mod test_support;

use config::Config;
use env::LaunchEnv;
use error::{LaunchError, Result};
use handoff::JsonHandoff;
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let argv: Vec<OsString> = std::env::args_os().collect();

    match run(&argv) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(argv: &[OsString]) -> Result<()> {
    let parsed = cli::parse(argv)?;
    logging::init(parsed.cli.verbose);

    if parsed.cli.legal {
        return text::write_legal(&mut io::stdout()).map_err(|err| LaunchError::Io {
            context: "failed to write legal notice".to_string(),
            source: err,
        });
    }

    let env = LaunchEnv::capture();
    let config = Config::build(parsed, &env)?;

    // stdout carries the hand-off stream, so the banner goes to stderr.
    let mut evaluator = JsonHandoff::new(io::stdout());
    evaluator.announce(&config)?;
    plan::run(&config, &mut evaluator, &mut io::stdin().lock(), &mut io::stderr())
}

fn report(err: &LaunchError) {
    match err {
        // clap renders its own message and usage, or the help/version text.
        LaunchError::Cli(err) => {
            let _ = err.print();
        }
        // The evaluator has already reported its failure.
        LaunchError::Evaluation { .. } => {}
        LaunchError::Usage(_) => {
            eprintln!("Error: {}", err);
            eprintln!();
            eprintln!("{}", cli::usage());
        }
        LaunchError::Io { .. } => eprintln!("Error: {}", err),
    }
}
