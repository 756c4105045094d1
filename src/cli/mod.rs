//! The sitecheck command-line interface.
//!
//! Parses arguments, sets up logging, runs the portfolio suite against the
//! project root and maps the run to a process exit code.

use std::process::ExitCode;

use clap::Parser;
use termcolor::{StandardStream, WriteColor};
use tracing::{debug, Level};

use crate::cli::args::SitecheckArgs;
use crate::config::HarnessConfig;
use crate::errors::CheckError;
use crate::harness::{Harness, RunResult};
use crate::portfolio::portfolio_suite;
use crate::probe::FsProbe;
use crate::report::Reporter;

pub mod args;

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = SitecheckArgs::parse();
    init_logging(args.verbose);

    let config = args.config();
    let stdout = StandardStream::stdout(config.color);
    match run_with(&config, stdout) {
        Ok(result) => result.into(),
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}

/// Runs the portfolio suite with `config`, writing the report to `out`.
pub fn run_with<W: WriteColor>(config: &HarnessConfig, out: W) -> Result<RunResult, CheckError> {
    let root = config.resolve_root()?;
    debug!(root = %root.display(), "checking project");

    let probe = FsProbe::new(root);
    let mut harness = Harness::new(Reporter::new(out));
    portfolio_suite(&probe).run(&mut harness);
    Ok(harness.finish())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
