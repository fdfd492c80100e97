//! Simulated TV remote control. Interprets commands such as `tv on`,
//! `options change volume up` and `options show`.
//!
//! There is no public code API for you to use! However, the command line
//! interface should be stable.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{debug, LevelFilter};

use controller::RemoteController;

mod controller;
mod errors;
mod flags;
mod repl;
mod rules;
mod state;

fn main() -> anyhow::Result<ExitCode> {
    let cli = flags::Cli::parse();
    init_logging(&cli);
    let mut rc = RemoteController::new();

    if let Some(command) = cli.one_shot() {
        let text = rc.call(&command)?;
        print_result(io::stdout().lock(), &text)?;
        debug!("State after command:\n{}", rc.options_show());
        return Ok(ExitCode::SUCCESS);
    }

    let prompt = !cli.quiet && io::stdin().is_terminal();
    let summary = repl::run(&mut rc, io::stdin().lock(), io::stdout().lock(), io::stderr().lock(), prompt)
        .context("Command loop failed")?;
    if summary.rejected > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Print a non-empty command result, reporting a closed stdout as an error.
fn print_result(mut out: impl Write, text: &str) -> anyhow::Result<()> {
    if !text.is_empty() {
        writeln!(out, "{text}").context("Failed to write result")?;
    }
    Ok(())
}

/// Set up env_logger. `RUST_LOG` applies, `--verbose` forces debug output.
fn init_logging(cli: &flags::Cli) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    if cli.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
