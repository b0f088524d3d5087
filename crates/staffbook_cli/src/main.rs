//! Terminal entry point: wires configuration, logging, the roster service
//! and the interactive shell together.
//! Exit codes: 0 for a normal session, 1 when startup fails before any menu
//! is shown.

use clap::Parser;
use staffbook_cli::cli::CommandLine;
use staffbook_cli::prompt::StdinPrompt;
use staffbook_cli::shell::Shell;
use staffbook_core::{default_log_level, init_logging, RosterService};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CommandLine::parse();

    let level = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| default_log_level());
    if let Err(err) = init_logging(level, &args.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let service = match RosterService::open(&args.data_file) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut shell = Shell::new(service, StdinPrompt);
    if let Err(err) = shell.run() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
