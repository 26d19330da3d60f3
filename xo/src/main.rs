// xo/src/main.rs
//! xo entry point.
//!
//! Parses arguments, sets up logging and hands the process streams to the runner.

use clap::Parser;
use is_terminal::IsTerminal;
use log::info;
use std::io;
use std::process::ExitCode;

use xo::cli::Cli;
use xo::commands::format::{report_error, run_xo};
use xo::logger;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_override(cli.debug, cli.quiet));
    info!("xo started. Version: {}", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match run_xo(&cli, stdin_is_terminal, stdin.lock(), &mut writer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}
