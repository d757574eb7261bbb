//! yabc CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the conversion, and
//! map any failure to a one-line diagnostic on stderr and a failing exit
//! status. For programmatic use, prefer the library API (`yabc::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
