//! Command line layer: clap argument parsing (`args`), the CLI error type
//! (`errors`), and `runner`, which converts one target and prints it.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
