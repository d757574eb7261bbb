use clap::{ArgAction, Parser};

use yabc::LetterCase;

#[derive(Parser, Debug)]
#[command(
    name = "yabc",
    version,
    about = "Convert an unsigned integer from one base (2-36) to another",
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Lowercase result (default)
    #[arg(short = 'l', overrides_with = "upper")]
    pub lower: bool,

    /// Uppercase result
    #[arg(short = 'u', overrides_with = "lower")]
    pub upper: bool,

    /// Display version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: (),

    /// Enable logging (written to stderr)
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Base of target: 2-36 (e.g. 16, 0x10) or hex, dec, oct, bin
    #[arg(value_name = "FROM_BASE")]
    pub from_base: String,

    /// Base of the result, same forms as FROM_BASE
    #[arg(value_name = "TO_BASE")]
    pub to_base: String,

    /// Integer to be converted, written in FROM_BASE
    #[arg(value_name = "TARGET")]
    pub target: String,
}

impl CliArgs {
    /// The last of `-l`/`-u` wins; lowercase when neither is given.
    pub fn letter_case(&self) -> LetterCase {
        if self.upper {
            LetterCase::Upper
        } else {
            LetterCase::Lower
        }
    }
}
