use std::io::{self, Write};

use tracing::debug;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    let case = args.letter_case();
    debug!(
        "converting {:?} from base {:?} to base {:?} ({} case)",
        args.target, args.from_base, args.to_base, case
    );

    let rendered = yabc::convert(&args.from_base, &args.to_base, &args.target, case)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(())
}
