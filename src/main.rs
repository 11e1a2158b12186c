use std::process::ExitCode;

use clap::Parser;
use l10n_gen::cli::{Arguments, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();
    run_cli(args).into()
}
