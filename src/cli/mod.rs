//! Command-line layer: argument parsing, running and console output.

mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{run, run_in};

pub fn run_cli(args: Arguments) -> ExitStatus {
    let verbose = args.verbose;

    match run(&args) {
        Ok(generation) => {
            report::print_generation(&generation, verbose);
            ExitStatus::Success
        }
        Err(err) => {
            report::print_error(&err);
            ExitStatus::Error
        }
    }
}
