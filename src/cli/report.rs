//! Console output for generation runs.
//!
//! Kept apart from the core so the generator can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::Generation;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a successful run to stdout, warnings to stderr.
pub fn print_generation(generation: &Generation, verbose: bool) {
    print_warnings_to(&generation.warnings, verbose, &mut io::stderr().lock());
    print_generation_to(generation, verbose, &mut io::stdout().lock());
}

pub fn print_generation_to<W: Write>(generation: &Generation, verbose: bool, writer: &mut W) {
    if verbose {
        for source in &generation.sources {
            let _ = writeln!(writer, "{} {}", "source:".bold(), source.display());
        }
    }
    for file in &generation.files {
        print_success_to(&file.path, writer);
    }
}

pub fn print_success_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Generated {}", path.display()).green()
    );
}

/// Without `verbose` only a count is shown.
pub fn print_warnings_to<W: Write>(warnings: &[String], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} {} (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            if warnings.len() == 1 { "warning" } else { "warnings" },
            "-v".cyan()
        );
    }
}

pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stderr().lock());
}

/// Prints the error with its full context chain on one line.
pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {:#}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        err
    );
}
