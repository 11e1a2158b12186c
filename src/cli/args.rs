//! CLI argument definitions using clap.
//!
//! Every flag is optional so that values from `.l10ngenrc.json` (or the
//! built-in defaults) apply when a flag is not given.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::Config;
use crate::core::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Folder containing localization files [default: resources/langs]
    #[arg(short = 'S', long)]
    pub source_dir: Option<PathBuf>,

    /// File to use for localization, relative to the source folder
    #[arg(short = 's', long)]
    pub source_file: Option<PathBuf>,

    /// Output folder for the generated files [default: lib/generated]
    #[arg(short = 'O', long)]
    pub output_dir: Option<PathBuf>,

    /// Output file name [default: codegen_loader.g.dart]
    #[arg(short = 'o', long)]
    pub output_file: Option<String>,

    /// Key constants file name used by csv_and_keys [default: locale_keys.g.dart]
    #[arg(long)]
    pub keys_output_file: Option<String>,

    /// Support json or keys formats [default: csv_and_keys]
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Overlays the flags that were given onto a loaded config.
    ///
    /// Directories given on the command line are relative to `cwd`, not to
    /// the config file.
    pub fn apply_to(&self, config: &mut Config, cwd: &Path) {
        if let Some(dir) = &self.source_dir {
            config.source_dir = cwd.join(dir).to_string_lossy().into_owned();
        }
        if let Some(file) = &self.source_file {
            config.source_file = Some(file.to_string_lossy().into_owned());
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = cwd.join(dir).to_string_lossy().into_owned();
        }
        if let Some(file) = &self.output_file {
            config.output_file = file.clone();
        }
        if let Some(file) = &self.keys_output_file {
            config.keys_output_file = file.clone();
        }
        if let Some(format) = self.format {
            config.format = format.as_str().to_string();
        }
    }
}
