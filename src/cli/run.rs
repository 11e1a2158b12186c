use std::{env, fs, io::Write, path::Path};

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;

use super::args::Arguments;
use crate::config::load_config;
use crate::core::{GeneratedFile, Generation, generate};

/// Runs the generator from the current directory.
pub fn run(args: &Arguments) -> Result<Generation> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    run_in(args, &cwd)
}

/// Loads config from `cwd`, applies the flags, generates, then writes.
///
/// Every document is rendered before the first file is touched.
pub fn run_in(args: &Arguments, cwd: &Path) -> Result<Generation> {
    let loaded = load_config(cwd)?;
    let mut config = loaded.config;
    args.apply_to(&mut config, cwd);
    config.validate()?;

    let options = config.to_options(&loaded.base_dir)?;
    let generation = generate(&options)?;
    write_files(&generation.files)?;

    Ok(generation)
}

/// Stages every file next to its target, then moves them into place, so a
/// failure while writing leaves no partial output.
fn write_files(files: &[GeneratedFile]) -> Result<()> {
    let mut staged = Vec::with_capacity(files.len());
    for file in files {
        if file.path.is_dir() {
            bail!("Failed to write file: {} is a directory", file.path.display());
        }
        let parent = match file.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

        let mut temp = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to write file: {}", file.path.display()))?;
        temp.write_all(file.contents.as_bytes())
            .with_context(|| format!("Failed to write file: {}", file.path.display()))?;
        staged.push((temp, &file.path));
    }

    for (temp, path) in staged {
        temp.persist(path)
            .map_err(|err| err.error)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }
    Ok(())
}
