use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{Error, GenerationOptions, OutputFormat};

pub const CONFIG_FILE_NAME: &str = ".l10ngenrc.json";

/// Project-level defaults for the generator. Command-line flags win over
/// every field here.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    #[serde(default)]
    pub source_file: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_keys_output_file")]
    pub keys_output_file: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_source_dir() -> String {
    "resources/langs".to_string()
}

fn default_output_dir() -> String {
    "lib/generated".to_string()
}

fn default_output_file() -> String {
    "codegen_loader.g.dart".to_string()
}

fn default_keys_output_file() -> String {
    "locale_keys.g.dart".to_string()
}

fn default_format() -> String {
    OutputFormat::CsvAndKeys.as_str().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            source_file: None,
            output_dir: default_output_dir(),
            output_file: default_output_file(),
            keys_output_file: default_keys_output_file(),
            format: default_format(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `format` is unknown or an output file name is empty.
    pub fn validate(&self) -> Result<()> {
        self.output_format()?;

        if self.output_file.trim().is_empty() {
            return Err(Error::Configuration("'outputFile' must not be empty".to_string()).into());
        }
        if self.keys_output_file.trim().is_empty() {
            return Err(
                Error::Configuration("'keysOutputFile' must not be empty".to_string()).into(),
            );
        }

        Ok(())
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format
            .parse::<OutputFormat>()
            .with_context(|| format!("Invalid 'format' in {}", CONFIG_FILE_NAME))
    }

    /// Builds run options, resolving relative paths against `base_dir`.
    pub fn to_options(&self, base_dir: &Path) -> Result<GenerationOptions> {
        Ok(GenerationOptions {
            source_dir: base_dir.join(&self.source_dir),
            source_file: self.source_file.as_ref().map(PathBuf::from),
            output_dir: base_dir.join(&self.output_dir),
            output_file: self.output_file.clone(),
            keys_output_file: self.keys_output_file.clone(),
            format: self.output_format()?,
        })
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory holding the config file, or the start directory when using
    /// defaults. Relative paths in the config are resolved against it.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| Error::Configuration(e.to_string()))
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult { config, base_dir })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
