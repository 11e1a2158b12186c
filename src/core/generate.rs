//! Orchestration of one generation run.
//!
//! A run resolves its source files, reads them in resolution order, renders
//! every requested document in memory and hands the finished documents back.
//! Nothing is written here, so a failure at any step leaves no partial
//! output behind.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use walkdir::WalkDir;

use super::emit::{JsonLocales, render_keys, render_locale_map};
use super::error::Error;
use super::flatten::{FlatKey, flatten_keys, flatten_tree, invalid_identifiers};
use super::parsers::csv::delimiter_for;
use super::parsers::json::{locale_identifier, parse_tree};
use super::table::LocaleTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Locale map from one JSON file per locale
    Json,
    /// Key constants from a JSON file
    Keys,
    /// Locale map from a CSV file
    Csv,
    /// Key constants from a CSV file
    CsvKeys,
    /// Locale map and key constants from a CSV file, as two documents
    CsvAndKeys,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Keys => "keys",
            OutputFormat::Csv => "csv",
            OutputFormat::CsvKeys => "csv_keys",
            OutputFormat::CsvAndKeys => "csv_and_keys",
        }
    }

    /// Whether the source is a single CSV/TSV table rather than JSON files.
    pub fn is_tabular(&self) -> bool {
        matches!(
            self,
            OutputFormat::Csv | OutputFormat::CsvKeys | OutputFormat::CsvAndKeys
        )
    }

    fn source_extensions(&self) -> &'static [&'static str] {
        if self.is_tabular() {
            &["csv", "tsv"]
        } else {
            &["json"]
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "keys" => Ok(OutputFormat::Keys),
            "csv" => Ok(OutputFormat::Csv),
            "csv_keys" => Ok(OutputFormat::CsvKeys),
            "csv_and_keys" => Ok(OutputFormat::CsvAndKeys),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Resolved settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub source_dir: PathBuf,
    /// Overrides directory scanning; relative paths are joined to `source_dir`.
    pub source_file: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub output_file: String,
    /// Target of the key constants when `format` is `csv_and_keys`.
    pub keys_output_file: String,
    pub format: OutputFormat,
}

impl GenerationOptions {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    pub fn keys_output_path(&self) -> PathBuf {
        self.output_dir.join(&self.keys_output_file)
    }
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Default)]
pub struct ResolvedSources {
    pub paths: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Default)]
pub struct Rendered {
    pub files: Vec<GeneratedFile>,
    pub warnings: Vec<String>,
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Generation {
    pub sources: Vec<PathBuf>,
    pub files: Vec<GeneratedFile>,
    pub warnings: Vec<String>,
}

/// Finds the files a run reads, in the order their locales are emitted.
///
/// Directory scanning is non-recursive and sorted by file name. Tabular
/// formats use a single table; when several are present the first one wins.
pub fn resolve_sources(options: &GenerationOptions) -> Result<ResolvedSources, Error> {
    let dir = &options.source_dir;

    if let Some(file) = &options.source_file {
        let path = dir.join(file);
        if !path.is_file() {
            return Err(Error::input(format!(
                "Source file '{}' does not exist.",
                path.display()
            )));
        }
        return Ok(ResolvedSources {
            paths: vec![path],
            warnings: Vec::new(),
        });
    }

    if !dir.exists() {
        return Err(Error::input(format!(
            "Source directory '{}' does not exist.\n\
             Hint: Pass --source-dir or set 'sourceDir' in the config file.",
            dir.display()
        )));
    }
    if !dir.is_dir() {
        return Err(Error::input(format!(
            "'{}' is not a directory.",
            dir.display()
        )));
    }

    let extensions = options.format.source_extensions();
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.path().is_file() && has_extension(entry.path(), extensions) {
            paths.push(entry.into_path());
        }
    }

    if paths.is_empty() {
        return Err(Error::input(format!(
            "No {} files found in '{}'.",
            extensions.join("/"),
            dir.display()
        )));
    }

    let mut warnings = Vec::new();
    if options.format.is_tabular() && paths.len() > 1 {
        paths.truncate(1);
        warnings.push(format!(
            "Found several tables in '{}', using '{}' (pass --source-file to choose)",
            dir.display(),
            paths[0].display()
        ));
    }

    Ok(ResolvedSources { paths, warnings })
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    paths
        .iter()
        .map(|path| -> Result<SourceFile> {
            let contents = fs::read_to_string(path)
                .map_err(Error::Io)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(SourceFile {
                path: path.clone(),
                contents,
            })
        })
        .collect()
}

/// Renders every document the format asks for.
pub fn render(options: &GenerationOptions, sources: &[SourceFile]) -> Result<Rendered> {
    let Some(first) = sources.first() else {
        return Err(Error::input("No source files to generate from.").into());
    };

    let mut rendered = Rendered::default();
    match options.format {
        OutputFormat::Json => {
            let mut locales = JsonLocales::new();
            for source in sources {
                let locale = locale_identifier(&source.path).ok_or_else(|| {
                    Error::input(format!(
                        "Cannot derive a locale from '{}'.",
                        source.path.display()
                    ))
                })?;
                locales.push(locale, parse_json_source(source)?);
            }
            rendered.files.push(GeneratedFile {
                path: options.output_path(),
                contents: render_locale_map(&locales)?,
            });
        }
        OutputFormat::Keys => {
            let keys = flatten_tree(&parse_json_source(first)?);
            rendered.warnings.extend(identifier_warnings(&keys));
            rendered.files.push(GeneratedFile {
                path: options.output_path(),
                contents: render_keys(&keys)?,
            });
        }
        OutputFormat::Csv => {
            let table = parse_table_source(first)?;
            rendered.files.push(GeneratedFile {
                path: options.output_path(),
                contents: render_locale_map(&table)?,
            });
        }
        OutputFormat::CsvKeys => {
            let table = parse_table_source(first)?;
            let keys = flatten_keys(table.keys());
            rendered.warnings.extend(identifier_warnings(&keys));
            rendered.files.push(GeneratedFile {
                path: options.output_path(),
                contents: render_keys(&keys)?,
            });
        }
        OutputFormat::CsvAndKeys => {
            let table = parse_table_source(first)?;
            let keys = flatten_keys(table.keys());
            rendered.warnings.extend(identifier_warnings(&keys));
            rendered.files.push(GeneratedFile {
                path: options.output_path(),
                contents: render_locale_map(&table)?,
            });
            rendered.files.push(GeneratedFile {
                path: options.keys_output_path(),
                contents: render_keys(&keys)?,
            });
        }
    }

    Ok(rendered)
}

/// Resolves, reads and renders. The caller persists the returned files.
pub fn generate(options: &GenerationOptions) -> Result<Generation> {
    let resolved = resolve_sources(options)?;
    let sources = read_sources(&resolved.paths)?;
    let rendered = render(options, &sources)?;

    let mut warnings = resolved.warnings;
    warnings.extend(rendered.warnings);

    Ok(Generation {
        sources: resolved.paths,
        files: rendered.files,
        warnings,
    })
}

fn parse_json_source(source: &SourceFile) -> Result<serde_json::Map<String, serde_json::Value>> {
    parse_tree(&source.contents).with_context(|| format!("Failed to parse {}", source.path.display()))
}

fn parse_table_source(source: &SourceFile) -> Result<LocaleTable> {
    LocaleTable::parse(&source.contents, delimiter_for(&source.path))
        .with_context(|| format!("Failed to parse {}", source.path.display()))
}

fn identifier_warnings(keys: &[FlatKey]) -> Vec<String> {
    invalid_identifiers(keys)
        .into_iter()
        .map(|key| {
            format!(
                "Key '{}' produces '{}', which is not a valid Dart identifier",
                key.path, key.identifier
            )
        })
        .collect()
}
