//! Error types for the generation pipeline.
//!
//! Every failure is terminal for a run: nothing is retried and no output is
//! written once one of these is returned.

use thiserror::Error;

/// Broad category of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing source path or an empty set of source files.
    Input,
    /// Malformed CSV or JSON.
    Parse,
    /// Unknown output format or invalid configuration.
    Configuration,
    /// A locale that the CSV header does not declare.
    Lookup,
    /// Two keys or locales that map to the same generated identifier.
    IdentifierCollision,
    /// A source file that could not be read.
    Io,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Input(String),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unsupported format `{0}` (expected one of: json, keys, csv, csv_keys, csv_and_keys)")]
    UnsupportedFormat(String),

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("locale `{0}` is not present in the CSV header")]
    UnknownLocale(String),

    #[error("identifier `{identifier}` is generated by both `{first}` and `{second}`")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Input(_) => ErrorKind::Input,
            Error::Csv(_) | Error::Json(_) | Error::Parse(_) => ErrorKind::Parse,
            Error::UnsupportedFormat(_) | Error::Configuration(_) => ErrorKind::Configuration,
            Error::UnknownLocale(_) => ErrorKind::Lookup,
            Error::IdentifierCollision { .. } => ErrorKind::IdentifierCollision,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Error::Input(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(message.into())
    }
}
