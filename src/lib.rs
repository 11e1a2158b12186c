//! l10n-gen - Dart translation code generator
//!
//! Reads translation resources (one JSON file per locale, or a single CSV/TSV
//! table holding every locale) and generates Dart sources: a `CodegenLoader`
//! with every locale compiled in as constant maps, and a `LocaleKeys` class
//! with one constant per translation key.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, running, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, key flattening and document rendering

pub mod cli;
pub mod config;
pub mod core;
