//! Core generation pipeline.
//!
//! ```text
//! source text ─┬─ parsers::csv ──> table::LocaleTable ─┐
//!              └─ parsers::json ─> TranslationTree ────┼─> flatten ─> emit ─> text
//!                                                      └──────────────^
//! ```
//!
//! - `parsers`: CSV/TSV grids and JSON translation trees
//! - `table`: per-locale view over a CSV grid
//! - `flatten`: nested keys into constant identifiers
//! - `emit`: Dart document rendering
//! - `generate`: source resolution and the run itself
//! - `error`: pipeline error types

pub mod emit;
pub mod error;
pub mod flatten;
pub mod generate;
pub mod parsers;
pub mod table;

pub use emit::{JsonLocales, LocaleSource, render_keys, render_locale_map};
pub use error::{Error, ErrorKind};
pub use flatten::{FlatKey, flatten_keys, flatten_tree};
pub use generate::{
    GeneratedFile, Generation, GenerationOptions, OutputFormat, SourceFile, generate,
};
pub use table::LocaleTable;
