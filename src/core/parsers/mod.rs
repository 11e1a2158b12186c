//! Parsers for translation resources.
//!
//! - `csv`: delimited text (CSV/TSV) into a cell grid
//! - `json`: one JSON document per locale into a translation tree

pub mod csv;
pub mod json;
