//! Delimited-text parser producing a rectangular grid of cells.
//!
//! Quoting follows the usual CSV rules: a field that starts with `"` may
//! contain delimiters, newlines and doubled quotes. Parsing is delegated to
//! the `csv` crate, which is lenient about unterminated quotes, so those are
//! detected up front.

use std::path::Path;

use csv::ReaderBuilder;

use crate::core::error::Error;

pub const DEFAULT_DELIMITER: u8 = b',';

/// Rows of string cells. Row 0 is the header and every row has the same
/// number of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    rows: Vec<Vec<String>>,
}

impl CellGrid {
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// All rows after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    pub fn column_count(&self) -> usize {
        self.header().len()
    }
}

/// Picks the field delimiter from a file extension: tab for `.tsv`, comma
/// otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => DEFAULT_DELIMITER,
    }
}

pub fn parse_grid(text: &str, delimiter: u8) -> Result<CellGrid, Error> {
    let text = text.trim_start_matches('\u{feff}');
    if text.trim().is_empty() {
        return Err(Error::parse("CSV input is empty"));
    }

    if let Some(line) = find_unterminated_quote(text, delimiter) {
        return Err(Error::parse(format!(
            "unterminated quoted field starting on line {}",
            line
        )));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    if rows.is_empty() {
        return Err(Error::parse("CSV input has no rows"));
    }

    Ok(CellGrid { rows })
}

/// Returns the 1-based line where a quoted field opens without ever closing.
///
/// A quote only opens a quoted field at the start of a field; inside one, `""`
/// is an escaped quote. Quotes in the middle of unquoted fields are literal.
fn find_unterminated_quote(text: &str, delimiter: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut line = 1;
    let mut quote_line = 0;
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        if in_quotes {
            if byte == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            }
        } else if byte == b'"' && at_field_start {
            in_quotes = true;
            quote_line = line;
        }

        if byte == b'\n' {
            line += 1;
        }
        at_field_start = !in_quotes && (byte == delimiter || byte == b'\n' || byte == b'\r');
        i += 1;
    }

    in_quotes.then_some(quote_line)
}
