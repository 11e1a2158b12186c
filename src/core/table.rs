//! All locales of a CSV/TSV resource as one table.
//!
//! Column 0 holds the translation key and every other column is a locale
//! named by the header row:
//!
//! ```text
//! key,en,fr
//! greeting,Hello,Bonjour
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::emit::{LocaleSource, NEWLINE_SENTINEL};
use super::error::Error;
use super::parsers::csv::{CellGrid, parse_grid};

#[derive(Debug, Clone)]
pub struct LocaleTable {
    grid: CellGrid,
}

impl LocaleTable {
    pub fn parse(text: &str, delimiter: u8) -> Result<Self, Error> {
        Self::from_grid(parse_grid(text, delimiter)?)
    }

    /// Wraps a parsed grid, rejecting a header without locale columns, rows
    /// without a key and keys that appear on more than one row.
    pub fn from_grid(grid: CellGrid) -> Result<Self, Error> {
        if grid.column_count() < 2 {
            return Err(Error::parse(
                "CSV header must contain a key column followed by at least one locale",
            ));
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, row) in grid.data_rows().iter().enumerate() {
            // 1-based, header is row 1
            let row_number = index + 2;
            if row[0].trim().is_empty() {
                return Err(Error::parse(format!("empty key on row {}", row_number)));
            }
            if let Some(first) = seen.insert(row[0].as_str(), row_number) {
                return Err(Error::parse(format!(
                    "duplicate key `{}` on rows {} and {}",
                    row[0], first, row_number
                )));
            }
        }

        Ok(Self { grid })
    }

    /// Locale identifiers in header order.
    pub fn locales(&self) -> &[String] {
        &self.grid.header()[1..]
    }

    /// Translation keys in row order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.grid.data_rows().iter().map(|row| row[0].as_str())
    }

    pub fn translations_for(&self, locale: &str) -> Result<Map<String, Value>, Error> {
        let column = self
            .locales()
            .iter()
            .position(|l| l == locale)
            .map(|i| i + 1)
            .ok_or_else(|| Error::UnknownLocale(locale.to_string()))?;

        Ok(self
            .grid
            .data_rows()
            .iter()
            .map(|row| (row[0].clone(), Value::String(row[column].clone())))
            .collect())
    }
}

impl LocaleSource for LocaleTable {
    fn locales(&self) -> Vec<String> {
        LocaleTable::locales(self).to_vec()
    }

    /// Newlines in values are replaced by the sentinel so the runtime can
    /// restore them.
    fn locale_map(&self, locale: &str) -> Result<Map<String, Value>, Error> {
        let mut map = self.translations_for(locale)?;
        for value in map.values_mut() {
            if let Value::String(s) = value {
                *s = s.replace("\r\n", "\n").replace('\n', NEWLINE_SENTINEL);
            }
        }
        Ok(map)
    }
}
