use std::path::Path;

use serde_json::{Map, Value};

use crate::core::error::Error;

/// One locale's translations, with siblings kept in document order.
pub type TranslationTree = Map<String, Value>;

pub fn parse_tree(text: &str) -> Result<TranslationTree, Error> {
    let text = text.trim_start_matches('\u{feff}');
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::parse(format!(
            "root of a translation file must be an object, found {}",
            value_kind(&other)
        ))),
    }
}

/// Derives a locale identifier from a file name.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "en-US.json" -> Some("en_US")
/// - "/path/to/langs/zh-Hant-TW.json" -> Some("zh_Hant_TW")
pub fn locale_identifier(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.replace('-', "_"))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
