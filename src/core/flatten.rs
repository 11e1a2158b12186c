//! Flattening of nested translation keys into constant identifiers.
//!
//! A nested tree such as `{"auth": {"login": {"title": "..."}}}` yields the
//! dotted paths `auth.login.title`, `auth.login` and `auth`, each paired with
//! an identifier where `.` becomes `_`. Plural and gender categories are
//! terminal: `{"items": {"one": "...", "other": "..."}}` yields `items.one`,
//! `items.other` and `items`, and nothing below `one`/`other` is visited.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::error::Error;

/// Keys that name plural or gender forms and are never flattened further.
pub const PRESERVED_KEYWORDS: &[&str] = &[
    "few", "many", "one", "other", "two", "zero", "male", "female",
];

/// Dart reserved words, which cannot name a constant even though they match
/// the identifier grammar.
const RESERVED_WORDS: &[&str] = &[
    "assert", "break", "case", "catch", "class", "const", "continue", "default", "do", "else",
    "enum", "extends", "false", "final", "finally", "for", "if", "in", "is", "new", "null",
    "rethrow", "return", "super", "switch", "this", "throw", "true", "try", "var", "void",
    "while", "with",
];

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatKey {
    /// Dotted path used as the runtime lookup key, e.g. `auth.login.title`.
    pub path: String,
    /// Generated constant name, e.g. `auth_login_title`.
    pub identifier: String,
}

impl FlatKey {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let identifier = path.replace('.', "_");
        Self { path, identifier }
    }
}

pub fn is_preserved_keyword(key: &str) -> bool {
    PRESERVED_KEYWORDS.contains(&key)
}

/// Flattens a translation tree in document order.
///
/// Descendants of a key come before the key's own entry.
pub fn flatten_tree(tree: &Map<String, Value>) -> Vec<FlatKey> {
    flatten_level(tree, None)
}

fn flatten_level(map: &Map<String, Value>, prefix: Option<&str>) -> Vec<FlatKey> {
    let mut keys = Vec::new();
    for (key, value) in map {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };

        if let Value::Object(children) = value
            && !is_preserved_keyword(key)
        {
            keys.extend(flatten_level(children, Some(&path)));
        }

        keys.push(FlatKey::new(path));
    }
    keys
}

/// Keys that are already flat, such as the key column of a CSV table.
pub fn flatten_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<FlatKey> {
    keys.into_iter().map(FlatKey::new).collect()
}

/// Fails on the first pair of entries that share an identifier.
pub fn ensure_unique_identifiers(keys: &[FlatKey]) -> Result<(), Error> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for key in keys {
        if let Some(first) = seen.insert(&key.identifier, &key.path) {
            return Err(Error::IdentifierCollision {
                identifier: key.identifier.clone(),
                first: first.to_string(),
                second: key.path.clone(),
            });
        }
    }
    Ok(())
}

pub fn is_valid_identifier(identifier: &str) -> bool {
    IDENTIFIER_REGEX.is_match(identifier) && !RESERVED_WORDS.contains(&identifier)
}

/// Entries whose identifier cannot be used as a Dart constant name.
pub fn invalid_identifiers(keys: &[FlatKey]) -> Vec<&FlatKey> {
    keys.iter()
        .filter(|key| !is_valid_identifier(&key.identifier))
        .collect()
}
