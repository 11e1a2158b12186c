//! Rendering of generated Dart documents.
//!
//! Two kinds of document are produced:
//! - a locale map: a `CodegenLoader` asset loader holding one constant map per
//!   locale plus `mapLocales`, which the runtime uses to resolve a locale
//! - key constants: an abstract `LocaleKeys` class with one constant per
//!   translation key
//!
//! Rendering is pure. Writing the result is left to the caller.

use std::collections::HashMap;
use std::fmt::Write;

use serde_json::{Map, Value};

use super::error::Error;
use super::flatten::{FlatKey, ensure_unique_identifiers};

/// Stands in for newlines in CSV values; the runtime turns it back into `\n`.
pub const NEWLINE_SENTINEL: &str = "\u{1F601}";

pub const BANNER: &str = "// DO NOT EDIT. This is code generated by l10n-gen";

const LOADER_HEADER: &str = r#"// ignore_for_file: prefer_single_quotes

import 'dart:ui';

import 'package:easy_localization/easy_localization.dart' show AssetLoader;

class CodegenLoader extends AssetLoader {
  const CodegenLoader();

  @override
  Future<Map<String, dynamic>> load(String fullPath, Locale locale) {
    return Future.value(mapLocales[locale.toString()]);
  }
"#;

const KEYS_HEADER: &str = r#"// ignore_for_file: constant_identifier_names

abstract class LocaleKeys {
"#;

/// Anything that can hand out a translation map per locale.
pub trait LocaleSource {
    /// Locale names in emission order.
    fn locales(&self) -> Vec<String>;

    fn locale_map(&self, locale: &str) -> Result<Map<String, Value>, Error>;
}

/// Translation trees read from one JSON file per locale.
#[derive(Debug, Default)]
pub struct JsonLocales {
    entries: Vec<(String, Map<String, Value>)>,
}

impl JsonLocales {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, locale: impl Into<String>, tree: Map<String, Value>) {
        self.entries.push((locale.into(), tree));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LocaleSource for JsonLocales {
    fn locales(&self) -> Vec<String> {
        self.entries.iter().map(|(locale, _)| locale.clone()).collect()
    }

    fn locale_map(&self, locale: &str) -> Result<Map<String, Value>, Error> {
        self.entries
            .iter()
            .find(|(name, _)| name == locale)
            .map(|(_, tree)| tree.clone())
            .ok_or_else(|| Error::UnknownLocale(locale.to_string()))
    }
}

/// Dart identifier for a locale: `en-US` becomes `en_US`.
pub fn locale_constant_name(locale: &str) -> String {
    locale.replace('-', "_")
}

pub fn render_locale_map(source: &impl LocaleSource) -> Result<String, Error> {
    let locales = source.locales();

    let mut seen: HashMap<String, &str> = HashMap::new();
    for locale in &locales {
        let name = locale_constant_name(locale);
        if let Some(first) = seen.insert(name.clone(), locale) {
            return Err(Error::IdentifierCollision {
                identifier: name,
                first: first.to_string(),
                second: locale.clone(),
            });
        }
    }

    let mut out = format!("{}\n\n{}", BANNER, LOADER_HEADER);
    let mut entries = Vec::with_capacity(locales.len());

    for locale in &locales {
        let name = locale_constant_name(locale);
        let literal = json_literal(&Value::Object(source.locale_map(locale)?))?;
        let _ = writeln!(
            out,
            "\n  static const Map<String,dynamic> {} = {};",
            name, literal
        );
        entries.push(format!("\"{}\": {}", name, name));
    }

    let _ = writeln!(
        out,
        "\n  static const Map<String, Map<String,dynamic>> mapLocales = {{{}}};",
        entries.join(", ")
    );
    out.push_str("}\n");

    Ok(out)
}

pub fn render_keys(keys: &[FlatKey]) -> Result<String, Error> {
    ensure_unique_identifiers(keys)?;

    let mut out = format!("{}\n\n{}", BANNER, KEYS_HEADER);
    for key in keys {
        let _ = writeln!(
            out,
            "  static const {} = {};",
            key.identifier,
            dart_string(&key.path)
        );
    }
    out.push_str("}\n");

    Ok(out)
}

/// Serializes a value as an indented JSON literal that is also a valid Dart
/// collection literal.
///
/// `$` only ever appears inside JSON strings, where Dart would read it as
/// interpolation, so it is written as `\u0024`.
fn json_literal(value: &Value) -> Result<String, Error> {
    let json = serde_json::to_string_pretty(value)?;
    Ok(json.replace('$', "\\u0024").replace('\n', "\n  "))
}

/// Single-quoted Dart string literal.
fn dart_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
