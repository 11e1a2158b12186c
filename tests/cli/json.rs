use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_json_locale_map() -> Result<()> {
    let test = CliTest::with_file(
        "resources/langs/en-US.json",
        r#"{"title": "Hello", "menu": {"open": "Open", "items": {"one": "1 item", "other": "{} items"}}}"#,
    )?;
    test.write_file("resources/langs/de.json", r#"{"title": "Hallo"}"#)?;

    let output = test.run(&["--format", "json"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Generated"));
    assert!(stdout(&output).contains("codegen_loader.g.dart"));

    let loader = test.read_file("lib/generated/codegen_loader.g.dart")?;
    assert!(loader.starts_with("// DO NOT EDIT."));
    assert!(loader.contains("class CodegenLoader extends AssetLoader {"));
    // directory order, sorted by file name
    assert!(loader.contains(r#"mapLocales = {"de": de, "en_US": en_US};"#));

    let marker = "static const Map<String,dynamic> en_US = ";
    let start = loader.find(marker).unwrap() + marker.len();
    let end = start + loader[start..].find(";\n").unwrap();
    let literal: Value = serde_json::from_str(&loader[start..end])?;
    let original: Value = serde_json::from_str(&test.read_file("resources/langs/en-US.json")?)?;
    assert_eq!(literal, original);

    assert!(!test.exists("lib/generated/locale_keys.g.dart"));

    Ok(())
}

#[test]
fn test_json_keys() -> Result<()> {
    let test = CliTest::with_file(
        "resources/langs/en.json",
        r#"{"a": {"b": "x"}, "other": "y"}"#,
    )?;

    let output = test.run(&["-f", "keys", "-o", "locale_keys.g.dart"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let keys = test.read_file("lib/generated/locale_keys.g.dart")?;
    assert_eq!(
        keys,
        "// DO NOT EDIT. This is code generated by l10n-gen\n\
         \n\
         // ignore_for_file: constant_identifier_names\n\
         \n\
         abstract class LocaleKeys {\n\
         \x20 static const a_b = 'a.b';\n\
         \x20 static const a = 'a';\n\
         \x20 static const other = 'other';\n\
         }\n"
    );

    Ok(())
}

#[test]
fn test_json_explicit_source_file() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{"only_en": "x"}"#)?;
    test.write_file("i18n/de.json", r#"{"only_de": "y"}"#)?;

    let output = test.run(&["-S", "i18n", "-s", "en.json", "-f", "keys", "-O", "gen"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let keys = test.read_file("gen/codegen_loader.g.dart")?;
    assert!(keys.contains("static const only_en = 'only_en';"));
    assert!(!keys.contains("only_de"));

    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let test = CliTest::with_file(
        "resources/langs/en.json",
        r#"{"z": {"y": "1"}, "a": {"one": "2", "other": "3"}, "m": "4"}"#,
    )?;

    test.run(&["-f", "json"])?;
    let first = test.read_file("lib/generated/codegen_loader.g.dart")?;
    test.run(&["-f", "json"])?;
    let second = test.read_file("lib/generated/codegen_loader.g.dart")?;
    assert_eq!(first, second);

    Ok(())
}
