use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const LANGS_CSV: &str = "key,en,fr\n\
                         greeting,Hello,Bonjour\n\
                         menu.open,Open,Ouvrir\n\
                         farewell,\"Bye,\nsee you\",\"Salut\"\n";

#[test]
fn test_csv_and_keys_is_the_default() -> Result<()> {
    let test = CliTest::with_file("resources/langs/langs.csv", LANGS_CSV)?;

    let output = test.run(&[])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("codegen_loader.g.dart"));
    assert!(out.contains("locale_keys.g.dart"));

    let loader = test.read_file("lib/generated/codegen_loader.g.dart")?;
    assert!(loader.contains("static const Map<String,dynamic> en = {"));
    assert!(loader.contains("\"greeting\": \"Bonjour\""));
    assert!(loader.contains("\"farewell\": \"Bye,\u{1F601}see you\""));
    assert!(loader.contains(r#"mapLocales = {"en": en, "fr": fr};"#));

    let keys = test.read_file("lib/generated/locale_keys.g.dart")?;
    assert!(keys.contains("static const greeting = 'greeting';"));
    assert!(keys.contains("static const menu_open = 'menu.open';"));
    assert!(keys.contains("static const farewell = 'farewell';"));

    Ok(())
}

#[test]
fn test_csv_only_locale_map() -> Result<()> {
    let test = CliTest::with_file("resources/langs/langs.csv", LANGS_CSV)?;

    let output = test.run(&["-f", "csv", "-s", "langs.csv"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.exists("lib/generated/codegen_loader.g.dart"));
    assert!(!test.exists("lib/generated/locale_keys.g.dart"));

    Ok(())
}

#[test]
fn test_csv_keys_with_custom_names() -> Result<()> {
    let test = CliTest::with_file("langs/all.tsv", "key\ten\tde\nhello\tHello\tHallo\n")?;

    let output = test.run(&["-S", "langs", "-f", "csv_keys", "-O", "gen", "-o", "keys.g.dart"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let keys = test.read_file("gen/keys.g.dart")?;
    assert!(keys.contains("abstract class LocaleKeys {"));
    assert!(keys.contains("static const hello = 'hello';"));

    Ok(())
}

#[test]
fn test_invalid_identifier_warning() -> Result<()> {
    let test = CliTest::with_file("resources/langs/langs.csv", "key,en\nsign-in,Sign in\n")?;

    let output = test.run(&["-f", "csv_keys"])?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: 1 warning (use -v for details)"));

    let output = test.run(&["-f", "csv_keys", "-v"])?;
    assert!(stderr(&output).contains(
        "warning: Key 'sign-in' produces 'sign-in', which is not a valid Dart identifier"
    ));
    assert!(stdout(&output).contains("source:"));

    Ok(())
}
