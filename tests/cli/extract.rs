use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

const APP: &str = r#"export function App() {
  const { t } = useTranslation();
  return (
    <div>
      <h1>{t("welcome")}</h1>
      <p>{t("goodbye", { defaultValue: "Bye" })}</p>
      <span>{t("welcome")}</span>
    </div>
  );
}
"#;

#[test]
fn test_extract_writes_language_files() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let expected = json!({ "goodbye": "Bye", "welcome": "welcome" });
    assert_eq!(test.read_json("locales/en.json")?, expected);
    assert_eq!(test.read_json("locales/ko.json")?, expected);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Extracted 2 keys from 1 file"));
    assert!(stdout.contains("1 duplicate key"));

    Ok(())
}

#[test]
fn test_extract_keys_are_sorted() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    test.extract_command().args(["-l", "en"]).output()?;

    assert_eq!(
        test.read_file("locales/en.json")?,
        "{\n  \"goodbye\": \"Bye\",\n  \"welcome\": \"welcome\"\n}\n"
    );
    assert!(!test.root().join("locales/ko.json").exists());

    Ok(())
}

#[test]
fn test_extract_merge_keeps_existing_translations() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;
    test.write_file(
        "locales/ko.json",
        r#"{ "welcome": "환영합니다", "legacy": "옛날" }"#,
    )?;

    let output = test.extract_command().args(["-l", "ko"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_json("locales/ko.json")?,
        json!({ "goodbye": "Bye", "legacy": "옛날", "welcome": "환영합니다" })
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("(1 new key)"));

    Ok(())
}

#[test]
fn test_extract_no_merge_overwrites() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;
    test.write_file("locales/ko.json", r#"{ "welcome": "환영합니다" }"#)?;

    test.extract_command()
        .args(["-l", "ko", "--no-merge"])
        .output()?;

    assert_eq!(
        test.read_json("locales/ko.json")?,
        json!({ "goodbye": "Bye", "welcome": "welcome" })
    );

    Ok(())
}

#[test]
fn test_extract_namespace_layout() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    test.extract_command().args(["-n", "home"]).output()?;

    assert!(test.root().join("locales/en/home.json").exists());
    assert!(test.root().join("locales/ko/home.json").exists());

    Ok(())
}

#[test]
fn test_extract_single_language_namespace() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = test
        .extract_command()
        .args(["-l", "ko", "-n", "common"])
        .output()?;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        test.read_json("locales/common.json")?,
        json!({ "goodbye": "Bye", "welcome": "welcome" })
    );
    assert!(!test.root().join("locales/ko").exists());

    Ok(())
}

#[test]
fn test_extract_json_output_file() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = test
        .extract_command()
        .args(["-o", "keys.json", "-l", "en"])
        .output()?;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        test.read_json("locales/keys.json")?,
        json!({ "goodbye": "Bye", "welcome": "welcome" })
    );
    assert!(!test.root().join("locales/en.json").exists());

    Ok(())
}

#[test]
fn test_extract_csv() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.tsx",
        r#"function App() { return <p>{t("say, \"hi\"")}</p>; }"#,
    )?;

    let output = test.extract_command().args(["-f", "csv"]).output()?;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        test.read_file("locales/extracted-translations.csv")?,
        "Key,English,Korean\n\"say, \"\"hi\"\"\",,\"say, \"\"hi\"\"\"\n"
    );

    Ok(())
}

#[test]
fn test_extract_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = test.extract_command().arg("--dry-run").output()?;

    assert!(output.status.success());
    assert!(!test.root().join("locales").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Would write ./locales/en.json"));
    assert!(stdout.contains("\"goodbye\": \"Bye\""));

    Ok(())
}

#[test]
fn test_extract_listing_with_file_paths() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;

    let output = test
        .extract_command()
        .args(["--dry-run", "--file-paths", "--line-numbers"])
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("goodbye  src/App.tsx:6"));
    assert!(stdout.contains("welcome  src/App.tsx:5"));

    Ok(())
}

#[test]
fn test_extract_unreadable_file_fails() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", APP)?;
    std::fs::write(test.root().join("src/Binary.tsx"), [0xff, 0xfe, 0x00, 0x80])?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read file"));
    assert!(!test.root().join("locales").exists());

    Ok(())
}
