use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::CliTest;

const WELCOME: &str = "function Welcome() { return <h1>환영합니다</h1>; }\n";

const WELCOME_WRAPPED: &str = "import { useTranslation } from \"i18nexus\";\n\
function Welcome() { const { t } = useTranslation(); return <h1>{t(\"환영합니다\")}</h1>; }\n";

#[test]
fn test_wrap_rewrites_component() -> Result<()> {
    let test = CliTest::with_file("src/Welcome.tsx", WELCOME)?;

    let output = test.wrap_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("src/Welcome.tsx")?, WELCOME_WRAPPED);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("src/Welcome.tsx - Modified"));
    assert!(stdout.contains("Wrapped 1 string in 1 file"));
    assert!(!test.root().join("locales").exists());

    Ok(())
}

#[test]
fn test_wrap_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::with_file("src/Welcome.tsx", WELCOME)?;

    let output = test.wrap_command().arg("--dry-run").output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("src/Welcome.tsx")?, WELCOME);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("src/Welcome.tsx - Would be modified"));

    Ok(())
}

#[test]
fn test_wrap_twice_changes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/Welcome.tsx", WELCOME)?;

    test.wrap_command().output()?;
    let output = test.wrap_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("src/Welcome.tsx")?, WELCOME_WRAPPED);
    assert!(String::from_utf8_lossy(&output.stdout).contains("nothing to wrap"));

    Ok(())
}

#[test]
fn test_wrap_skips_non_components_and_unmatched_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/constants.ts", "export const TITLE = \"제목\";\n")?;
    test.write_file("src/notes.md", "# 제목\n")?;
    test.write_file("lib/Other.tsx", WELCOME)?;

    let output = test.wrap_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("src/constants.ts")?,
        "export const TITLE = \"제목\";\n"
    );
    assert_eq!(test.read_file("lib/Other.tsx")?, WELCOME);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Scanned 1 file - nothing to wrap"));

    Ok(())
}

#[test]
fn test_wrap_custom_pattern() -> Result<()> {
    let test = CliTest::with_file("app/Welcome.jsx", WELCOME)?;

    let output = test.wrap_command().args(["-p", "app/**/*.jsx"]).output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("app/Welcome.jsx")?, WELCOME_WRAPPED);

    Ok(())
}

#[test]
fn test_wrap_generates_key_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/Hero.tsx",
        "export function Hero() { return <h1>Hello World</h1>; }\n",
    )?;
    test.write_file("locales/home.json", r#"{ "existing": "값" }"#)?;

    let output = test
        .wrap_command()
        .args(["-g", "-e", "--no-korean", "-n", "home"])
        .output()?;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        test.read_file("src/Hero.tsx")?,
        "import { useTranslation } from \"i18nexus\";\n\
         export function Hero() { const { t } = useTranslation(\"home\"); return <h1>{t(\"helloWorld\")}</h1>; }\n"
    );
    assert_eq!(
        test.read_json("locales/home.json")?,
        json!({ "existing": "값", "helloWorld": "Hello World" })
    );

    Ok(())
}

#[test]
fn test_wrap_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("src/Welcome.tsx", WELCOME)?;
    test.write_file(
        ".i18nexusrc.json",
        r#"{ "wrap": { "importSource": "react-i18next" } }"#,
    )?;

    let output = test.wrap_command().output()?;

    assert!(output.status.success());
    assert!(
        test.read_file("src/Welcome.tsx")?
            .starts_with("import { useTranslation } from \"react-i18next\";\n")
    );

    Ok(())
}

#[test]
fn test_wrap_verbose_notes_default_config() -> Result<()> {
    let test = CliTest::with_file("src/Welcome.tsx", WELCOME)?;

    let output = test.wrap_command().args(["-v", "--dry-run"]).output()?;

    assert!(output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Note: No .i18nexusrc.json found, using default configuration")
    );

    test.write_file(".i18nexusrc.json", "{}")?;
    let output = test.wrap_command().args(["-v", "--dry-run"]).output()?;
    assert!(!String::from_utf8_lossy(&output.stderr).contains("using default configuration"));

    Ok(())
}

#[test]
fn test_wrap_continues_past_parse_errors() -> Result<()> {
    let test = CliTest::with_file("src/Welcome.tsx", WELCOME)?;
    test.write_file("src/Broken.tsx", "function Broken( { return <p>; }\n")?;

    let output = test.wrap_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("src/Welcome.tsx")?, WELCOME_WRAPPED);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_wrap_unreadable_file_fails() -> Result<()> {
    let test = CliTest::with_file("src/Welcome.tsx", WELCOME)?;
    std::fs::write(test.root().join("src/Binary.tsx"), [0xff, 0xfe, 0x00, 0x80])?;

    let output = test.wrap_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read file: src/Binary.tsx"));
    assert_eq!(test.read_file("src/Welcome.tsx")?, WELCOME);

    Ok(())
}
