use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["wrap"]["pattern"], "src/**/*.{js,jsx,ts,tsx}");
    assert_eq!(parsed["wrap"]["processKorean"], true);
    assert_eq!(parsed["wrap"]["importSource"], "i18nexus");
    assert_eq!(parsed["extract"]["format"], "json");
    assert_eq!(parsed["extract"]["languages"], serde_json::json!(["en", "ko"]));

    assert!(
        content.contains("\n  \"wrap\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .i18nexusrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".i18nexusrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nexusrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .i18nexusrc.json already exists
    ");

    assert_eq!(test.read_file(".i18nexusrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file(
        "src/App.tsx",
        "export function App() { return <div>테스트</div>; }\n",
    )?;

    let output = test.wrap_command().arg("--dry-run").output()?;
    assert!(
        output.status.success(),
        "wrap should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
