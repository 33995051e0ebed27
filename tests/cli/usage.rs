use anyhow::Result;

use crate::CliTest;

#[test]
fn test_help_exits_successfully() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wrap"));
    assert!(stdout.contains("extract"));
    assert!(stdout.contains("init"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));

    Ok(())
}

#[test]
fn test_unknown_flag_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.wrap_command().arg("--no-such-flag").output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_unknown_format_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().args(["-f", "xml"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("xml"));

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nexusrc.json",
        r#"{ "wrap": { "textRegex": "(" } }"#,
    )?;

    let output = test.wrap_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("wrap.textRegex"));

    Ok(())
}
