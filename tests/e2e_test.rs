//! End-to-end tests for the md2page binary.

mod common;

use anyhow::Result;
use common::{markdown_fixture, read_page};
use std::process::Command;

fn md2page() -> Command {
    Command::new(env!("CARGO_BIN_EXE_md2page"))
}

/// Tests binary writes next to the input by default.
#[test]
fn test_default_output_path_e2e() -> Result<()> {
    // Arrange
    let (dir, input) = markdown_fixture("report.md", "# Report\n\nBody.\n")?;

    // Act
    let output = md2page().arg(&input).output()?;

    // Assert
    assert!(
        output.status.success(),
        "Should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let page = read_page(&dir.path().join("report.html"))?;
    assert!(page.contains("<title>report.md - Markdown 转换</title>"));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("report.html"),
        "Should log the output path"
    );
    Ok(())
}

/// Tests binary options reach the generated page.
#[test]
fn test_options_e2e() -> Result<()> {
    // Arrange
    let (dir, input) = markdown_fixture("guide.md", "# One\n\n# Two\n\n```\nx\n```\n")?;
    let target = dir.path().join("site.html");

    // Act
    let status = md2page()
        .arg(&input)
        .args(["-o", target.to_str().expect("Temp path should be UTF8")])
        .args(["--css", "custom.css", "--title", "Guide"])
        .args(["--toc-title", "Contents", "--no-linenums"])
        .status()?;

    // Assert
    assert!(status.success());
    let page = read_page(&target)?;
    assert!(page.contains("<title>Guide</title>"));
    assert!(page.contains("<link rel=\"stylesheet\" href=\"custom.css\">"));
    assert!(page.contains("<span class=\"toctitle\">Contents</span>"));
    assert!(!page.contains("<td class=\"linenos\">"), "Line numbers disabled");
    Ok(())
}

/// Tests binary exits with failure for missing input.
#[test]
fn test_missing_input_e2e() -> Result<()> {
    // Arrange
    let dir = tempfile::TempDir::new()?;
    let input = dir.path().join("missing.md");

    // Act
    let output = md2page().arg(&input).output()?;

    // Assert
    assert!(!output.status.success(), "Should fail for missing input");
    assert!(!dir.path().join("missing.html").exists());
    Ok(())
}
