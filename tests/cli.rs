use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("serpview").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serpview"));
}

#[test]
fn export_prints_tags_for_inline_flags() {
    let mut cmd = Command::cargo_bin("serpview").unwrap();
    cmd.args([
        "export",
        "--title",
        "Hello & Goodbye",
        "--url",
        "https://example.com/a",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<title>Hello &amp; Goodbye</title>"))
        .stdout(predicate::str::contains(
            r#"<meta property="og:url" content="https://example.com/a" />"#,
        ))
        .stdout(predicate::str::contains(
            r#"<meta name="twitter:card" content="summary" />"#,
        ));
}

#[test]
fn export_writes_file_with_status_line() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tags.html");
    let mut cmd = Command::cargo_bin("serpview").unwrap();
    cmd.args(["export", "--title", "Hello"])
        .arg("--out")
        .arg(&out);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Saved 5 tags"));
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("<title>Hello</title>"));
}

#[test]
fn check_reports_field_status() {
    let mut cmd = Command::cargo_bin("serpview").unwrap();
    cmd.args([
        "check",
        "--title",
        "This title sits inside the optimal range for a page!",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("optimal — Optimal"))
        .stdout(predicate::str::contains("description"));
}

#[test]
fn preview_desktop_reads_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "title": "Best Wireless Headphones 2025",
            "url": "https://www.techreviews.com/audio/headphones",
            "rich_results": {{
                "breadcrumbs": {{ "enabled": true, "items": ["Home", "Audio"] }},
                "date": {{ "enabled": true, "value": "2025-01-15" }}
            }}
        }}"#
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("serpview").unwrap();
    cmd.args(["preview", "--platform", "desktop"])
        .arg("--input")
        .arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("www.techreviews.com › Home › Audio"))
        .stdout(predicate::str::contains("Jan 15, 2025 —"));
}

#[test]
fn preview_twitter_truncates_by_characters() {
    let long_title = "t".repeat(80);
    let mut cmd = Command::cargo_bin("serpview").unwrap();
    cmd.args(["preview", "--platform", "twitter", "--title", &long_title]);
    let expected = format!("{}...", "t".repeat(67));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn preview_rejects_bad_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let mut cmd = Command::cargo_bin("serpview").unwrap();
    cmd.args(["preview"]).arg("--input").arg(file.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("parsing"));
}
