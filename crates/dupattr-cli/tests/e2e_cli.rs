//! dupattr 命令行端到端测试

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn dupattr() -> Command {
    cargo_bin_cmd!("dupattr")
}

/// 在临时目录中写入一个源文件
fn source(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn shows_help() {
    dupattr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn reports_duplicates_in_text_form() {
    let dir = TempDir::new().unwrap();
    let file = source(&dir, "Profile.tsx", "<div>\n  <Bar onClick={fn} disabled disabled />\n</div>\n");

    dupattr()
        .arg("scan")
        .arg(&file)
        .assert()
        .success()
        .stdout(
            "Duplicate attributes [disabled] in tag <Bar>:\n\
             Full attributes string: onClick={fn} disabled disabled\n\
             --------------------\n",
        );
}

#[test]
fn clean_file_prints_fixed_message() {
    let dir = TempDir::new().unwrap();
    let file = source(&dir, "Clean.tsx", "<Foo a=\"1\" b={2} />\n");

    dupattr()
        .args(["scan"])
        .arg(&file)
        .assert()
        .success()
        .stdout("No duplicate attributes found.\n");
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let file = source(&dir, "x.html", "<p>\n<img src=\"a\" src=\"b\">\n");

    let out = dupattr()
        .args(["scan", "--format", "json"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("\"tag\":\"img\""), "{text}");
    assert!(text.contains("\"duplicates\":[\"src\"]"), "{text}");
    assert!(text.contains("\"line\":2"), "{text}");
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();

    dupattr()
        .arg("scan")
        .arg(dir.path().join("missing.tsx"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn missing_path_argument_is_usage_error() {
    dupattr().arg("scan").assert().failure();
}

#[test]
fn deny_sets_failure_status_only_on_findings() {
    let dir = TempDir::new().unwrap();
    let dirty = source(&dir, "dirty.tsx", "<Foo x=\"1\" x=\"2\" />");
    let clean = source(&dir, "clean.tsx", "<Foo x=\"1\" />");

    dupattr()
        .args(["scan", "--deny"])
        .arg(&dirty)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("in tag <Foo>"));

    dupattr().args(["scan", "--deny"]).arg(&clean).assert().success();
}

#[test]
fn bad_pattern_file_fails_before_scanning() {
    let dir = TempDir::new().unwrap();
    let file = source(&dir, "a.tsx", "<Foo x x />");
    let patterns = source(&dir, "patterns.toml", "tag = '<[a-z]+>'\n");

    dupattr()
        .arg("scan")
        .arg(&file)
        .arg("--patterns")
        .arg(&patterns)
        .assert()
        .failure()
        .stderr(predicate::str::contains("capture group"));
}
