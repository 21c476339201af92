use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("iforcedump"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn golden_case(name: &str) -> std::path::PathBuf {
    repo_root().join("tests").join("golden").join(name)
}

#[test]
fn help_lists_sdl_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--sdl"));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.txt");

    cmd()
        .arg(missing)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn directory_input_is_rejected() {
    let temp = TempDir::new().expect("tempdir");

    cmd()
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(contains("input is not a file"));
}

#[test]
fn text_output_matches_golden() {
    let case = golden_case("constant_session");
    let expected = fs::read_to_string(case.join("expected_text.txt")).expect("expected text");

    let assert = cmd().arg(case.join("input.txt")).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    assert_eq!(stdout, expected);
}

#[test]
fn sdl_output_matches_golden() {
    let case = golden_case("periodic_and_condition");
    let expected = fs::read_to_string(case.join("expected_sdl.txt")).expect("expected sdl");

    let assert = cmd()
        .arg(case.join("input.txt"))
        .arg("--sdl")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    assert_eq!(stdout, expected);
}

#[test]
fn glob_resolves_single_match() {
    let temp = TempDir::new().expect("tempdir");
    fs::write(temp.path().join("wheel-01.txt"), "0.5\t4380\n").expect("write dump");
    let pattern = temp.path().join("wheel-*.txt");

    cmd()
        .arg(pattern)
        .assert()
        .success()
        .stdout(contains("0.50 Set gain").and(contains("Gain: 128 (100.0 %)")));
}

#[test]
fn existing_file_with_glob_characters_is_read_literally() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("capture[1].txt");
    fs::write(&input, "0.5\t4380\n").expect("write dump");
    fs::write(temp.path().join("capture1.txt"), "0.7\t4340\n").expect("write decoy");

    cmd()
        .arg(input)
        .assert()
        .success()
        .stdout("0.50 Set gain\n\tGain: 128 (100.0 %)\n");
}

#[test]
fn glob_with_multiple_matches_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    fs::write(temp.path().join("a.txt"), "0.5\t4380\n").expect("write dump");
    fs::write(temp.path().join("b.txt"), "0.6\t4380\n").expect("write dump");
    let pattern = temp.path().join("*.txt");

    cmd()
        .arg(pattern)
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern").and(contains("hint:")));
}

#[test]
fn glob_without_matches_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let pattern = temp.path().join("*.txt");

    cmd()
        .arg(pattern)
        .assert()
        .failure()
        .stderr(contains("no files match pattern"));
}

#[test]
fn garbage_input_produces_empty_output() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("noise.txt");
    fs::write(&input, "hello world\n0.1\tzz\n0.2\t7700\n").expect("write dump");

    cmd().arg(input).assert().success().stdout("");
}
