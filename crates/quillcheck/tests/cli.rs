//! Black-box tests for the compiled binary.
//!
//! Each test spawns the real executable and checks streams and exit codes,
//! the same way a shell user would see them.

use assert_cmd::Command;
use assert_cmd::assert::Assert;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// A command for the built binary.
///
/// `cargo_bin` carries a deprecation note about exotic target-dir setups;
/// for a plain workspace layout it resolves fine.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A temp file pre-loaded with `text`, kept alive by the returned handle.
fn sample(text: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), text).unwrap();
    file
}

/// Parse a successful run's stdout as JSON.
fn stdout_json(assert: Assert) -> serde_json::Value {
    let raw = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    serde_json::from_str(&raw).expect("stdout should be valid JSON")
}

// --- help and version ---

#[test]
fn help_lists_usage_commands_and_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_works() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_prints_package_version() {
    for flag in ["--version", "-V"] {
        cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn version_only_emits_the_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(concat!(
            env!("CARGO_PKG_VERSION"),
            "\n"
        )));
}

// --- info ---

#[test]
fn info_text_names_the_package() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_carries_package_fields() {
    let json = stdout_json(cmd().args(["info", "--json"]).assert().success());
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_help_mentions_the_json_flag() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// --- global flags ---

#[test]
fn verbosity_flags_accepted() {
    for flag in ["--quiet", "-q", "--verbose", "-v", "-vv"] {
        cmd().args([flag, "info"]).assert().success();
    }
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

// --- check ---

#[test]
fn check_reports_a_misspelling() {
    let input = sample("i seperate it.");
    cmd()
        .args(["--color", "never", "check", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commonly misspelled word"))
        .stdout(predicate::str::contains("fix: \"separate\""));
}

#[test]
fn check_clean_file_reports_no_issues() {
    let input = sample("Hello.");
    cmd()
        .args(["--color", "never", "check", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("100/100"))
        .stdout(predicate::str::contains("Words: 1"))
        .stdout(predicate::str::contains("Issues: none detected"));
}

#[test]
fn check_json_reports_positions_and_scores() {
    let input = sample("i seperate it.");
    let json = stdout_json(
        cmd()
            .args(["--json", "check", input.path().to_str().unwrap()])
            .assert()
            .success(),
    );

    assert_eq!(json["stats"]["wordCount"], 3);
    assert_eq!(json["stats"]["categoryScores"]["spelling"], 95);
    let spelling = json["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["category"] == "spelling")
        .expect("spelling diagnostic");
    assert_eq!(spelling["offset"], 2);
    assert_eq!(spelling["length"], 8);
}

#[test]
fn check_categories_filters_the_report() {
    let input = sample("i seperate it.");
    let json = stdout_json(
        cmd()
            .args([
                "--json",
                "check",
                input.path().to_str().unwrap(),
                "--categories",
                "spelling",
            ])
            .assert()
            .success(),
    );

    let diagnostics = json["diagnostics"].as_array().unwrap();
    assert!(!diagnostics.is_empty());
    assert!(diagnostics.iter().all(|d| d["category"] == "spelling"));
}

#[test]
fn check_unknown_category_fails() {
    let input = sample("text");
    cmd()
        .args([
            "check",
            input.path().to_str().unwrap(),
            "--categories",
            "bogus",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn check_min_score_gate_fails_low_scores() {
    let input = sample("i seperate it.He are happy");
    cmd()
        .args(["check", input.path().to_str().unwrap(), "--min-score", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the minimum"));
}

#[test]
fn check_min_score_gate_passes_clean_text() {
    let input = sample("Hello.");
    cmd()
        .args([
            "check",
            input.path().to_str().unwrap(),
            "--min-score",
            "100",
        ])
        .assert()
        .success();
}

#[test]
fn check_missing_file_fails() {
    cmd()
        .args(["check", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// --- fix ---

#[test]
fn fix_prints_the_corrected_text() {
    let input = sample("You could of  known");
    cmd()
        .args(["fix", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("You could have known"));
}

#[test]
fn fix_passes_clean_text_through() {
    let input = sample("Nothing wrong here.");
    cmd()
        .args(["fix", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("Nothing wrong here."));
}

#[test]
fn fix_write_updates_the_file() {
    let input = sample("i seperate it.");
    cmd()
        .args(["fix", input.path().to_str().unwrap(), "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("applied"));

    let fixed = std::fs::read_to_string(input.path()).unwrap();
    assert_eq!(fixed, "i separate it.");
}

#[test]
fn fix_write_leaves_clean_files_untouched() {
    let input = sample("Hello.");
    cmd()
        .args(["fix", input.path().to_str().unwrap(), "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to fix"));
}

#[test]
fn fix_json_reports_the_outcome() {
    let input = sample("end.world");
    let json = stdout_json(
        cmd()
            .args(["--json", "fix", input.path().to_str().unwrap()])
            .assert()
            .success(),
    );

    assert_eq!(json["fixed_text"], "end. World");
    assert_eq!(json["applied"], 2);
}

// --- schema ---

#[test]
fn schema_outputs_a_json_schema() {
    let json = stdout_json(cmd().arg("schema").assert().success());
    assert_eq!(json["title"], "AnalysisReport");
    assert!(json["properties"]["diagnostics"].is_object());
    assert!(json["properties"]["stats"].is_object());
}

// --- argument errors ---

#[test]
fn bare_invocation_prints_help_to_stderr() {
    // clap's arg_required_else_help path: help text, exit code 2.
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_subcommand_errors() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn unknown_flag_errors() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// --- chdir ---

#[test]
fn chdir_to_an_existing_directory_works() {
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_to_a_missing_directory_fails() {
    cmd()
        .args(["-C", "/nonexistent/this/is/not/a/dir", "info"])
        .assert()
        .failure();
}
