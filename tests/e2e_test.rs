/// End-to-end tests for the CLI
///
/// Every run that reaches the resolver uses `--offline` against a pre-seeded
/// cache directory, so no test touches the network.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a dependency file and return its path.
fn write_dependencies(dir: &Path, records: Value) -> PathBuf {
    let path = dir.join("deps.json");
    fs::write(&path, serde_json::to_string_pretty(&records).unwrap()).unwrap();
    path
}

/// Seed one catalog cache entry that never expires.
fn seed_cache(cache_dir: &Path, product: &str, cycles: Value) {
    fs::create_dir_all(cache_dir).unwrap();
    let entry = json!({
        "value": cycles,
        "expires_at": "2999-01-01T00:00:00Z",
    });
    fs::write(
        cache_dir.join(format!("eol_api_{}.json", product)),
        entry.to_string(),
    )
    .unwrap();
}

struct Fixture {
    project: TempDir,
    cache: TempDir,
    deps: PathBuf,
}

impl Fixture {
    /// django 3.2 (ended 2022) and react 18 (supported until 2999), both cached
    fn new() -> Self {
        let project = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let deps = write_dependencies(
            project.path(),
            json!([
                {"name": "django", "version": "3.2.1", "ecosystem": "python"},
                {"name": "react", "version": "18.2.0", "ecosystem": "nodejs", "direct": true, "dev": false},
            ]),
        );
        seed_cache(
            cache.path(),
            "django",
            json!([
                {"cycle": "4.2", "eol": "2999-04-01", "latest": "4.2.11"},
                {"cycle": "3.2", "eol": "2022-04-01", "latest": "3.2.25"},
            ]),
        );
        seed_cache(
            cache.path(),
            "react",
            json!([{"cycle": "18", "eol": "2999-01-01", "latest": "18.3.1"}]),
        );
        Self {
            project,
            cache,
            deps,
        }
    }

    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("eol-check");
        cmd.arg(&self.deps)
            .arg("-p")
            .arg(self.project.path())
            .arg("--cache-dir")
            .arg(self.cache.path())
            .arg("--offline")
            .env_remove("RUST_LOG");
        cmd
    }
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("eol-check")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--offline"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("eol-check").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("eol-check")
            .args(["deps.json", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing dependency file argument
    #[test]
    fn test_exit_code_missing_dependencies_argument() {
        cargo_bin_cmd!("eol-check").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("eol-check")
            .args(["deps.json", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: --offline and --update are mutually exclusive
    #[test]
    fn test_exit_code_offline_with_update() {
        cargo_bin_cmd!("eol-check")
            .args(["deps.json", "--offline", "--update"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent project path
    #[test]
    fn test_exit_code_application_error_nonexistent_path() {
        cargo_bin_cmd!("eol-check")
            .args(["deps.json", "-p", "/nonexistent/path/that/does/not/exist"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid project path"));
    }

    /// Exit code 3: Application error - dependency file does not exist
    #[test]
    fn test_exit_code_application_error_missing_dependency_file() {
        let project = TempDir::new().unwrap();
        cargo_bin_cmd!("eol-check")
            .arg(project.path().join("missing.json"))
            .arg("-p")
            .arg(project.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Dependency file not found"));
    }

    /// Exit code 3: Application error - malformed dependency file
    #[test]
    fn test_exit_code_application_error_malformed_dependency_file() {
        let project = TempDir::new().unwrap();
        let deps = project.path().join("deps.json");
        fs::write(&deps, "{ not json").unwrap();
        cargo_bin_cmd!("eol-check")
            .arg(&deps)
            .arg("-p")
            .arg(project.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse dependency file"));
    }

    /// Exit code 1: at least one dependency is past end-of-life
    #[test]
    fn test_exit_code_critical_dependency() {
        Fixture::new().cmd().assert().code(1);
    }
}

#[test]
fn test_e2e_text_report() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("STATUS"))
        .stdout(predicate::str::contains("CRITICAL"))
        .stdout(predicate::str::contains("4.2.11 (breaking)"))
        .stdout(predicate::str::contains(
            "Summary: 1 critical, 0 warning, 1 ok, 0 unknown, 0 error (2 total)",
        ));
}

#[test]
fn test_e2e_json_report() {
    let fixture = Fixture::new();
    let output = fixture.cmd().args(["--format", "json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["tool"]["name"], "eol-check");
    assert_eq!(report["summary"]["critical"], 1);
    assert_eq!(report["summary"]["ok"], 1);
    assert_eq!(report["dependencies"][0]["name"], "django");
    assert_eq!(report["dependencies"][0]["status"], "CRITICAL");
    assert_eq!(report["dependencies"][0]["recommended_version"], "4.2.11");
    assert_eq!(report["dependencies"][1]["name"], "react");
    assert_eq!(report["dependencies"][1]["status"], "OK");
}

#[test]
fn test_e2e_ignore_flag_clears_critical() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--ignore", "django"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Ignored 1 dependencies"));
}

#[test]
fn test_e2e_ignore_file() {
    let fixture = Fixture::new();
    let ignore_file = fixture.project.path().join(".eolignore");
    fs::write(&ignore_file, "# legacy admin\ndjango\n\n").unwrap();

    fixture
        .cmd()
        .arg("--ignore-file")
        .arg(&ignore_file)
        .assert()
        .code(0);
}

#[test]
fn test_e2e_offline_without_cache_reports_errors() {
    let fixture = Fixture::new();
    let empty_cache = TempDir::new().unwrap();

    let output = cargo_bin_cmd!("eol-check")
        .arg(&fixture.deps)
        .arg("-p")
        .arg(fixture.project.path())
        .arg("--cache-dir")
        .arg(empty_cache.path())
        .args(["--offline", "--format", "json"])
        .output()
        .unwrap();

    // Missing cache data is an ERROR per dependency, not a failed run
    assert_eq!(output.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["error"], 2);
    assert!(report["dependencies"][0]["error"]
        .as_str()
        .unwrap()
        .contains("offline"));
}

#[test]
fn test_e2e_output_file() {
    let fixture = Fixture::new();
    let output_path = fixture.project.path().join("report.json");

    fixture
        .cmd()
        .args(["--format", "json", "--output"])
        .arg(&output_path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());

    let report: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(report["summary"]["total"], 2);
}

#[test]
fn test_e2e_threshold_turns_ok_into_warning() {
    let fixture = Fixture::new();
    let output = fixture
        .cmd()
        .args(["--format", "json", "--threshold", "999999"])
        .output()
        .unwrap();

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["metadata"]["threshold_days"], 999999);
    assert_eq!(report["dependencies"][1]["status"], "WARNING");
}

#[test]
fn test_e2e_clear_cache() {
    let fixture = Fixture::new();
    fs::write(fixture.cache.path().join("notes.txt"), "keep me").unwrap();

    cargo_bin_cmd!("eol-check")
        .arg("--clear-cache")
        .arg("--cache-dir")
        .arg(fixture.cache.path())
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Removed 2 cached catalog entries"));

    assert!(!fixture.cache.path().join("eol_api_django.json").exists());
    assert!(!fixture.cache.path().join("eol_api_react.json").exists());
    assert!(fixture.cache.path().join("notes.txt").exists());
}
