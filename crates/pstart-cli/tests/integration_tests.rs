//! Integration tests for the `pstart` binary.

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A scratch working directory with an empty config file, isolated from
/// the user's environment.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pstart.toml"), "").unwrap();
        Self { dir }
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo::cargo_bin_cmd!("pstart");
        cmd.current_dir(self.dir.path())
            .env_remove("PSTART_CONFIG_DIR")
            .env("NO_COLOR", "1")
            .arg("--config")
            .arg(self.dir.path().join("pstart.toml"));
        cmd
    }

    fn path(&self, rel: &str) -> std::path::PathBuf {
        self.dir.path().join(rel)
    }
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo::cargo_bin_cmd!("pstart");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_version_flag() {
    let mut cmd = cargo::cargo_bin_cmd!("pstart");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let mut cmd = cargo::cargo_bin_cmd!("pstart");
    cmd.assert().failure().code(2);
}

// ── create ────────────────────────────────────────────────────────────────────

#[test]
fn test_create_terraform_with_cicd_and_tests() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["create", "-t", "terraform", "-n", "demo", "-c", "github", "-s"])
        .assert()
        .success();

    assert!(sb.path("demo/main.tf").is_file());
    assert!(sb.path("demo/.gitignore").is_file());
    assert!(sb.path("demo/.github/workflows/main.yml").is_file());
    assert!(sb.path("demo/tests/main_test.go").is_file());
}

#[test]
fn test_create_defaults_name_to_type() {
    let sb = Sandbox::new();
    sb.cmd().args(["create", "-t", "ansible"]).assert().success();

    assert!(sb.path("ansible").is_dir());
}

#[test]
fn test_create_type_alias() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["new", "-t", "tf", "-n", "infra"])
        .assert()
        .success();

    assert!(sb.path("infra/main.tf").is_file());
}

#[test]
fn test_create_unknown_type_creates_nothing() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["create", "-t", "pulumi", "-n", "demo"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error"));

    assert!(!sb.path("demo").exists());
}

#[test]
fn test_create_unknown_pattern_exits_not_found() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["create", "-t", "terraform", "-n", "demo", "-p", "nope"])
        .assert()
        .failure()
        .code(3);

    assert!(!sb.path("demo").exists());
}

#[test]
fn test_create_into_existing_directory_fails() {
    let sb = Sandbox::new();
    fs::create_dir(sb.path("demo")).unwrap();
    fs::write(sb.path("demo/keep.txt"), "mine").unwrap();

    sb.cmd()
        .args(["create", "-t", "terraform", "-n", "demo"])
        .assert()
        .failure()
        .code(2);

    assert_eq!(fs::read_to_string(sb.path("demo/keep.txt")).unwrap(), "mine");
    assert!(!sb.path("demo/main.tf").exists());
}

#[test]
fn test_create_unknown_cicd_is_partial_success() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["create", "-t", "terraform", "-n", "demo", "-c", "bitbucket"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Warning"));

    assert!(sb.path("demo/main.tf").is_file());
}

#[test]
fn test_create_dry_run_writes_nothing() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["create", "-t", "terraform", "-n", "demo", "-s", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main.tf"))
        .stdout(predicate::str::contains("main_test.go"));

    assert!(!sb.path("demo").exists());
}

#[test]
fn test_create_json_report() {
    let sb = Sandbox::new();
    let out = sb
        .cmd()
        .args(["--output-format", "json", "create", "-t", "terraform", "-n", "demo"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be JSON");
    assert_eq!(report["project_type"], "terraform");
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn test_list_table() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("terraform"))
        .stdout(predicate::str::contains("multi-module"))
        .stdout(predicate::str::contains("Jenkinsfile"));
}

#[test]
fn test_list_json() {
    let sb = Sandbox::new();
    let out = sb.cmd().args(["list", "--format", "json"]).output().unwrap();

    assert!(out.status.success());
    let catalog: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(catalog["types"].as_array().is_some_and(|t| t.len() == 2));
    assert!(catalog["cicd"].as_array().is_some_and(|c| c.len() == 5));
}

#[test]
fn test_list_filter_rejects_unknown_type() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["list", "-t", "chef"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_list_picks_up_local_config_dir() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.path("config/ansible")).unwrap();
    fs::write(
        sb.path("config/ansible/galaxy.yml"),
        "children:\n  - name: galaxy.yml\n",
    )
    .unwrap();

    sb.cmd()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ansible/galaxy"))
        .stdout(predicate::str::contains("ansible/basic"));
}

// ── delete ────────────────────────────────────────────────────────────────────

#[test]
fn test_delete_confirmed() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["create", "-t", "terraform", "-n", "demo"])
        .assert()
        .success();

    sb.cmd()
        .args(["delete", "-n", "demo"])
        .write_stdin("yes\n")
        .assert()
        .success();

    assert!(!sb.path("demo").exists());
}

#[test]
fn test_delete_declined_keeps_project() {
    let sb = Sandbox::new();
    fs::create_dir(sb.path("demo")).unwrap();

    sb.cmd()
        .args(["delete", "-n", "demo"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    assert!(sb.path("demo").is_dir());
}

#[test]
fn test_delete_missing_project() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["delete", "-n", "ghost"])
        .write_stdin("yes\n")
        .assert()
        .failure()
        .code(3);
}

// ── misc ──────────────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let mut cmd = cargo::cargo_bin_cmd!("pstart");
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pstart"));
}

#[test]
fn test_config_get_and_env_override() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auto"));

    sb.cmd()
        .env("PSTART__CREATE__ROLLBACK_ON_FAILURE", "true")
        .args(["config", "get", "create.rollback_on_failure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_missing_explicit_config_exits_4() {
    let sb = Sandbox::new();
    let mut cmd = cargo::cargo_bin_cmd!("pstart");
    cmd.current_dir(sb.dir.path())
        .args(["--config", "does-not-exist.toml", "list"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_init_writes_config_once() {
    let sb = Sandbox::new();
    let target = sb.path("conf/pstart.toml");
    let mut cmd = cargo::cargo_bin_cmd!("pstart");
    cmd.current_dir(sb.dir.path())
        .arg("--config")
        .arg(&target)
        .arg("init")
        .assert()
        .success();

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("rollback_on_failure"));

    fs::write(&target, "# mine\n").unwrap();
    let mut again = cargo::cargo_bin_cmd!("pstart");
    again
        .current_dir(sb.dir.path())
        .arg("--config")
        .arg(&target)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "# mine\n");
}

#[test]
fn test_delete_refuses_working_directory() {
    let sb = Sandbox::new();
    for name in [".", ".."] {
        sb.cmd()
            .args(["delete", "-n", name])
            .write_stdin("yes\n")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("working directory"));
    }
    assert!(sb.path("pstart.toml").is_file());
}
