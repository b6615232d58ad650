//! Integration tests for tool impersonation through the driver binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Driver command isolated from the user's config and environment.
fn driver(config_home: &TempDir, tool: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("sratools");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG")
        .env("SRATOOLS_IMPERSONATE", tool);
    cmd
}

#[test]
fn test_fasterq_dump_translates_common_options() {
    let home = TempDir::new().unwrap();
    driver(&home, "fasterq-dump")
        .args(["SRR000001", "--disable-multithreading", "-L", "info"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "argv[0] = '--disable-multithreading'\nargv[1] = '-L'\nargv[2] = 'info'\n",
        ));
}

#[test]
fn test_tool_options_come_first() {
    let home = TempDir::new().unwrap();
    driver(&home, "sam-dump")
        .args(["-+", "VDB,KNS", "SRR1", "--aligned-region", "chr20", "--fastq"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "argv[0] = '--aligned-region'\nargv[1] = 'chr20'\nargv[2] = '--fastq'\n",
        ))
        .stdout(predicate::str::contains("argv[5] = '-+'\nargv[6] = 'KNS'\n"));
}

#[test]
fn test_invalid_log_level_exits_with_three() {
    let home = TempDir::new().unwrap();
    driver(&home, "fasterq-dump")
        .args(["SRR000001", "-L", "bogus"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn test_tool_validation_exits_with_three() {
    let home = TempDir::new().unwrap();
    driver(&home, "fastq-dump")
        .args(["SRR1", "--gzip", "--bzip2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn test_parse_error_still_exits_zero() {
    let home = TempDir::new().unwrap();
    driver(&home, "prefetch")
        .args(["SRR1", "--no-such-flag"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("An error occured"));
}

#[test]
fn test_help_lists_common_options() {
    let home = TempDir::new().unwrap();
    driver(&home, "srapath")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--disable-multithreading"))
        .stdout(predicate::str::contains("--log-level"))
        .stdout(predicate::str::contains("--function"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    driver(&home, "sra-pileup")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sra-pileup : "));
}

#[test]
fn test_unrecognized_identity() {
    let home = TempDir::new().unwrap();
    driver(&home, "vdb-dump")
        .arg("SRR1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'vdb-dump' is not a recognized tool name"));
}

#[test]
fn test_pinned_version_mismatch() {
    let home = TempDir::new().unwrap();
    driver(&home, "prefetch.9.9.9")
        .arg("SRR1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requested version '9.9.9'"));
}

#[test]
fn test_binary_name_without_impersonation() {
    let home = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("sratools");
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env_remove("SRATOOLS_IMPERSONATE")
        .arg("SRR1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'sratools' is not a recognized tool name"));
}
