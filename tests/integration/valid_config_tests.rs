//! Tests config files that should work.

use std::path::Path;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::arcstat_command;

#[test]
fn test_empty_config() {
    arcstat_command(&[
        "-C",
        "./tests/valid_configs/empty_config.toml",
        "--arcstats",
        "./tests/data/arcstats",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("ARC hit ratio:    90.00%"));
}

#[test]
fn test_commented_out_config() {
    arcstat_command(&[
        "-C",
        "./tests/valid_configs/commented_out.toml",
        "--arcstats",
        "./tests/data/arcstats",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("ARC current size: 1.00 GiB"));
}

#[test]
fn test_output_flags_config() {
    arcstat_command(&[
        "-C",
        "./tests/valid_configs/output_flags.toml",
        "--arcstats",
        "./tests/data/arcstats",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("ARC max size:     4.29 GB"));
}

#[test]
fn test_arcstats_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("arcstat.toml");
    let arcstats = Path::new("./tests/data/arcstats").canonicalize().unwrap();
    std::fs::write(
        &config,
        format!("[flags]\narcstats = {:?}\njson = true\n", arcstats.display().to_string()),
    )
    .unwrap();

    arcstat_command(&["-C", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hit_ratio\": 90.0"));
}
