//! Tests config files that have sometimes caused issues despite being invalid.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::arcstat_command;

fn config_command(config: &str) -> std::process::Command {
    arcstat_command(&["-C", config, "--arcstats", "./tests/data/arcstats"])
}

#[test]
fn test_unknown_flag() {
    config_command("./tests/invalid_configs/unknown_flag.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn test_invalid_decimal() {
    config_command("./tests/invalid_configs/invalid_decimal.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file error"));
}

#[test]
fn test_toml_mismatch_type() {
    config_command("./tests/invalid_configs/toml_mismatch_type.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_empty_arcstats() {
    arcstat_command(&["-C", "./tests/invalid_configs/empty_arcstats.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'arcstats' was set with an empty path"));
}
