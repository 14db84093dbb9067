//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_arcstat_command;

#[test]
fn test_format_bytes() {
    no_cfg_arcstat_command()
        .arg("--bytes")
        .arg("1536")
        .assert()
        .success()
        .stdout("1.50 KiB\n");
}

#[test]
fn test_format_small_bytes() {
    no_cfg_arcstat_command()
        .arg("-b")
        .arg("1023")
        .assert()
        .success()
        .stdout("1023 B\n");
}

#[test]
fn test_format_bytes_just_under_tebi() {
    no_cfg_arcstat_command()
        .arg("--bytes")
        .arg("1099511627775")
        .assert()
        .success()
        .stdout("1024.00 GiB\n");
}

#[test]
fn test_format_decimal_bytes() {
    no_cfg_arcstat_command()
        .args(["--bytes", "1500", "--decimal"])
        .assert()
        .success()
        .stdout("1.50 KB\n");
}

#[test]
fn test_format_bytes_ignores_arcstats() {
    no_cfg_arcstat_command()
        .args(["--bytes", "0", "--arcstats", "./tests/data/does_not_exist"])
        .assert()
        .success()
        .stdout("0 B\n");
}

#[test]
fn test_negative_bytes() {
    no_cfg_arcstat_command()
        .arg("--bytes")
        .arg("-5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'-5' is negative"));
}

#[test]
fn test_non_numeric_bytes() {
    no_cfg_arcstat_command()
        .arg("--bytes")
        .arg("lots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'lots' is not a whole number"));
}

#[test]
fn test_too_large_bytes() {
    no_cfg_arcstat_command()
        .arg("--bytes")
        .arg("18446744073709551616")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_empty_arcstats_path() {
    no_cfg_arcstat_command()
        .arg("--arcstats")
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--arcstats' was set with an invalid value",
        ));
}

#[test]
fn test_unknown_argument() {
    no_cfg_arcstat_command()
        .arg("--rate")
        .arg("1000")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_missing_config_file() {
    crate::util::arcstat_command(&["-C", "./tests/valid_configs/does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to properly parse the config file"));
}

#[test]
fn test_help() {
    no_cfg_arcstat_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--arcstats"))
        .stdout(predicate::str::contains("Output Options"));
}

#[test]
fn test_version() {
    no_cfg_arcstat_command()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
