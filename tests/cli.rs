// CLI integration tests: drive the built binary end to end.
use std::process::{Command, Output};

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_yabc");
    Command::new(exe)
}

fn run(args: &[&str]) -> Output {
    cmd().args(args).output().expect("run yabc")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("utf8 stdout")
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).expect("utf8 stderr")
}

#[test]
fn hex_to_binary() {
    let out = run(&["16", "2", "ff"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "11111111\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn mnemonics_default_to_lowercase() {
    let out = run(&["dec", "hex", "255"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "ff\n");
}

#[test]
fn uppercase_flag() {
    let out = run(&["-u", "dec", "hex", "255"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "FF\n");
}

#[test]
fn lowercase_flag_after_uppercase_wins() {
    let out = run(&["-u", "-l", "dec", "hex", "48879"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "beef\n");
}

#[test]
fn max_value_round_trips_through_binary() {
    let out = run(&["10", "bin", "18446744073709551615"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), format!("{}\n", "1".repeat(64)));

    let back = run(&["2", "10", stdout(&out).trim_end()]);
    assert!(back.status.success());
    assert_eq!(stdout(&back), "18446744073709551615\n");
}

#[test]
fn negative_target_wraps_after_double_dash() {
    let out = run(&["--", "10", "16", "-1"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "ffffffffffffffff\n");
}

#[test]
fn leading_whitespace_in_target_is_skipped() {
    let out = run(&["10", "16", " 5"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "5\n");

    let out = run(&["16", "16", "\t0x1f"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1f\n");
}

#[test]
fn target_out_of_range() {
    let out = run(&["10", "10", "99999999999999999999"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(stderr(&out), "Target out of range.\n");
}

#[test]
fn unsupported_base() {
    let out = run(&["37", "10", "5"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(stderr(&out), "Unsupported base: 37\n");
}

#[test]
fn unsupported_destination_base() {
    let out = run(&["10", "1", "5"]);
    assert!(!out.status.success());
    assert_eq!(stderr(&out), "Unsupported base: 1\n");
}

#[test]
fn unrecognized_base() {
    let out = run(&["10", "abc", "5"]);
    assert!(!out.status.success());
    assert_eq!(stderr(&out), "Unrecognized base: abc\n");
}

#[test]
fn target_not_in_source_base() {
    let out = run(&["oct", "dec", "789"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(stderr(&out), "Target not in base oct.\n");
}

#[test]
fn no_arguments_prints_usage() {
    let out = run(&[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("Usage"));
}

#[test]
fn unknown_option_fails() {
    let out = run(&["-x", "10", "16", "255"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn help_succeeds() {
    let out = run(&["-h"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("FROM_BASE"));
}

#[test]
fn version_succeeds() {
    let out = run(&["-v"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        format!("yabc {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn log_flag_keeps_stdout_clean() {
    let out = run(&["--log", "hex", "dec", "0xff"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "255\n");
}
