use assert_cmd::Command;
use predicates::prelude::*;

fn squarescan() -> Command {
    Command::cargo_bin("squarescan").unwrap()
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    squarescan()
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage: ").and(predicate::str::ends_with(
            " <bound> <length>\n",
        )));
}

#[test]
fn one_argument_prints_usage_and_exits_1() {
    squarescan()
        .arg("10")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("<bound> <length>"));
}

#[test]
fn length_one_matches_every_index() {
    squarescan()
        .args(["3", "1"])
        .assert()
        .success()
        .stdout("i: 1, Result: 1.0\ni: 2, Result: 2.0\ni: 3, Result: 3.0\n");
}

#[test]
fn pyramid_of_24_has_one_match() {
    squarescan()
        .args(["24", "24"])
        .assert()
        .success()
        .stdout("i: 1, Result: 70.0\n");
}

#[test]
fn float_test_reproduces_reference_output() {
    squarescan()
        .args(["--test", "float", "24", "24"])
        .assert()
        .success()
        .stdout("i: 1, Result: 70.0\n");
}

#[test]
fn zero_bound_prints_nothing_and_succeeds() {
    squarescan().args(["0", "24"]).assert().success().stdout("");
}

#[test]
fn negative_bound_is_an_empty_scan() {
    squarescan().args(["-3", "1"]).assert().success().stdout("");
}

#[test]
fn non_integer_argument_fails_with_diagnostic() {
    squarescan()
        .args(["ten", "24"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("InvalidInteger"));
}

#[test]
fn extra_arguments_are_ignored() {
    squarescan()
        .args(["3", "1", "extra"])
        .assert()
        .success()
        .stdout("i: 1, Result: 1.0\ni: 2, Result: 2.0\ni: 3, Result: 3.0\n");
}

#[test]
fn json_format_emits_records() {
    squarescan()
        .args(["--format", "json", "24", "24"])
        .assert()
        .success()
        .stdout("{\"i\":1,\"result\":70.0,\"sum\":\"4900\"}\n");
}

#[test]
fn logging_goes_to_stderr_only() {
    squarescan()
        .args(["--log", "24", "24"])
        .assert()
        .success()
        .stdout("i: 1, Result: 70.0\n")
        .stderr(predicate::str::contains("Matches: 1"));
}

#[test]
fn length_past_i64_is_accepted() {
    squarescan()
        .args(["3", "10000000000000000000"])
        .assert()
        .success();
}

#[test]
fn whitespace_padded_integers_are_accepted() {
    squarescan()
        .args([" 3", "1 "])
        .assert()
        .success()
        .stdout("i: 1, Result: 1.0\ni: 2, Result: 2.0\ni: 3, Result: 3.0\n");
}

#[test]
fn dashed_extra_arguments_are_ignored() {
    squarescan()
        .args(["3", "1", "-x"])
        .assert()
        .success()
        .stdout("i: 1, Result: 1.0\ni: 2, Result: 2.0\ni: 3, Result: 3.0\n");
}

#[cfg(unix)]
#[test]
fn non_utf8_program_name_still_prints_usage() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::process::CommandExt;

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("squarescan"));
    cmd.arg0(OsStr::from_bytes(b"sq\xffscan"));
    Command::from_std(cmd)
        .assert()
        .code(1)
        .stdout("Usage: sq\u{FFFD}scan <bound> <length>\n");
}
