use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn pad_prints_one_line_per_input() {
    let mut cmd = cargo_bin_cmd!("hexpad");
    cmd.args(["pad", "", "a", "abcdef", "abcdefgh"]);

    cmd.assert()
        .success()
        .stdout("000000\n00000a\nabcdef\nabcdef\n");
}

#[test]
fn pad_reads_stdin_when_no_inputs() {
    let mut cmd = cargo_bin_cmd!("hexpad");
    cmd.arg("pad").write_stdin("ff\n00ff00\n1234567\n");

    cmd.assert().success().stdout("0000ff\n00ff00\n123456\n");
}

#[test]
fn pad_accepts_non_hex_but_warns_on_stderr() {
    let mut cmd = cargo_bin_cmd!("hexpad");
    cmd.env_remove("RUST_LOG").args(["pad", "xyz"]);

    cmd.assert()
        .success()
        .stdout("000xyz\n")
        .stderr(predicate::str::contains("not a hex color"));
}

#[test]
fn rgb_formats_decimal_and_hex_values() {
    for (value, expected) in [
        ("255", "0000ff\n"),
        ("0xff00", "00ff00\n"),
        ("#ABCDEF", "abcdef\n"),
        ("0", "000000\n"),
    ] {
        let mut cmd = cargo_bin_cmd!("hexpad");
        cmd.args(["rgb", value]);
        cmd.assert().success().stdout(expected);
    }
}

#[test]
fn rgb_rejects_garbage_with_exit_1() {
    let mut cmd = cargo_bin_cmd!("hexpad");
    cmd.args(["rgb", "teal"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid color value 'teal'"));
}
