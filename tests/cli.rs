use assert_cmd::Command;

// The TUI itself needs a tty, but the clap surface is checkable headless.

#[test]
fn help_describes_the_game_flags() {
    let output = Command::cargo_bin("gridle")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("--timed"));
    assert!(help.contains("--mode"));
    assert!(help.contains("--solutions"));
    assert!(help.contains("--guesses"));
}

#[test]
fn version_flag_prints_and_exits() {
    Command::cargo_bin("gridle")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

#[test]
fn refuses_to_run_without_a_tty() {
    let output = Command::cargo_bin("gridle").unwrap().output().unwrap();
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("tty"));
}
