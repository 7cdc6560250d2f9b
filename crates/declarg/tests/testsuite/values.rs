use crate::util::example_cmd;

#[test]
fn defaults() {
    example_cmd("severity")
        .assert()
        .success()
        .stdout_matches(
            "\
:severity => 4
:verbose => false
:mutation => MightyMutation
:plus_selection => true
:selection => BestSelection
:chance => 0.8
",
        );
}

#[test]
fn long_and_short_forms() {
    example_cmd("severity")
        .args([
            "--severity=5",
            "-v",
            "--mut",
            "DumbMutation",
            "--no-plus-selection",
            "-lWorstSelection",
            "-c",
            "0.1",
        ])
        .assert()
        .success()
        .stdout_matches(
            "\
:severity => 5
:verbose => true
:mutation => DumbMutation
:plus_selection => false
:selection => WorstSelection
:chance => 0.1
",
        );
}

#[test]
fn set_violation() {
    example_cmd("severity")
        .args(["--severity", "1"])
        .assert()
        .code(1)
        .stdout_matches(
            "\
Parameter for --severity must be in [4, 5, 6, 7, 8]
",
        );
}

#[test]
fn empty_program_prints_nothing() {
    example_cmd("empty").assert().success().stdout_eq("");
}

#[test]
fn logging_goes_to_stderr() {
    let assert = example_cmd("severity")
        .env("DECLARG_LOG", "declarg=debug")
        .assert()
        .success()
        .stdout_matches(
            "\
:severity => 4
:verbose => false
:mutation => MightyMutation
:plus_selection => true
:selection => BestSelection
:chance => 0.8
",
        );
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(
        stderr
            .lines()
            .any(|line| line.contains("DEBUG declarg::parser: compiled option parser options=6")),
        "{stderr}"
    );
    assert!(!stderr.contains('\x1b'), "{stderr}");
}
