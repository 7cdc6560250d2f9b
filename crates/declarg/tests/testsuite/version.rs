use crate::util::example_cmd;

#[test]
fn capital_v_when_v_is_taken() {
    for flag in ["-V", "--version"] {
        example_cmd("eating")
            .arg(flag)
            .assert()
            .success()
            .stdout_matches(
                "\
EatingScript 1.0 (c) Florian Pilz 2011
",
            );
    }
}

#[test]
fn lowercase_v_when_free() {
    for flag in ["-v", "--version"] {
        example_cmd("version")
            .arg(flag)
            .assert()
            .success()
            .stdout_matches(
                "\
VersionScript 0.0 (c) Florian Pilz 2011
",
            );
    }
}

#[test]
fn unknown_version() {
    for flag in ["-v", "--version"] {
        example_cmd("empty")
            .arg(flag)
            .assert()
            .code(1)
            .stdout_eq("")
            .stderr_matches(
                "\
empty[..]: version unknown
",
            );
    }
}

#[test]
fn version_row_uses_free_short() {
    example_cmd("version")
        .arg("--help")
        .assert()
        .success()
        .stdout_matches(
            "\
Usage: version[..] [options]
    -h, --help                       Show this message
    -v, --version                    Print version
",
        );
}
