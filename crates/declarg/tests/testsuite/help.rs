use crate::util::example_cmd;

#[test]
fn banner_and_table() {
    for flag in ["-h", "--help"] {
        example_cmd("eating")
            .arg(flag)
            .assert()
            .success()
            .stdout_matches(
                "\
This is a banner
    -v, --[no-]verbose               Switch on verbosity
        --eat-cake PlainCake         Eath the yummy cake!
    -a, --eat-salad CucumberSalad    It's healty!
    -t, --eat-bagel SalmonBagel      You should try it with salmon.
    -n, --[no-]eat-nothing           Stupid decision ...
    -m, --eat-marshmellows 0         How many?
    -e, --eat-me TastyHuman          WHAT?!?
    -h, --help                       Show this message
    -V, --version                    Print version
",
            );
    }
}

#[test]
fn default_banner() {
    example_cmd("empty")
        .arg("--help")
        .assert()
        .success()
        .stdout_matches(
            "\
Usage: empty[..] [options]
    -h, --help                       Show this message
",
        );
}

#[test]
fn abbreviated_help() {
    example_cmd("noshort")
        .arg("--he")
        .assert()
        .success()
        .stdout_matches(
            "\
Usage: noshort[..] [options]
        --foo String                 Option 1
    -b, --bar String                 Option 2
    -h, --help                       Show this message
",
        );
}

#[test]
fn help_wins_over_bad_values() {
    example_cmd("eating")
        .args(["--eat-bagel", "AshBagel", "--help"])
        .assert()
        .success()
        .stdout_matches(
            "\
This is a banner
...
",
        );
}
