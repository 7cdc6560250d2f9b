use crate::util::example_cmd;

fn check(args: &[&str], expected: &str) {
    example_cmd("eating")
        .args(args)
        .assert()
        .code(1)
        .stdout_matches(expected)
        .stderr_eq("");
}

#[test]
fn invalid_option() {
    check(
        &["--free-beer"],
        "\
invalid option: --free-beer
",
    );
}

#[test]
fn missing_argument() {
    check(
        &["--eat-cake"],
        "\
missing argument: --eat-cake
",
    );
}

#[test]
fn invalid_argument() {
    check(
        &["--eat-marshmellows", "OMFG!!!"],
        "\
invalid argument: --eat-marshmellows OMFG!!!
",
    );
}

#[test]
fn ambiguous_option() {
    check(
        &["--eat", "yummy!"],
        "\
ambiguous option: --eat
",
    );
}

#[test]
fn needless_argument() {
    check(
        &["--eat-nothing=please"],
        "\
needless argument: --eat-nothing=please
",
    );
}

#[test]
fn not_in_set() {
    check(
        &["--eat-bagel", "AshBagel"],
        "\
Parameter for --eat-bagel must be in [SalmonBagel, ParmesanBagel]
",
    );
}

#[test]
fn no_match() {
    check(
        &["--eat-cake", "Chocolate"],
        "\
Parameter for --eat-cake must match /Cake/
",
    );
}

#[test]
fn unsatisfied() {
    check(
        &["--eat-cake", "12Cakes"],
        "\
Parameter for --eat-cake must satisfy given conditions (see description)
",
    );
}

#[test]
fn pattern_checked_before_predicate() {
    check(
        &["--eat-cake", "VanillaBrownie"],
        "\
Parameter for --eat-cake must match /Cake/
",
    );
    check(
        &["--eat-cake", "2VanillaCakes"],
        "\
Parameter for --eat-cake must satisfy given conditions (see description)
",
    );
}
