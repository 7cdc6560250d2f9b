use crate::util::example_cmd;

#[test]
fn exhausted_names_reuse_first_char() {
    example_cmd("short")
        .arg("--help")
        .assert()
        .success()
        .stdout_matches(
            "\
Usage: short[..] [options]
        --abc String                 Option 1
        --bca String                 Option 2
        --cab String                 Option 3
    -b, --bac String                 Option 4
    -a, --acb String                 Option 5
    -c, --cba String                 Option 6
    -h, --help                       Show this message
",
        );
}

#[test]
fn last_claim_owns_the_short() {
    example_cmd("short")
        .args(["-a", "first", "-b", "second", "-c", "third"])
        .assert()
        .success()
        .stdout_matches(
            "\
:abc => String
:bca => String
:cab => String
:bac => second
:acb => first
:cba => third
",
        );
}

#[test]
fn no_short_is_not_reachable_by_short() {
    example_cmd("noshort")
        .args(["-f", "value"])
        .assert()
        .code(1)
        .stdout_matches(
            "\
invalid option: -f
",
        );
}

#[test]
fn eating_shorts() {
    example_cmd("eating")
        .args(["-a", "GreekSalad", "-t", "ParmesanBagel", "-n", "-m", "3", "-e", "You"])
        .assert()
        .success()
        .stdout_matches(
            "\
:verbose => false
:eat_cake => PlainCake
:eat_salad => GreekSalad
:eat_bagel => ParmesanBagel
:eat_nothing => true
:eat_marshmellows => 3
:eat_me => You
",
        );
}
