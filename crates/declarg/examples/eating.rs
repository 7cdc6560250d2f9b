use declarg::Parser;
use declarg::Regex;
use declarg::Settings;

fn main() -> declarg::Result<()> {
    let mut parser = Parser::new();
    parser
        .version("EatingScript 1.0 (c) Florian Pilz 2011")
        .banner("This is a banner")
        .option("verbose", "Switch on verbosity", Settings::new())?
        .option(
            "eat_cake",
            "Eath the yummy cake!",
            Settings::new()
                .default_value("PlainCake")
                .value_matches(Regex::new("Cake").expect("valid pattern"))
                .value_satisfies(|cake| {
                    let cake = cake.as_str().unwrap_or_default();
                    let count = cake
                        .chars()
                        .take_while(char::is_ascii_digit)
                        .collect::<String>();
                    count.parse::<u64>().unwrap_or(0) == 0
                }),
        )?
        .option(
            "eat_salad",
            "It's healty!",
            Settings::new().default_value("CucumberSalad"),
        )?
        .option(
            "eat_bagel",
            "You should try it with salmon.",
            Settings::new()
                .default_value("SalmonBagel")
                .value_in_set(["SalmonBagel", "ParmesanBagel"]),
        )?
        .option("eat_nothing", "Stupid decision ...", Settings::new())?
        .option(
            "eat_marshmellows",
            "How many?",
            Settings::new().default_value(0),
        )?
        .option("eat_me", "WHAT?!?", Settings::new().default_value("TastyHuman"))?;

    let options = parser.process_env();
    for (name, value) in options.iter() {
        println!(":{name} => {value}");
    }
    Ok(())
}
