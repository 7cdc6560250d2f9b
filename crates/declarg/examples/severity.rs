use declarg::Parser;
use declarg::Regex;
use declarg::Settings;

fn main() -> declarg::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("DECLARG_LOG"))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut parser = Parser::new();
    parser
        .banner("This is a fancy evolutionary algorithm")
        .version("EvolutionaryAlgorithm 0.1")
        .option(
            "severity",
            "set severity",
            Settings::new()
                .default_value(4)
                .value_in_set([4, 5, 6, 7, 8]),
        )?
        .option("verbose", "enable verbose output", Settings::new())?
        .option(
            "mutation",
            "set mutation",
            Settings::new()
                .default_value("MightyMutation")
                .value_matches(Regex::new("Mutation").expect("valid pattern")),
        )?
        .option(
            "plus_selection",
            "use plus-selection if set",
            Settings::new().default_value(true),
        )?
        .option(
            "selection",
            "selection used",
            Settings::new().default_value("BestSelection").short('l'),
        )?
        .option(
            "chance",
            "set mutation chance",
            Settings::new()
                .default_value(0.8)
                .value_satisfies(|x| x.as_f64().is_some_and(|x| (0.0..=1.0).contains(&x))),
        )?;

    let options = parser.process_env();
    for (name, value) in options.iter() {
        println!(":{name} => {value}");
    }
    Ok(())
}
