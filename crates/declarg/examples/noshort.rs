use declarg::Parser;
use declarg::Settings;

fn main() -> declarg::Result<()> {
    let mut parser = Parser::new();
    parser
        .option(
            "foo",
            "Option 1",
            Settings::new().default_value("String").no_short(),
        )?
        .option("bar", "Option 2", Settings::new().default_value("String"))?;

    let options = parser.process_env();
    for (name, value) in options.iter() {
        println!(":{name} => {value}");
    }
    Ok(())
}
