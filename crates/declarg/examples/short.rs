use declarg::Parser;
use declarg::Settings;

fn main() -> declarg::Result<()> {
    let mut parser = Parser::new();
    for (i, name) in ["abc", "bca", "cab", "bac", "acb", "cba"].into_iter().enumerate() {
        parser.option(
            name,
            format!("Option {}", i + 1),
            Settings::new().default_value("String"),
        )?;
    }

    let options = parser.process_env();
    for (name, value) in options.iter() {
        println!(":{name} => {value}");
    }
    Ok(())
}
