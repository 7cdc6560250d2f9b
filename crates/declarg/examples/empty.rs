fn main() {
    let options = declarg::Parser::new().process_env();
    for (name, value) in options.iter() {
        println!(":{name} => {value}");
    }
}
