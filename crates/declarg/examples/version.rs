fn main() {
    let options = declarg::Parser::new()
        .version("VersionScript 0.0 (c) Florian Pilz 2011")
        .process_env();
    for (name, value) in options.iter() {
        println!(":{name} => {value}");
    }
}
