use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Command running one of this package's example programs, built once per test run
pub fn example_cmd(name: &'static str) -> snapbox::cmd::Command {
    static BINS: once_cell::sync::Lazy<Mutex<HashMap<&'static str, PathBuf>>> =
        once_cell::sync::Lazy::new(Default::default);

    let mut bins = BINS.lock().unwrap_or_else(|e| e.into_inner());
    let bin = bins.entry(name).or_insert_with(|| build_example(name));
    snapbox::cmd::Command::new(bin.as_path()).env_remove("DECLARG_LOG")
}

fn build_example(name: &str) -> PathBuf {
    escargot::CargoBuild::new()
        .package("declarg")
        .example(name)
        .current_release()
        .current_target()
        .run()
        .unwrap_or_else(|e| panic!("{e}"))
        .path()
        .to_owned()
}
