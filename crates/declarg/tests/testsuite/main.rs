mod errors;
mod help;
mod shorts;
mod util;
mod values;
mod version;
