//! Declarative option parser
//!
//! Declare options by name, description, and default; get back a map of typed values. The type
//! of each option comes from its default:
//!
//! | Default            | Parsed as                              |
//! |--------------------|----------------------------------------|
//! | none or `bool`     | switch, `--name` / `--no-name`         |
//! | integer            | [`Value::Integer`]                     |
//! | float              | [`Value::Float`]                       |
//! | list of strings    | [`Value::List`], split on `,`          |
//! | string             | [`Value::String`], verbatim            |
//!
//! Short flags are picked automatically from the option name, `--help` and `--version` are
//! generated, and values can be checked against a set, a pattern, or a predicate.
//!
//! ## Example
//!
//! ```no_run
#![doc = include_str!("../examples/severity.rs")]
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations, elided_lifetimes_in_paths)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

mod help;
mod option;
mod parser;
mod result;
mod settings;
mod shorts;
mod validate;
mod value;

pub use declarg_error::ConfigError;
pub use declarg_error::Error;
pub use declarg_error::LexicalError;
pub use declarg_error::Result;
pub use declarg_error::ValidationError;
pub use option::OptionSpec;
pub use parser::Parser;
pub use regex::Regex;
pub use result::ParseResult;
pub use settings::Predicate;
pub use settings::Settings;
pub use value::Value;
pub use value::ValueKind;
