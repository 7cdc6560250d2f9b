//! Token-by-token command-line lexer
//!
//! Inspired by [lexopt](https://crates.io/crates/lexopt), this only splits the argument list into
//! flags and values. Deciding which flags exist, which ones take a value, and what that value
//! means is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use declarg_lexer::prelude::*;
//!
//! let raw = ["--severity=5", "-vl", "WorstSelection", "input.txt"]
//!     .map(std::ffi::OsString::from);
//! let mut parser = declarg_lexer::Parser::new(&raw);
//!
//! assert_eq!(parser.next_arg(), Some(Long("severity")));
//! assert_eq!(parser.next_flag_value(), Some(std::ffi::OsStr::new("5")));
//! assert_eq!(parser.next_arg(), Some(Short("v")));
//! assert_eq!(parser.next_arg(), Some(Short("l")));
//! assert_eq!(parser.next_flag_value(), Some(std::ffi::OsStr::new("WorstSelection")));
//! assert_eq!(parser.next_arg(), Some(Value(std::ffi::OsStr::new("input.txt"))));
//! assert_eq!(parser.next_arg(), None);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

mod ext;

use std::ffi::OsStr;
use std::ffi::OsString;

use ext::OsStrExt as _;

/// Simplify parsing of arguments
pub mod prelude {
    pub use super::Arg::*;
}

/// A lexical token pulled out of the argument list
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arg<'a> {
    /// A single character following `-`, e.g. `v` from `-v` or from the cluster `-vl`
    Short(&'a str),
    /// The name following `--`, without any `=value`
    Long(&'a str),
    /// The `--` terminator; everything after it is a [`Arg::Value`]
    Escape(&'a str),
    /// A positional argument
    Value(&'a OsStr),
    /// An attached `=value` that the caller did not ask for, or a flag that is not UTF-8
    Unexpected(&'a OsStr),
}

impl std::fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short(short) => write!(f, "-{short}"),
            Self::Long(long) => write!(f, "--{long}"),
            Self::Escape(escape) => f.write_str(escape),
            Self::Value(value) | Self::Unexpected(value) => f.write_str(&value.to_string_lossy()),
        }
    }
}

/// Lexes a borrowed argument list
///
/// The program name is not expected at the front; pass only the arguments.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    raw: &'a [OsString],
    current: usize,
    state: Option<State<'a>>,
}

#[derive(Copy, Clone, Debug)]
enum State<'a> {
    /// `--long=value`, waiting for the caller to claim `value`
    PendingValue(&'a OsStr),
    /// Rest of a short cluster, never empty
    PendingShorts(&'a str),
    Escaped,
}

impl<'a> Parser<'a> {
    /// Start lexing `raw`
    pub fn new(raw: &'a [OsString]) -> Self {
        Self {
            raw,
            current: 0,
            state: None,
        }
    }

    /// Pull the next token
    ///
    /// An attached `=value` that was not claimed with [`Parser::next_flag_value`] or
    /// [`Parser::next_attached_value`] comes back as [`Arg::Unexpected`].
    pub fn next_arg(&mut self) -> Option<Arg<'a>> {
        match self.state {
            Some(State::PendingValue(attached)) => {
                self.state = None;
                Some(Arg::Unexpected(attached))
            }
            Some(State::PendingShorts(shorts)) => Some(self.next_short(shorts)),
            Some(State::Escaped) => self.next_raw_unchecked().map(Arg::Value),
            None => {
                let next = self.next_raw_unchecked()?;
                if next == "--" {
                    self.state = Some(State::Escaped);
                    return Some(Arg::Escape("--"));
                }
                if next == "-" {
                    return Some(Arg::Value(next));
                }

                if let Some(long) = next.strip_prefix("--") {
                    let (name, attached) = match long.split_once("=") {
                        Some((name, attached)) => (name, Some(attached)),
                        None => (long, None),
                    };
                    let Some(name) = name.try_str() else {
                        return Some(Arg::Unexpected(next));
                    };
                    self.state = attached.map(State::PendingValue);
                    Some(Arg::Long(name))
                } else if let Some(shorts) = next.strip_prefix("-") {
                    let Some(shorts) = shorts.try_str() else {
                        return Some(Arg::Unexpected(next));
                    };
                    Some(self.next_short(shorts))
                } else {
                    Some(Arg::Value(next))
                }
            }
        }
    }

    /// Claim the value for the flag that was just returned
    ///
    /// In order of preference: the attached `--long=value`, the rest of a short cluster (`-s5`,
    /// `-s=5`), or the next argument. The next argument is taken verbatim, even when it looks like
    /// a flag, so `--offset -5` works.
    pub fn next_flag_value(&mut self) -> Option<&'a OsStr> {
        match self.state {
            Some(State::PendingValue(attached)) => {
                self.state = None;
                Some(attached)
            }
            Some(State::PendingShorts(rest)) => {
                self.state = None;
                Some(OsStr::new(rest.strip_prefix('=').unwrap_or(rest)))
            }
            Some(State::Escaped) | None => self.next_raw_unchecked(),
        }
    }

    /// Claim an attached `--long=value` or `-s=value`, never looking at the next argument
    ///
    /// The rest of a short cluster without `=` (`-vl`) is left alone.
    pub fn next_attached_value(&mut self) -> Option<&'a OsStr> {
        match self.state {
            Some(State::PendingValue(attached)) => {
                self.state = None;
                Some(attached)
            }
            Some(State::PendingShorts(rest)) => {
                let attached = rest.strip_prefix('=')?;
                self.state = None;
                Some(OsStr::new(attached))
            }
            Some(State::Escaped) | None => None,
        }
    }

    /// Whether `--` has been seen
    pub fn is_escaped(&self) -> bool {
        matches!(self.state, Some(State::Escaped))
    }

    fn next_short(&mut self, shorts: &'a str) -> Arg<'a> {
        let end = shorts
            .char_indices()
            .nth(1)
            .map_or(shorts.len(), |(index, _)| index);
        let (short, rest) = shorts.split_at(end);
        self.state = (!rest.is_empty()).then_some(State::PendingShorts(rest));
        Arg::Short(short)
    }

    fn next_raw_unchecked(&mut self) -> Option<&'a OsStr> {
        let next = self.raw.get(self.current)?;
        self.current += 1;
        Some(next.as_os_str())
    }
}

#[cfg(test)]
mod test {
    use super::prelude::*;
    use super::*;

    fn raw(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn long_with_separate_value() {
        let raw = raw(&["--mutation", "DumbMutation"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Long("mutation")));
        assert_eq!(parser.next_flag_value(), Some(OsStr::new("DumbMutation")));
        assert_eq!(parser.next_arg(), None);
    }

    #[test]
    fn long_with_attached_value() {
        let raw = raw(&["--chance=0.1"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Long("chance")));
        assert_eq!(parser.next_flag_value(), Some(OsStr::new("0.1")));
        assert_eq!(parser.next_arg(), None);
    }

    #[test]
    fn unclaimed_attached_value_is_unexpected() {
        let raw = raw(&["--verbose=yes", "--no-plus-selection"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Long("verbose")));
        assert_eq!(parser.next_arg(), Some(Unexpected(OsStr::new("yes"))));
        assert_eq!(parser.next_arg(), Some(Long("no-plus-selection")));
    }

    #[test]
    fn attached_value_ignores_next_argument() {
        let raw = raw(&["--verbose", "file"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Long("verbose")));
        assert_eq!(parser.next_attached_value(), None);
        assert_eq!(parser.next_arg(), Some(Value(OsStr::new("file"))));
    }

    #[test]
    fn short_cluster() {
        let raw = raw(&["-vs5", "-l", "x"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Short("v")));
        assert_eq!(parser.next_arg(), Some(Short("s")));
        assert_eq!(parser.next_flag_value(), Some(OsStr::new("5")));
        assert_eq!(parser.next_arg(), Some(Short("l")));
        assert_eq!(parser.next_flag_value(), Some(OsStr::new("x")));
        assert_eq!(parser.next_arg(), None);
    }

    #[test]
    fn short_with_equals() {
        let raw = raw(&["-s=5"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Short("s")));
        assert_eq!(parser.next_flag_value(), Some(OsStr::new("5")));
    }

    #[test]
    fn attached_short_value() {
        let raw = raw(&["-v=x", "-vl"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Short("v")));
        assert_eq!(parser.next_attached_value(), Some(OsStr::new("x")));
        assert_eq!(parser.next_arg(), Some(Short("v")));
        assert_eq!(parser.next_attached_value(), None);
        assert_eq!(parser.next_arg(), Some(Short("l")));
        assert_eq!(parser.next_arg(), None);
    }

    #[test]
    fn flag_value_may_look_like_a_flag() {
        let raw = raw(&["--offset", "-5"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Long("offset")));
        assert_eq!(parser.next_flag_value(), Some(OsStr::new("-5")));
    }

    #[test]
    fn missing_flag_value() {
        let raw = raw(&["--eat-cake"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Long("eat-cake")));
        assert_eq!(parser.next_flag_value(), None);
    }

    #[test]
    fn escape_turns_everything_into_values() {
        let raw = raw(&["-v", "--", "--help", "-"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Short("v")));
        assert!(!parser.is_escaped());
        assert_eq!(parser.next_arg(), Some(Escape("--")));
        assert!(parser.is_escaped());
        assert_eq!(parser.next_arg(), Some(Value(OsStr::new("--help"))));
        assert_eq!(parser.next_arg(), Some(Value(OsStr::new("-"))));
        assert_eq!(parser.next_arg(), None);
    }

    #[test]
    fn lone_dash_is_a_value() {
        let raw = raw(&["-"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Value(OsStr::new("-"))));
    }

    #[test]
    fn multibyte_short() {
        let raw = raw(&["-éx"]);
        let mut parser = Parser::new(&raw);
        assert_eq!(parser.next_arg(), Some(Short("é")));
        assert_eq!(parser.next_arg(), Some(Short("x")));
    }

    #[test]
    fn display_as_typed() {
        assert_eq!(Long("free-beer").to_string(), "--free-beer");
        assert_eq!(Short("x").to_string(), "-x");
        assert_eq!(Value(OsStr::new("OMFG!!!")).to_string(), "OMFG!!!");
    }
}
