//! Error taxonomy for declarg option parsing
//!
//! Every failure a declarg session can report falls in one of three groups:
//! - [`ConfigError`]: an option was declared wrong
//! - [`LexicalError`]: the argument list does not fit the declared flags
//! - [`ValidationError`]: a parsed value was rejected by its option's checks
//!
//! Help and version requests travel through [`Error`] as well since, like errors, they end the
//! run. [`Error::exit`] prints the message where the user expects it and terminates.
//!
//! ## Example
//! ```no_run
//! use declarg_error::Error;
//! use declarg_error::LexicalError;
//! use declarg_error::Result;
//!
//! fn severity(raw: Option<&str>) -> Result<i64> {
//!     let raw = raw.ok_or_else(|| LexicalError::MissingArgument("--severity".to_owned()))?;
//!     let severity = raw.parse().map_err(|_| LexicalError::InvalidArgument {
//!         flag: "--severity".to_owned(),
//!         value: raw.to_owned(),
//!     })?;
//!     Ok(severity)
//! }
//!
//! fn main() {
//!     let severity = severity(std::env::args().nth(1).as_deref()).unwrap_or_else(|e| e.exit());
//!     println!("{severity}");
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(clippy::print_stderr)]
#![warn(clippy::print_stdout)]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

/// `Result<T, Error>`
///
/// `declarg_error::Result` may be used with one *or* two type parameters.
///
/// ```rust
/// use declarg_error::Result;
///
/// # const IGNORE: &str = stringify! {
/// fn demo1() -> Result<T> {...}
///            // ^ equivalent to std::result::Result<T, declarg_error::Error>
///
/// fn demo2() -> Result<T, OtherError> {...}
///            // ^ equivalent to std::result::Result<T, OtherError>
/// # };
/// ```
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Anything that ends a parse early
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An option was declared wrong
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The arguments do not fit the declared flags
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    /// A parsed value failed its option's checks
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// `--help` was requested; carries the rendered help
    #[error("{0}")]
    DisplayHelp(String),
    /// `--version` was requested; carries the configured version
    #[error("{0}")]
    DisplayVersion(String),
    /// `--version` was requested but none is configured
    #[error("{program}: version unknown")]
    UnknownVersion {
        /// Name the program was invoked as
        program: String,
    },
}

impl Error {
    /// Status to terminate with
    ///
    /// Help and version requests are successful runs.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DisplayHelp(_) | Self::DisplayVersion(_) => 0,
            Self::Config(_) | Self::Lexical(_) | Self::Validation(_) | Self::UnknownVersion { .. } => {
                1
            }
        }
    }

    /// Whether the message belongs on stderr
    ///
    /// Lexical and validation messages are part of the program's normal output and go to stdout.
    pub fn use_stderr(&self) -> bool {
        matches!(self, Self::Config(_) | Self::UnknownVersion { .. })
    }

    /// Write the message, followed by a newline, to stdout or stderr
    pub fn print(&self) -> std::io::Result<()> {
        use std::io::Write as _;

        if self.use_stderr() {
            let mut stderr = anstream::stderr().lock();
            writeln!(stderr, "{self}")
        } else {
            let mut stdout = anstream::stdout().lock();
            writeln!(stdout, "{self}")?;
            stdout.flush()
        }
    }

    /// Print the message and terminate the process with [`Error::exit_code`]
    pub fn exit(&self) -> ! {
        // Nothing left to report to if the terminal is gone
        let _ = self.print();
        std::process::exit(self.exit_code())
    }
}

/// An option declaration that can never be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Names must look like identifiers: a letter or `_`, then letters, digits, or `_`
    #[error("invalid option name: `{0}`")]
    InvalidName(String),
    /// Short flags must be a single ASCII letter or digit
    #[error("invalid short flag for `{name}`: `{short}`")]
    InvalidShort {
        /// Option the short was declared for
        name: String,
        /// The rejected short flag
        short: char,
    },
}

/// The argument list does not fit the declared flags
///
/// Unknown and ambiguous flags are reported as typed, e.g. `--eat` or `-x`; the others name the
/// option's long flag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    /// No declared flag matches
    #[error("invalid option: {0}")]
    InvalidOption(String),
    /// A valued flag was last on the line
    #[error("missing argument: {0}")]
    MissingArgument(String),
    /// The value could not be converted to the option's type
    #[error("invalid argument: {flag} {value}")]
    InvalidArgument {
        /// Flag the value was given for
        flag: String,
        /// The rejected value
        value: String,
    },
    /// An abbreviated long flag matches more than one declared flag
    #[error("ambiguous option: {0}")]
    AmbiguousOption(String),
    /// A switch was given `=value`
    #[error("needless argument: {flag}={value}")]
    NeedlessArgument {
        /// The switch
        flag: String,
        /// The attached value
        value: String,
    },
}

/// A parsed value failed its option's checks
///
/// `flag` is always the long form, e.g. `--severity`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value is not one of the allowed values
    #[error("Parameter for {flag} must be in [{}]", .allowed.join(", "))]
    NotInSet {
        /// The option's long flag
        flag: String,
        /// Allowed values, rendered
        allowed: Vec<String>,
    },
    /// The textual value does not match the option's pattern
    #[error("Parameter for {flag} must match /{pattern}/")]
    NoMatch {
        /// The option's long flag
        flag: String,
        /// Source text of the pattern
        pattern: String,
    },
    /// The option's predicate returned `false`
    #[error("Parameter for {flag} must satisfy given conditions (see description)")]
    Unsatisfied {
        /// The option's long flag
        flag: String,
    },
}
