use std::collections::HashMap;
use std::ffi::OsString;

use declarg_lexer::Arg;
use indexmap::IndexMap;
use once_cell::unsync::OnceCell;

use crate::help;
use crate::shorts::ShortFlagTable;
use crate::validate::validate;
use crate::ConfigError;
use crate::Error;
use crate::LexicalError;
use crate::OptionSpec;
use crate::ParseResult;
use crate::Settings;
use crate::Value;
use crate::ValueKind;

/// Declared options plus everything derived from them
///
/// A parser starts out accepting [`Parser::option`] declarations. The first call that needs the
/// options ([`Parser::process`], [`Parser::try_process`], [`Parser::render_help`]) compiles them:
/// short flags are assigned, the flag table and help text are built, and the defaults are
/// snapshotted. From then on the parser is frozen and later declarations are ignored.
///
/// Every parse starts from a copy of the default snapshot, so results never affect each other.
#[derive(Debug, Default)]
pub struct Parser {
    defaults: Settings,
    options: Vec<OptionSpec>,
    banner: Option<String>,
    version: Option<String>,
    program_name: Option<String>,
    /// Empty until the options are first needed
    compiled: OnceCell<Compiled>,
}

impl Parser {
    pub fn new() -> Self {
        Default::default()
    }

    /// Merge `defaults` under the settings of every option declared afterwards
    pub fn with_defaults(defaults: Settings) -> Self {
        Self {
            defaults,
            ..Default::default()
        }
    }

    /// Declare an option
    ///
    /// `name` is the key in the [`ParseResult`] and, with `_` replaced by `-`, the long flag.
    /// Redeclaring a name replaces the earlier declaration in place.
    pub fn option(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        settings: Settings,
    ) -> Result<&mut Self, ConfigError> {
        let settings = settings.merged_over(&self.defaults);
        let option = OptionSpec::new(name.into(), description.into(), settings)?;
        if self.is_compiled() {
            tracing::warn!(option = option.name(), "option declared after parsing, ignored");
            return Ok(self);
        }

        match self.options.iter_mut().find(|o| o.name() == option.name()) {
            Some(existing) => {
                tracing::warn!(option = option.name(), "option redeclared, replacing");
                *existing = option;
            }
            None => self.options.push(option),
        }
        Ok(self)
    }

    /// First line of the help, defaults to `Usage: <program> [options]`
    pub fn banner(&mut self, banner: impl Into<String>) -> &mut Self {
        self.banner = Some(banner.into());
        self
    }

    /// Printed for `--version`
    pub fn version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    /// Name used in the default banner and messages, defaults to the file stem of `argv[0]`
    pub fn program_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.program_name = Some(name.into());
        self
    }

    /// Options in declaration order
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Whether the options have been compiled and are now frozen
    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    /// Parse `args` (without the program name)
    ///
    /// Help and version requests come back as [`Error::DisplayHelp`], [`Error::DisplayVersion`]
    /// and [`Error::UnknownVersion`].
    pub fn try_process<I, T>(&mut self, args: I) -> Result<ParseResult, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw = args.into_iter().map(Into::into).collect::<Vec<_>>();
        self.compile().parse(&raw)
    }

    /// Parse `args` (without the program name), terminating the process on help, version, or
    /// any error
    pub fn process<I, T>(&mut self, args: I) -> ParseResult
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.try_process(args).unwrap_or_else(|err| err.exit())
    }

    /// [`Parser::process`] the current process's arguments
    pub fn process_env(&mut self) -> ParseResult {
        self.process(std::env::args_os().skip(1))
    }

    pub fn render_help(&mut self) -> String {
        self.compile().help.clone()
    }

    /// Print the help and terminate
    pub fn help(&mut self) -> ! {
        Error::DisplayHelp(self.render_help()).exit()
    }

    fn compile(&self) -> &Compiled {
        self.compiled.get_or_init(|| Compiled::new(self))
    }
}

/// What a long flag selects
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Target {
    Option { index: usize, negated: bool },
    Help,
    Version,
}

#[derive(Debug)]
struct Compiled {
    options: Vec<OptionSpec>,
    shorts: ShortFlagTable,
    /// Long flags in lookup order: options (with `no-` forms for switches), then `help` and
    /// `version`
    longs: Vec<(String, Target)>,
    defaults: IndexMap<String, Value>,
    help: String,
    version: Option<String>,
    program: String,
}

impl Compiled {
    fn new(parser: &Parser) -> Self {
        let options = parser.options.clone();
        let shorts = ShortFlagTable::assign(&options);

        let mut longs = Vec::new();
        for (index, option) in options.iter().enumerate() {
            let long = option.long();
            if option.kind() == ValueKind::Switch {
                longs.push((
                    format!("no-{long}"),
                    Target::Option {
                        index,
                        negated: true,
                    },
                ));
            }
            longs.push((
                long,
                Target::Option {
                    index,
                    negated: false,
                },
            ));
        }
        longs.push(("help".to_owned(), Target::Help));
        longs.push(("version".to_owned(), Target::Version));

        let defaults = options
            .iter()
            .filter(|option| !option.is_optional())
            .map(|option| (option.name().to_owned(), option.default_value()))
            .collect();

        let program = parser
            .program_name
            .clone()
            .unwrap_or_else(default_program_name);
        let banner = parser
            .banner
            .clone()
            .unwrap_or_else(|| format!("Usage: {program} [options]"));
        let help = help::render(&banner, &options, &shorts, parser.version.is_some());

        tracing::debug!(
            options = options.len(),
            version_short = ?shorts.version_short(),
            "compiled option parser"
        );
        Self {
            options,
            shorts,
            longs,
            defaults,
            help,
            version: parser.version.clone(),
            program,
        }
    }

    fn parse(&self, raw: &[OsString]) -> Result<ParseResult, Error> {
        let mut values = self.defaults.clone();
        let mut texts = HashMap::new();
        let mut remaining = Vec::new();

        let mut parser = declarg_lexer::Parser::new(raw);
        while let Some(arg) = parser.next_arg() {
            let target = match arg {
                Arg::Long(name) => self.resolve_long(name)?,
                Arg::Short(short) => self.resolve_short(short)?,
                Arg::Escape(_) => continue,
                Arg::Value(value) => {
                    remaining.push(value.to_owned());
                    continue;
                }
                Arg::Unexpected(_) => {
                    return Err(LexicalError::InvalidOption(arg.to_string()).into());
                }
            };

            let (index, negated) = match target {
                Target::Option { index, negated } => (index, negated),
                Target::Help => return Err(Error::DisplayHelp(self.help.clone())),
                Target::Version => {
                    return Err(match &self.version {
                        Some(version) => Error::DisplayVersion(version.clone()),
                        None => Error::UnknownVersion {
                            program: self.program.clone(),
                        },
                    });
                }
            };

            let option = &self.options[index];
            tracing::trace!(option = option.name(), %arg, "matched");
            if option.kind().takes_value() {
                let flag = option.flag();
                let Some(value) = parser.next_flag_value() else {
                    return Err(LexicalError::MissingArgument(flag).into());
                };
                let text = value.to_string_lossy();
                let value = value
                    .to_str()
                    .and_then(|value| option.kind().coerce(value))
                    .ok_or_else(|| LexicalError::InvalidArgument {
                        flag,
                        value: text.clone().into_owned(),
                    })?;
                values.insert(option.name().to_owned(), value);
                texts.insert(option.name().to_owned(), text.into_owned());
            } else {
                if let Some(attached) = parser.next_attached_value() {
                    return Err(LexicalError::NeedlessArgument {
                        flag: arg.to_string(),
                        value: attached.to_string_lossy().into_owned(),
                    }
                    .into());
                }
                values.insert(option.name().to_owned(), Value::Switch(!negated));
                texts.remove(option.name());
            }
        }

        validate(&self.options, &values, &texts)?;

        let values = self
            .options
            .iter()
            .filter_map(|option| values.swap_remove_entry(option.name()))
            .collect();
        Ok(ParseResult::new(values, remaining))
    }

    /// Exact match first, then a prefix
    ///
    /// Several candidates are only ambiguous when the shortest is not a prefix of all the others.
    fn resolve_long(&self, name: &str) -> Result<Target, LexicalError> {
        let flag = || format!("--{name}");
        if name.is_empty() {
            return Err(LexicalError::InvalidOption(flag()));
        }
        if let Some((_, target)) = self.longs.iter().find(|(long, _)| long == name) {
            return Ok(*target);
        }

        let mut candidates = self
            .longs
            .iter()
            .filter(|(long, _)| long.starts_with(name))
            .collect::<Vec<_>>();
        candidates.sort_by_key(|(long, _)| long.len());
        let Some(((shortest, target), rest)) = candidates.split_first() else {
            return Err(LexicalError::InvalidOption(flag()));
        };
        if rest
            .iter()
            .all(|(long, other)| other == target || long.starts_with(shortest.as_str()))
        {
            Ok(*target)
        } else {
            Err(LexicalError::AmbiguousOption(flag()))
        }
    }

    fn resolve_short(&self, short: &str) -> Result<Target, LexicalError> {
        let invalid = || LexicalError::InvalidOption(format!("-{short}"));
        let short = short.chars().next().ok_or_else(invalid)?;
        if let Some(index) = self.shorts.owner(short) {
            Ok(Target::Option {
                index,
                negated: false,
            })
        } else if self.shorts.help_short() == Some(short) {
            Ok(Target::Help)
        } else if self.shorts.version_short() == Some(short) {
            Ok(Target::Version)
        } else {
            Err(invalid())
        }
    }
}

fn default_program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(std::path::Path::new)
        .and_then(std::path::Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "program".to_owned())
}
