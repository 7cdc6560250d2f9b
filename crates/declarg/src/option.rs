use regex::Regex;

use crate::ConfigError;
use crate::Predicate;
use crate::Settings;
use crate::Value;
use crate::ValueKind;

/// A declared option
///
/// Immutable once declared; see [`Parser::option`][crate::Parser::option].
#[derive(Clone, Debug)]
pub struct OptionSpec {
    name: String,
    description: String,
    kind: ValueKind,
    default: Option<Value>,
    short: Option<char>,
    no_short: bool,
    optional: bool,
    value_in_set: Option<Vec<Value>>,
    value_matches: Option<Regex>,
    value_satisfies: Option<Predicate>,
}

impl OptionSpec {
    pub(crate) fn new(
        name: String,
        description: String,
        settings: Settings,
    ) -> Result<Self, ConfigError> {
        if !is_identifier(&name) {
            return Err(ConfigError::InvalidName(name));
        }
        if let Some(short) = settings.short {
            if !short.is_ascii_alphanumeric() {
                return Err(ConfigError::InvalidShort { name, short });
            }
        }

        Ok(Self {
            kind: ValueKind::of(settings.default.as_ref()),
            name,
            description,
            default: settings.default,
            short: settings.short,
            no_short: settings.no_short.unwrap_or(false),
            optional: settings.optional.unwrap_or(false),
            value_in_set: settings.value_in_set,
            value_matches: settings.value_matches,
            value_satisfies: settings.value_satisfies,
        })
    }

    /// Key in [`ParseResult`][crate::ParseResult]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The declared default, if any
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Value used when the flag is absent; switches without a default are `false`
    pub fn default_value(&self) -> Value {
        self.default.clone().unwrap_or(Value::Switch(false))
    }

    /// The short flag asked for, before collisions are resolved
    pub fn requested_short(&self) -> Option<char> {
        self.short
    }

    pub fn has_no_short(&self) -> bool {
        self.no_short
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Long flag name: the option name with `_` replaced by `-`
    pub fn long(&self) -> String {
        self.name.replace('_', "-")
    }

    /// `--<long>`, as used in messages
    pub fn flag(&self) -> String {
        format!("--{}", self.long())
    }

    pub fn value_in_set(&self) -> Option<&[Value]> {
        self.value_in_set.as_deref()
    }

    pub fn value_matches(&self) -> Option<&Regex> {
        self.value_matches.as_ref()
    }

    pub fn value_satisfies(&self) -> Option<&Predicate> {
        self.value_satisfies.as_ref()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
