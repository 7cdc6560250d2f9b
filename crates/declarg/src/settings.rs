use std::sync::Arc;

use regex::Regex;

use crate::Value;

/// Per-option settings
///
/// Every field is optional so registry-wide defaults (see [`Parser::with_defaults`][crate::Parser::with_defaults])
/// can fill in whatever an option leaves unset.
///
/// ```rust
/// use declarg::Settings;
///
/// let severity = Settings::new()
///     .default_value(4)
///     .value_in_set([4, 5, 6, 7, 8]);
/// let chance = Settings::new()
///     .default_value(0.8)
///     .value_satisfies(|x| x.as_f64().is_some_and(|x| (0.0..=1.0).contains(&x)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub(crate) default: Option<Value>,
    pub(crate) short: Option<char>,
    pub(crate) no_short: Option<bool>,
    pub(crate) optional: Option<bool>,
    pub(crate) value_in_set: Option<Vec<Value>>,
    pub(crate) value_matches: Option<Regex>,
    pub(crate) value_satisfies: Option<Predicate>,
}

impl Settings {
    pub fn new() -> Self {
        Default::default()
    }

    /// Value when the flag is absent; its shape decides the option's [`ValueKind`][crate::ValueKind]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Use `-<short>` instead of an automatically picked short flag
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Never give this option a short flag
    pub fn no_short(mut self) -> Self {
        self.no_short = Some(true);
        self
    }

    /// Leave the option out of the result unless it is on the command line
    pub fn optional(mut self) -> Self {
        self.optional = Some(true);
        self
    }

    /// Always put the option in the result, overriding an `optional` registry default
    pub fn required(mut self) -> Self {
        self.optional = Some(false);
        self
    }

    /// Reject parsed values that are not one of `values`
    pub fn value_in_set<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.value_in_set = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Reject values whose textual form does not contain a match for `pattern`
    pub fn value_matches(mut self, pattern: Regex) -> Self {
        self.value_matches = Some(pattern);
        self
    }

    /// Reject parsed values for which `predicate` returns `false`
    pub fn value_satisfies(
        mut self,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.value_satisfies = Some(Predicate(Arc::new(predicate)));
        self
    }

    /// Fill every field left unset from `base`
    pub(crate) fn merged_over(self, base: &Self) -> Self {
        Self {
            default: self.default.or_else(|| base.default.clone()),
            short: self.short.or(base.short),
            no_short: self.no_short.or(base.no_short),
            optional: self.optional.or(base.optional),
            value_in_set: self.value_in_set.or_else(|| base.value_in_set.clone()),
            value_matches: self.value_matches.or_else(|| base.value_matches.clone()),
            value_satisfies: self
                .value_satisfies
                .or_else(|| base.value_satisfies.clone()),
        }
    }
}

/// A user-supplied check on a parsed value
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Predicate {
    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl std::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}
