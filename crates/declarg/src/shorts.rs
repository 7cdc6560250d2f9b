use std::collections::BTreeMap;

use crate::OptionSpec;

/// Reserved for `--help` before any option is looked at
const HELP: char = 'h';

/// Which option each short flag belongs to
///
/// Explicit shorts are reserved first, then shorts are handed out in declaration order: the
/// first character of the name not yet used. When every character is taken the name's first
/// character is reused, so one character can be claimed several times: the last claim owns it
/// and the earlier options are left without a short. A reused character never displaces an
/// explicit short.
#[derive(Clone, Debug, Default)]
pub(crate) struct ShortFlagTable {
    owners: BTreeMap<char, usize>,
    version: Option<char>,
}

impl ShortFlagTable {
    pub(crate) fn assign(options: &[OptionSpec]) -> Self {
        let explicit = options
            .iter()
            .filter(|option| !option.has_no_short())
            .filter_map(OptionSpec::requested_short)
            .collect::<Vec<_>>();
        let mut used = vec![HELP];
        used.extend_from_slice(&explicit);

        let mut owners = BTreeMap::new();
        for (index, option) in options.iter().enumerate() {
            if option.has_no_short() {
                continue;
            }
            let short = match option.requested_short() {
                Some(short) => short,
                None => match short_from(option.name(), &used) {
                    Some(short) if !explicit.contains(&short) => short,
                    _ => continue,
                },
            };

            used.push(short);
            if let Some(previous) = owners.insert(short, index) {
                tracing::debug!(
                    short = %short,
                    option = option.name(),
                    displaced = options[previous].name(),
                    "short flag reassigned"
                );
            } else {
                tracing::debug!(short = %short, option = option.name(), "short flag assigned");
            }
        }

        let version = ['v', 'V']
            .into_iter()
            .find(|short| !owners.contains_key(short));
        Self { owners, version }
    }

    /// Index of the option `-<short>` selects
    pub(crate) fn owner(&self, short: char) -> Option<usize> {
        self.owners.get(&short).copied()
    }

    /// Short flag that actually reaches the option at `index`
    pub(crate) fn short_of(&self, index: usize) -> Option<char> {
        self.owners
            .iter()
            .find_map(|(short, owner)| (*owner == index).then_some(*short))
    }

    pub(crate) fn help_short(&self) -> Option<char> {
        (!self.owners.contains_key(&HELP)).then_some(HELP)
    }

    /// `v`, or `V` when an option already owns `v`
    pub(crate) fn version_short(&self) -> Option<char> {
        self.version
    }
}

/// First character of `name` not in `used`, falling back to the first character
fn short_from(name: &str, used: &[char]) -> Option<char> {
    name.chars()
        .filter(|c| *c != '_')
        .find(|c| !used.contains(c))
        .or_else(|| name.chars().next())
}
