use crate::shorts::ShortFlagTable;
use crate::OptionSpec;
use crate::ValueKind;

const SUMMARY_INDENT: &str = "    ";
const SUMMARY_WIDTH: usize = 32;

/// Banner followed by one row per option, then `--help` and `--version`
///
/// The `--version` row is only shown when a version is configured.
pub(crate) fn render(
    banner: &str,
    options: &[OptionSpec],
    shorts: &ShortFlagTable,
    with_version: bool,
) -> String {
    let mut help = banner.to_owned();
    for (index, option) in options.iter().enumerate() {
        let left = flags(shorts.short_of(index), &long_column(option));
        push_row(&mut help, &left, option.description());
    }
    push_row(
        &mut help,
        &flags(shorts.help_short(), "--help"),
        "Show this message",
    );
    if with_version {
        push_row(
            &mut help,
            &flags(shorts.version_short(), "--version"),
            "Print version",
        );
    }
    help
}

fn long_column(option: &OptionSpec) -> String {
    match option.kind() {
        ValueKind::Switch => format!("--[no-]{}", option.long()),
        _ => format!("--{} {}", option.long(), option.default_value()),
    }
}

/// Without a short, the long flag is indented so long flags line up
fn flags(short: Option<char>, long: &str) -> String {
    match short {
        Some(short) => format!("-{short}, {long}"),
        None => format!("    {long}"),
    }
}

fn push_row(help: &mut String, left: &str, description: &str) {
    help.push('\n');
    help.push_str(SUMMARY_INDENT);
    if left.chars().count() > SUMMARY_WIDTH {
        help.push_str(left);
        if !description.is_empty() {
            help.push('\n');
            help.push_str(SUMMARY_INDENT);
            help.push_str(&" ".repeat(SUMMARY_WIDTH + 1));
            help.push_str(description);
        }
    } else if description.is_empty() {
        help.push_str(left);
    } else {
        help.push_str(&format!("{left:<SUMMARY_WIDTH$} {description}"));
    }
}
