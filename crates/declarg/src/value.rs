/// A parsed (or default) option value
///
/// The variant of an option's default decides how its argument is converted, see [`ValueKind`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum Value {
    Switch(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<String>),
}

impl Value {
    /// How an option with this default is parsed
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Switch(_) => ValueKind::Switch,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::List(_) => ValueKind::StringList,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Switch(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Floats, and integers widened to floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }
}

/// Textual form, as shown in help and as matched by [`Settings::value_matches`][crate::Settings::value_matches]
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Switch(value) => std::fmt::Display::fmt(value, f),
            Self::Integer(value) => std::fmt::Display::fmt(value, f),
            // Keep `1.0` distinguishable from the integer `1`
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 => {
                write!(f, "{value:.1}")
            }
            Self::Float(value) => std::fmt::Display::fmt(value, f),
            Self::String(value) => f.write_str(value),
            Self::List(values) => f.write_str(&values.join(",")),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Switch(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(ToOwned::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.into_iter().map(ToOwned::to_owned).collect())
    }
}

/// What an option's argument is converted to
///
/// Decided once, when the option is declared, from the shape of its default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Takes no argument; `--name` sets `true`, `--no-name` sets `false`
    #[default]
    Switch,
    Integer,
    Float,
    String,
    /// Comma-separated, each item trimmed
    StringList,
}

impl ValueKind {
    /// Kind for an option declared with `default`
    ///
    /// No default means a switch.
    pub fn of(default: Option<&Value>) -> Self {
        default.map(Value::kind).unwrap_or_default()
    }

    /// Whether the flag is followed by an argument
    pub fn takes_value(self) -> bool {
        self != Self::Switch
    }

    /// Convert a raw argument
    ///
    /// Returns `None` when `raw` is not a valid literal for this kind.
    pub fn coerce(self, raw: &str) -> Option<Value> {
        match self {
            Self::Switch => match raw {
                "true" => Some(Value::Switch(true)),
                "false" => Some(Value::Switch(false)),
                _ => None,
            },
            Self::Integer => parse_integer(raw).map(Value::Integer),
            Self::Float => parse_float(raw).map(Value::Float),
            Self::String => Some(Value::String(raw.to_owned())),
            Self::StringList => Some(Value::List(split_list(raw))),
        }
    }
}

/// Decimal with optional sign and `_` separators, or `0x`/`0o`/`0b` prefixed
fn parse_integer(raw: &str) -> Option<i64> {
    let (negative, unsigned) = match raw.as_bytes().first()? {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        Some("0o" | "0O") => (8, &unsigned[2..]),
        Some("0b" | "0B") => (2, &unsigned[2..]),
        _ => (10, unsigned),
    };
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c == '_' || c.is_digit(radix))
    {
        return None;
    }

    let digits = digits.replace('_', "");
    let magnitude = u64::from_str_radix(&digits, radix).ok()?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn parse_float(raw: &str) -> Option<f64> {
    // `f64::from_str` also takes `inf` and `NaN`
    if !raw.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn split_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|item| item.trim().to_owned()).collect()
}
