use std::collections::HashMap;

use indexmap::IndexMap;

use crate::OptionSpec;
use crate::ValidationError;
use crate::Value;

/// Check every option present in `values`, in declaration order
///
/// `texts` holds the argument as typed for options given on the command line; anything else is
/// matched against the value's textual form.
pub(crate) fn validate(
    options: &[OptionSpec],
    values: &IndexMap<String, Value>,
    texts: &HashMap<String, String>,
) -> Result<(), ValidationError> {
    for option in options {
        let Some(value) = values.get(option.name()) else {
            continue;
        };
        match texts.get(option.name()) {
            Some(text) => check(option, value, text)?,
            None => check(option, value, &value.to_string())?,
        }
    }
    Ok(())
}

/// Set membership, then pattern, then predicate; the first failure is reported
pub(crate) fn check(option: &OptionSpec, value: &Value, text: &str) -> Result<(), ValidationError> {
    if let Some(allowed) = option.value_in_set() {
        if !allowed.iter().any(|allowed| same_value(allowed, value)) {
            return Err(ValidationError::NotInSet {
                flag: option.flag(),
                allowed: allowed.iter().map(ToString::to_string).collect(),
            });
        }
    }
    if let Some(pattern) = option.value_matches() {
        if !pattern.is_match(text) {
            return Err(ValidationError::NoMatch {
                flag: option.flag(),
                pattern: pattern.as_str().to_owned(),
            });
        }
    }
    if let Some(predicate) = option.value_satisfies() {
        if !predicate.test(value) {
            return Err(ValidationError::Unsatisfied {
                flag: option.flag(),
            });
        }
    }
    Ok(())
}

/// Equality where integers and floats compare by numeric value
fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Integer(_), Value::Float(_)) | (Value::Float(_), Value::Integer(_)) => {
            a.as_f64() == b.as_f64()
        }
        _ => a == b,
    }
}
