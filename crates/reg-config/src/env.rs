//! `REG_*` environment overrides, applied on top of the loaded file.

use std::env;
use std::str::FromStr;

/// Replace `target` when the variable is set
pub(crate) fn override_string(var: &str, target: &mut String) {
    if let Ok(value) = env::var(var) {
        *target = value;
    }
}

pub(crate) fn override_option(var: &str, target: &mut Option<String>) {
    if let Ok(value) = env::var(var) {
        *target = Some(value);
    }
}

/// "true" and "1" count as true, anything else as false
pub(crate) fn override_bool(var: &str, target: &mut bool) {
    if let Ok(value) = env::var(var) {
        *target = matches!(value.as_str(), "true" | "1");
    }
}

/// Replace `target` when the variable is set and parses; unparseable values
/// leave the configured value in place
pub(crate) fn override_parse<T: FromStr>(var: &str, target: &mut T) {
    if let Ok(value) = env::var(var)
        && let Ok(parsed) = value.parse()
    {
        *target = parsed;
    }
}
