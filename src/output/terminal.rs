//! Terminal output utilities.

use colored::Colorize;

/// Right-align `value` in a field of at least `width` characters.
///
/// Values longer than `width` are returned whole.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    format!("{:>width$}", value.to_string())
}

/// Line shown for an address that failed to parse.
pub fn format_error(raw: &str, message: &str) -> String {
    format!(
        "{failed} '{raw}': {message}",
        failed = "invalid".on_red(),
        message = message.red()
    )
}
