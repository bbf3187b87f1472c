//! Masking engine
//!
//! Maps arbitrary text to the canonical money rendering: grouped integer digits, optionally followed
//! by the decimal separator and at most `precision` fractional digits. Each step of the pipeline is a
//! separate function so the heuristics (leading-zero collapse, overflow-digit replacement, lone-zero
//! suppression) can be reasoned about and tested on their own.

use crate::config::FormatConfig;
use crate::formatter::grouping::group_thousands;

/// Mask raw field text into its canonical rendering
///
/// # Arguments
/// * `raw` - The text proposed by the text field
/// * `config` - Separators and precision
///
/// # Returns
/// * `String` - The masked text; malformed input degrades to an empty or partial result
///
/// # Examples
/// ```
/// use money_mask::FormatConfig;
/// use money_mask::formatter::apply_mask;
///
/// let config = FormatConfig::default();
/// assert_eq!(apply_mask("1234567", &config), "1.234.567");
/// assert_eq!(apply_mask("5,0", &config), "5");
/// ```
pub fn apply_mask(raw: &str, config: &FormatConfig) -> String {
    let (integer_part, decimal_part) = split_on_decimal(raw, config.decimal_separator());

    let integer_digits = collapse_leading_zeros(&digits_only(integer_part));
    let mut result = group_thousands(&integer_digits, config.thousand_separator());

    let decimal_digits = limit_precision(&digits_only(decimal_part), config.precision());
    let decimal_digits = suppress_lone_zero(decimal_digits);

    if !decimal_digits.is_empty() {
        result.push(config.decimal_separator());
        result.push_str(&decimal_digits);
    }

    result
}

/// Split on the first decimal separator; the decimal part is empty when there is none
fn split_on_decimal(raw: &str, decimal_separator: char) -> (&str, &str) {
    raw.split_once(decimal_separator).unwrap_or((raw, ""))
}

fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Drop leading zeros from the integer digits
///
/// An all-zero run keeps a single "0", so "01" becomes "1", "0123" becomes "123" and "000" becomes
/// "0". Collapsing before grouping keeps the separators of a four-digit "0xxx" run intact.
fn collapse_leading_zeros(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Keep at most `precision` fractional digits
///
/// On overflow the newest digit (the last one) replaces the digit at the precision boundary, so
/// typing past the limit rewrites the final fractional digit instead of being ignored. A precision
/// of zero admits no fractional digits.
fn limit_precision(decimal_digits: &str, precision: usize) -> String {
    if precision == 0 {
        return String::new();
    }

    let len = decimal_digits.chars().count();
    if len <= precision {
        return decimal_digits.to_string();
    }

    let mut limited: String = decimal_digits.chars().take(precision - 1).collect();
    if let Some(newest) = decimal_digits.chars().last() {
        limited.push(newest);
    }
    limited
}

/// A fraction consisting of a single "0" is dropped
fn suppress_lone_zero(decimal_digits: String) -> String {
    if decimal_digits == "0" {
        String::new()
    } else {
        decimal_digits
    }
}
