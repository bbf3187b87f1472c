use crate::config::FormatConfig;
use crate::formatter::grouping::group_thousands;

/// Render a number in the canonical money form
///
/// The value is rounded to `precision` fractional digits, the integer part is grouped and trailing
/// fractional zeros are trimmed. Negative non-zero results carry a leading '-'. Non-finite values
/// render as an empty string.
///
/// # Examples
/// ```
/// use money_mask::FormatConfig;
/// use money_mask::formatter::format_value;
///
/// let config = FormatConfig::default();
/// assert_eq!(format_value(1234.5, &config), "1.234,5");
/// assert_eq!(format_value(-0.256, &config), "-0,26");
/// ```
pub fn format_value(value: f64, config: &FormatConfig) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let precision = config.precision();
    let rendered = format!("{:.*}", precision, value.abs());
    let (integer_str, fraction_str) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    let fraction = fraction_str.trim_end_matches('0');
    let is_zero = integer_str.chars().all(|c| c == '0') && fraction.is_empty();

    let mut result = String::new();
    if value.is_sign_negative() && !is_zero {
        result.push('-');
    }
    result.push_str(&group_thousands(integer_str, config.thousand_separator()));

    if !fraction.is_empty() {
        result.push(config.decimal_separator());
        result.push_str(fraction);
    }

    result
}
