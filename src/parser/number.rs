use winnow::ascii::float;
use winnow::{ModalResult, Parser};

use crate::config::FormatConfig;

/// Best-effort numeric value of a masked string
///
/// Thousand separators are removed, the first decimal separator and any literal ',' become '.',
/// and the remainder is parsed as a float. Empty text, unparsable text and non-finite results all
/// yield `0.0`.
///
/// # Arguments
/// * `masked` - Text produced by the masking engine (any text is accepted)
/// * `config` - Separators used to render `masked`
///
/// # Returns
/// * `f64` - The parsed value, always finite
///
/// # Examples
/// ```
/// use money_mask::{number_value, FormatConfig};
///
/// let config = FormatConfig::default();
/// assert_eq!(number_value("1.234,5", &config), 1234.5);
/// assert_eq!(number_value("abc", &config), 0.0);
/// ```
pub fn number_value(masked: &str, config: &FormatConfig) -> f64 {
    if masked.is_empty() {
        return 0.0;
    }

    let normalized = normalize_number_text(masked, config);
    parse_decimal
        .parse(normalized.as_str())
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn normalize_number_text(masked: &str, config: &FormatConfig) -> String {
    let mut decimal_seen = false;
    masked
        .chars()
        .filter(|c| *c != config.thousand_separator())
        .map(|c| {
            if c == config.decimal_separator() && !decimal_seen {
                decimal_seen = true;
                '.'
            } else if c == ',' {
                '.'
            } else {
                c
            }
        })
        .collect()
}

/// Parse a plain decimal number such as "1234.5"
fn parse_decimal(input: &mut &str) -> ModalResult<f64> {
    float.parse_next(input)
}
