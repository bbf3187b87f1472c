//! Formatter configuration
//!
//! This module holds the three formatting parameters (decimal separator, thousand separator and
//! decimal precision) and loads them from TOML documents supplied by the host.

use crate::error::{FormatError, Result};

const DEFAULT_DECIMAL_SEPARATOR: char = ',';
const DEFAULT_THOUSAND_SEPARATOR: char = '.';
const DEFAULT_PRECISION: usize = 2;

/// Immutable formatting parameters
///
/// The decimal separator and the thousand separator are always distinct characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    decimal_separator: char,
    thousand_separator: char,
    precision: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            thousand_separator: DEFAULT_THOUSAND_SEPARATOR,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl FormatConfig {
    /// Create a configuration, rejecting identical separators
    ///
    /// # Arguments
    /// * `decimal_separator` - Character between the integer and fractional parts
    /// * `thousand_separator` - Character inserted between groups of three integer digits
    /// * `precision` - Maximum number of fractional digits
    ///
    /// # Returns
    /// * `Result<FormatConfig>` - The configuration, or `FormatError::InvalidConfiguration`
    ///
    /// # Examples
    /// ```
    /// use money_mask::FormatConfig;
    ///
    /// let config = FormatConfig::new('.', ',', 2).unwrap();
    /// assert_eq!(config.decimal_separator(), '.');
    /// assert!(FormatConfig::new(',', ',', 2).is_err());
    /// ```
    pub fn new(decimal_separator: char, thousand_separator: char, precision: usize) -> Result<Self> {
        if decimal_separator == thousand_separator {
            return Err(FormatError::InvalidConfiguration {
                separator: decimal_separator,
            });
        }

        Ok(Self {
            decimal_separator,
            thousand_separator,
            precision,
        })
    }

    /// Load a configuration from a TOML document
    ///
    /// Keys are read from the root table, or from a `[format]` table when one is present.
    /// Missing keys fall back to the defaults (`","`, `"."`, `2`).
    ///
    /// ```toml
    /// decimal_separator = "."
    /// thousand_separator = ","
    /// precision = 3
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| FormatError::Parse(e.to_string()))?;

        let root = parsed_toml
            .as_table()
            .ok_or_else(|| FormatError::Parse("Root is not a table".to_string()))?;

        let table = match root.get("format") {
            Some(value) => value.as_table().ok_or_else(|| FormatError::InvalidField {
                field: "format",
                reason: "expected a table".to_string(),
            })?,
            None => root,
        };

        let decimal_separator =
            read_separator(table, "decimal_separator")?.unwrap_or(DEFAULT_DECIMAL_SEPARATOR);
        let thousand_separator =
            read_separator(table, "thousand_separator")?.unwrap_or(DEFAULT_THOUSAND_SEPARATOR);
        let precision = read_precision(table)?.unwrap_or(DEFAULT_PRECISION);

        let config = Self::new(decimal_separator, thousand_separator, precision)?;
        tracing::debug!(
            decimal = %config.decimal_separator,
            thousand = %config.thousand_separator,
            precision = config.precision,
            "Loaded format configuration"
        );
        Ok(config)
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn thousand_separator(&self) -> char {
        self.thousand_separator
    }

    pub fn precision(&self) -> usize {
        self.precision
    }
}

/// Read a single-character separator key
fn read_separator(table: &toml::Table, field: &'static str) -> Result<Option<char>> {
    let Some(value) = table.get(field) else {
        return Ok(None);
    };

    let text = value.as_str().ok_or_else(|| FormatError::InvalidField {
        field,
        reason: format!("expected a string, found {}", value.type_str()),
    })?;

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some(c)),
        _ => Err(FormatError::InvalidField {
            field,
            reason: format!("expected exactly one character, found {text:?}"),
        }),
    }
}

fn read_precision(table: &toml::Table) -> Result<Option<usize>> {
    let Some(value) = table.get("precision") else {
        return Ok(None);
    };

    let precision = value.as_integer().ok_or_else(|| FormatError::InvalidField {
        field: "precision",
        reason: format!("expected an integer, found {}", value.type_str()),
    })?;

    usize::try_from(precision)
        .map(Some)
        .map_err(|_| FormatError::InvalidField {
            field: "precision",
            reason: format!("expected a non-negative integer, found {precision}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.decimal_separator(), ',');
        assert_eq!(config.thousand_separator(), '.');
        assert_eq!(config.precision(), 2);
    }

    #[test]
    fn test_same_separators_rejected() {
        assert_eq!(
            FormatConfig::new('.', '.', 2),
            Err(FormatError::InvalidConfiguration { separator: '.' })
        );
    }

    #[test]
    fn test_toml_root_and_section() {
        let root = FormatConfig::from_toml_str(
            "decimal_separator = \".\"\nthousand_separator = \",\"\nprecision = 3\n",
        )
        .unwrap();
        assert_eq!(root, FormatConfig::new('.', ',', 3).unwrap());

        let section =
            FormatConfig::from_toml_str("[format]\nthousand_separator = \" \"\n").unwrap();
        assert_eq!(section, FormatConfig::new(',', ' ', 2).unwrap());
    }

    #[test]
    fn test_toml_invalid_fields() {
        assert!(matches!(
            FormatConfig::from_toml_str("decimal_separator = \"ab\""),
            Err(FormatError::InvalidField {
                field: "decimal_separator",
                ..
            })
        ));
        assert!(matches!(
            FormatConfig::from_toml_str("precision = -1"),
            Err(FormatError::InvalidField {
                field: "precision",
                ..
            })
        ));
        assert!(matches!(
            FormatConfig::from_toml_str("precision = \"two\""),
            Err(FormatError::InvalidField { .. })
        ));
        assert!(matches!(
            FormatConfig::from_toml_str("precision = "),
            Err(FormatError::Parse(_))
        ));
    }
}
