//! Money formatting module
//!
//! This module masks field text into its canonical money rendering and renders numbers in the same
//! form. The main entry point is [`MoneyFormatter`], which bundles a validated configuration with
//! every operation a text-input host needs.

pub mod cursor;
mod grouping;
mod mask;
mod value;

pub use mask::apply_mask;
pub use value::format_value;

use crate::config::FormatConfig;
use crate::error::Result;
use crate::reconciler;
use crate::types::{EditKind, EditValue};

/// Formatter for money input fields
///
/// Holds an immutable [`FormatConfig`]; every method is a pure function of its arguments and that
/// configuration, so one formatter can serve any number of fields.
///
/// # Examples
/// ```
/// use money_mask::{EditValue, MoneyFormatter};
///
/// let formatter = MoneyFormatter::default();
/// let shown = formatter.reconcile(&EditValue::collapsed("999"), &EditValue::collapsed("9999"));
/// assert_eq!(shown.text, "9.999");
/// assert_eq!(formatter.number_value(&shown.text), 9999.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoneyFormatter {
    config: FormatConfig,
}

impl MoneyFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Build a formatter from raw parameters
    ///
    /// Fails with `FormatError::InvalidConfiguration` when both separators are equal.
    pub fn try_new(
        decimal_separator: char,
        thousand_separator: char,
        precision: usize,
    ) -> Result<Self> {
        FormatConfig::new(decimal_separator, thousand_separator, precision).map(Self::new)
    }

    /// Build a formatter from a TOML configuration document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        FormatConfig::from_toml_str(toml_str).map(Self::new)
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Mask raw text into the canonical rendering
    pub fn apply_mask(&self, raw: &str) -> String {
        apply_mask(raw, &self.config)
    }

    /// Best-effort numeric value of masked text; never fails and is always finite
    pub fn number_value(&self, masked: &str) -> f64 {
        crate::parser::number_value(masked, &self.config)
    }

    /// Render a number in the canonical rendering
    pub fn format_value(&self, value: f64) -> String {
        format_value(value, &self.config)
    }

    pub fn classify(&self, text: &str) -> EditKind {
        reconciler::classify(text, &self.config)
    }

    /// Decide what the field displays after a keystroke
    ///
    /// # Arguments
    /// * `old` - The previously displayed value
    /// * `proposed` - The value produced by applying the keystroke verbatim
    ///
    /// # Returns
    /// * `EditValue` - The corrected text and caret
    pub fn reconcile(&self, old: &EditValue, proposed: &EditValue) -> EditValue {
        reconciler::reconcile(old, proposed, &self.config)
    }
}
