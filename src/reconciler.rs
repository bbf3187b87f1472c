//! Edit reconciliation
//!
//! Decides what a text field should display after a keystroke. A proposed edit is first classified
//! into an [`EditKind`], then accepted, rejected, reset, or re-masked with the caret carried over
//! to the same logical position.

use crate::config::FormatConfig;
use crate::formatter::apply_mask;
use crate::formatter::cursor::{char_offset, logical_offset};
use crate::parser::{is_calculator_expression, normalize_expression};
use crate::types::{EditKind, EditValue};

/// Classify the text of a proposed edit
///
/// Checks run in priority order and the first match wins; calculator expressions take precedence
/// over everything else.
pub fn classify(text: &str, config: &FormatConfig) -> EditKind {
    let decimal_separator = config.decimal_separator();

    if is_calculator_expression(text) {
        return EditKind::CalculatorExpression;
    }

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c == decimal_separator || c == ',' => EditKind::SoleSeparator,
        (None, _) => EditKind::Cleared,
        (Some('0'), None) => EditKind::SoleZero,
        _ if text.matches(decimal_separator).count() > 1 => EditKind::DuplicateDecimal,
        _ => EditKind::Money,
    }
}

/// Reconcile a proposed edit against the previously displayed value
///
/// # Arguments
/// * `old` - The value the field showed before the keystroke
/// * `proposed` - The value the field would show if the keystroke were applied verbatim
/// * `config` - Separators and precision
///
/// # Returns
/// * `EditValue` - The text and caret the field should actually display
///
/// # Examples
/// ```
/// use money_mask::{EditValue, FormatConfig};
/// use money_mask::reconciler::reconcile;
///
/// let config = FormatConfig::default();
/// let old = EditValue::collapsed("123");
/// let result = reconcile(&old, &EditValue::collapsed("1234"), &config);
/// assert_eq!(result, EditValue::new("1.234", 5));
/// ```
pub fn reconcile(old: &EditValue, proposed: &EditValue, config: &FormatConfig) -> EditValue {
    let kind = classify(&proposed.text, config);
    tracing::trace!(?kind, text = %proposed.text, "Classified edit");

    match kind {
        EditKind::CalculatorExpression => reconcile_expression(proposed),
        EditKind::SoleSeparator | EditKind::Cleared => EditValue::empty(),
        EditKind::SoleZero => EditValue::new("0", 1),
        EditKind::DuplicateDecimal => {
            tracing::debug!(
                rejected = %proposed.text,
                kept = %old.text,
                "Rejected edit with duplicate decimal separator"
            );
            old.clone()
        }
        EditKind::Money => reconcile_money(old, proposed, config),
    }
}

/// Clean a calculator expression, shifting the caret left by the number of removed characters
fn reconcile_expression(proposed: &EditValue) -> EditValue {
    let cleaned = normalize_expression(&proposed.text);
    if cleaned == proposed.text {
        return proposed.clone();
    }

    let cleaned_len = cleaned.chars().count();
    let removed = proposed.char_len() - cleaned_len;
    let cursor = proposed
        .cursor
        .map(|cursor| cursor.saturating_sub(removed).min(cleaned_len));

    EditValue {
        text: cleaned,
        cursor,
    }
}

fn reconcile_money(old: &EditValue, proposed: &EditValue, config: &FormatConfig) -> EditValue {
    let masked = apply_mask(&proposed.text, config);
    if masked == proposed.text {
        return proposed.clone();
    }

    let grouping = config.thousand_separator();
    let proposed_logical = proposed
        .cursor
        .map(|cursor| logical_offset(&proposed.text, cursor, grouping));

    let mut text = masked;
    if let Some(suffix) = in_progress_fraction(old, proposed, proposed_logical, config) {
        text.push_str(&suffix);
    }

    let cursor = proposed_logical.map(|logical| char_offset(&text, logical, grouping));
    tracing::debug!(
        from = %proposed.text,
        to = %text,
        ?cursor,
        "Re-masked edit"
    );

    EditValue { text, cursor }
}

/// Suffix of a fraction the user is still typing, if masking would strip it
///
/// A trailing decimal separator is always kept. A trailing "<separator>0" is kept only while the
/// caret moves forward or stays, so deleting back over it is not undone.
fn in_progress_fraction(
    old: &EditValue,
    proposed: &EditValue,
    proposed_logical: Option<usize>,
    config: &FormatConfig,
) -> Option<String> {
    if config.precision() == 0 {
        return None;
    }

    let decimal_separator = config.decimal_separator();
    if proposed.text.ends_with(decimal_separator) {
        return Some(decimal_separator.to_string());
    }

    let zero_suffix = format!("{decimal_separator}0");
    if !proposed.text.ends_with(&zero_suffix) {
        return None;
    }

    let grouping = config.thousand_separator();
    let old_logical = old
        .cursor
        .map(|cursor| logical_offset(&old.text, cursor, grouping));
    let moved_forward = match (old_logical, proposed_logical) {
        (Some(before), Some(after)) => after >= before,
        _ => true,
    };

    moved_forward.then_some(zero_suffix)
}
