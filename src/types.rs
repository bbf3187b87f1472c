//! Type definitions for money-mask
//!
//! This module defines the text-field snapshot passed through each reconciliation and the
//! classification of a proposed edit.

/// Snapshot of a text field: its text and the caret position
///
/// `cursor` is a character offset into `text`. `None` means the field has no selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditValue {
    /// Text currently shown in the field
    pub text: String,
    /// Caret position in characters, if any
    pub cursor: Option<usize>,
}

impl EditValue {
    /// Create a snapshot with the caret at `cursor`
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        Self {
            text: text.into(),
            cursor: Some(cursor),
        }
    }

    /// Create a snapshot with the caret after the last character
    pub fn collapsed(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor: Some(cursor),
        }
    }

    /// Create a snapshot with no selection
    pub fn without_cursor(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: None,
        }
    }

    /// Empty text with the caret at the start
    pub fn empty() -> Self {
        Self::new(String::new(), 0)
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Classification of a proposed edit, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Text holds arithmetic tokens (- + ( ) * /) and belongs to a calculator expression
    CalculatorExpression,
    /// A single decimal separator (or a literal ',') typed into an empty field
    SoleSeparator,
    /// The field was emptied
    Cleared,
    /// The field holds a single "0"
    SoleZero,
    /// More than one decimal separator
    DuplicateDecimal,
    /// Ordinary money input that goes through the mask
    Money,
}

impl EditKind {
    /// Checks if the money mask runs for this kind of edit
    pub fn is_masked(&self) -> bool {
        matches!(self, EditKind::Money)
    }
}
