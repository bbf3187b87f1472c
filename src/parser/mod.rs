//! Text parsing module
//!
//! This module turns field text back into data: the numeric value of a masked string and the
//! recognition and clean-up of calculator expressions.

mod expression;
mod number;

pub use expression::{is_calculator_expression, normalize_expression};
pub use number::number_value;
