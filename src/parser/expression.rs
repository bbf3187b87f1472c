//! Calculator expression escape
//!
//! Text containing arithmetic tokens belongs to an upstream calculator feature rather than to the
//! money mask. It only receives a light clean-up of doubled signs and spaces.

const ARITHMETIC_TOKENS: [char; 6] = ['-', '+', '(', ')', '*', '/'];

/// Checks if the text contains any arithmetic token
pub fn is_calculator_expression(text: &str) -> bool {
    text.contains(ARITHMETIC_TOKENS)
}

/// Clean up a calculator expression
///
/// Every "--" is removed, then "+-" becomes "-", then spaces are removed.
pub fn normalize_expression(text: &str) -> String {
    text.replace("--", "").replace("+-", "-").replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_calculator_expression() {
        assert!(is_calculator_expression("12-3"));
        assert!(is_calculator_expression("(1)"));
        assert!(is_calculator_expression("2*3"));
        assert!(is_calculator_expression("6/2"));
        assert!(is_calculator_expression("+"));
        assert!(!is_calculator_expression("1.234,56"));
        assert!(!is_calculator_expression(""));
    }

    #[test]
    fn test_normalize_expression() {
        assert_eq!(normalize_expression("12--3"), "123");
        assert_eq!(normalize_expression("1+-2"), "1-2");
        assert_eq!(normalize_expression("1 + 2"), "1+2");
        assert_eq!(normalize_expression("1---2"), "1-2");
        assert_eq!(normalize_expression("1+--2"), "1+2");
        assert_eq!(normalize_expression("1+2"), "1+2");
    }
}
