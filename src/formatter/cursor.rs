//! Cursor mapping between rendered text and logical positions
//!
//! A logical offset counts the characters before the caret that are not grouping separators.
//! Re-grouping the integer part moves separators around but keeps logical offsets stable, so a
//! caret is carried across a re-format by converting to a logical offset on the old rendering and
//! back to a character offset on the new one.

/// Number of non-`grouping` characters before `char_offset`
///
/// Offsets past the end of `text` count every non-grouping character.
pub fn logical_offset(text: &str, char_offset: usize, grouping: char) -> usize {
    text.chars()
        .take(char_offset)
        .filter(|c| *c != grouping)
        .count()
}

/// Character offset at which `logical_offset` non-`grouping` characters have been passed
///
/// Separators following the last counted character are not skipped, so the caret stays directly
/// after the digit it followed. Returns the text length when the walk runs out of characters.
pub fn char_offset(text: &str, logical_offset: usize, grouping: char) -> usize {
    let mut passed = 0;
    for (index, c) in text.chars().enumerate() {
        if passed == logical_offset {
            return index;
        }
        if c != grouping {
            passed += 1;
        }
    }
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_offset_skips_separators() {
        assert_eq!(logical_offset("1.234.567", 0, '.'), 0);
        assert_eq!(logical_offset("1.234.567", 2, '.'), 1);
        assert_eq!(logical_offset("1.234.567", 6, '.'), 4);
        assert_eq!(logical_offset("1.234.567", 9, '.'), 7);
        assert_eq!(logical_offset("1.234", 50, '.'), 4);
    }

    #[test]
    fn test_char_offset_stays_before_separator() {
        assert_eq!(char_offset("1.234", 0, '.'), 0);
        assert_eq!(char_offset("1.234", 1, '.'), 1);
        assert_eq!(char_offset("1.234", 2, '.'), 3);
        assert_eq!(char_offset("1.234", 4, '.'), 5);
        assert_eq!(char_offset("1.234", 9, '.'), 5);
        assert_eq!(char_offset("", 3, '.'), 0);
    }

    #[test]
    fn test_offsets_are_symmetric() {
        let text = "12.345.678,9";
        for offset in 0..=text.chars().count() {
            let logical = logical_offset(text, offset, '.');
            let back = char_offset(text, logical, '.');
            assert_eq!(logical_offset(text, back, '.'), logical);
            assert!(back <= offset);
        }
    }
}
