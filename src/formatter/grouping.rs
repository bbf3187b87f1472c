/// Insert `separator` between every run of three digits, counted from the right
///
/// No separator is placed before the leftmost group. An empty input yields an empty string.
pub(crate) fn group_thousands(digits: &str, separator: char) -> String {
    let int_digits: Vec<char> = digits.chars().collect();
    let mut grouped: Vec<char> =
        Vec::with_capacity(int_digits.len() + int_digits.len().saturating_sub(1) / 3);

    for (count, digit) in int_digits.iter().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*digit);
    }
    grouped.reverse();

    grouped.into_iter().collect()
}
