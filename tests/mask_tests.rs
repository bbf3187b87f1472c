use money_mask::{FormatConfig, MoneyFormatter};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct MaskCase {
    input: String,
    expected: String,
    value: f64,
    decimal_separator: Option<char>,
    thousand_separator: Option<char>,
    precision: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct MaskCases {
    cases: Vec<MaskCase>,
}

fn formatter_for(case: &MaskCase) -> MoneyFormatter {
    let defaults = FormatConfig::default();
    MoneyFormatter::try_new(
        case.decimal_separator.unwrap_or(defaults.decimal_separator()),
        case.thousand_separator.unwrap_or(defaults.thousand_separator()),
        case.precision.unwrap_or(defaults.precision()),
    )
    .unwrap()
}

#[test]
fn test_mask_fixture_cases() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("mask_cases.json");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    let cases: MaskCases = serde_json::from_str(&content).unwrap();

    for case in &cases.cases {
        let formatter = formatter_for(case);
        let masked = formatter.apply_mask(&case.input);
        assert_eq!(masked, case.expected, "mask of {:?}", case.input);
        assert_eq!(formatter.apply_mask(&masked), masked, "idempotence of {:?}", case.input);

        let value = formatter.number_value(&masked);
        assert!(
            (value - case.value).abs() < 1e-6,
            "value of {:?}: expected {}, got {}",
            masked,
            case.value,
            value
        );
    }
}

#[test]
fn test_number_value_edge_cases() {
    let formatter = MoneyFormatter::default();
    assert_eq!(formatter.number_value(""), 0.0);
    assert_eq!(formatter.number_value("1.234.567"), 1234567.0);
    assert_eq!(formatter.number_value("12,5"), 12.5);
    assert_eq!(formatter.number_value("12,5,5"), 0.0);
    assert_eq!(formatter.number_value("twelve"), 0.0);
    assert_eq!(formatter.number_value("inf"), 0.0);
    assert_eq!(formatter.number_value("NaN"), 0.0);
}

#[test]
fn test_number_value_literal_comma_with_dot_decimal() {
    let formatter = MoneyFormatter::try_new('.', ' ', 2).unwrap();
    assert_eq!(formatter.number_value("1 234.5"), 1234.5);
    assert_eq!(formatter.number_value("1 234,5"), 1234.5);
}

#[test]
fn test_format_value_feeds_the_mask() {
    let formatter = MoneyFormatter::try_new('.', ',', 2).unwrap();
    for value in [0.0, 0.5, 7.25, 1000.0, 1234567.891, 999999.999] {
        let rendered = formatter.format_value(value);
        assert_eq!(formatter.apply_mask(&rendered), rendered, "value {value}");
    }
    assert_eq!(formatter.format_value(999999.999), "1,000,000");
}
