//! As-you-type phone number formatting

/// Keep only the ASCII digits of `value`
pub fn strip_to_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Render a phone number as `(AAA) BBB-CCCC`, building it up as digits arrive.
///
/// Fewer than three digits are left bare, three to five get the area code
/// wrapped, six or more get the full layout truncated to ten digits.
/// Applying it to its own output yields the same string.
pub fn format_phone(value: &str) -> String {
    let digits = strip_to_digits(value);
    let digits = &digits[..digits.len().min(10)];

    match digits.len() {
        0..=2 => digits.to_string(),
        3..=5 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_number() {
        assert_eq!(format_phone("4809688116"), "(480) 968-8116");
    }

    #[test]
    fn test_idempotent_on_formatted_number() {
        let once = format_phone("4809688116");
        assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn test_idempotent_on_partial_numbers() {
        for input in ["", "4", "48", "480", "4809", "48096", "480968", "4809688"] {
            let once = format_phone(input);
            assert_eq!(format_phone(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_short_input_stays_bare() {
        assert_eq!(format_phone("48"), "48");
    }

    #[test]
    fn test_area_code_only() {
        assert_eq!(format_phone("480"), "(480) ");
        assert_eq!(format_phone("48096"), "(480) 96");
    }

    #[test]
    fn test_six_digits_gets_dash() {
        assert_eq!(format_phone("480968"), "(480) 968-");
    }

    #[test]
    fn test_strips_separators_and_letters() {
        assert_eq!(format_phone("480.968.8116"), "(480) 968-8116");
        assert_eq!(format_phone("480-968-81x16"), "(480) 968-8116");
    }

    #[test]
    fn test_truncates_extra_digits() {
        assert_eq!(format_phone("480968811612"), "(480) 968-8116");
    }
}
