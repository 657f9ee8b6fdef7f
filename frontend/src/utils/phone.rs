/// Longest Brazilian mobile number: two-digit area code plus nine digits.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Masks whatever is in the phone input as `(DD) DDDDD-DDDD`, rebuilding the
/// mask from the digits alone on every keystroke. Digits past the eleventh
/// are dropped.
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_PHONE_DIGITS)
        .collect();

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_mobile_number() {
        assert_eq!(format_phone("75988282970"), "(75) 98828-2970");
    }

    #[test]
    fn formats_partial_input() {
        assert_eq!(format_phone("7"), "(7");
        assert_eq!(format_phone("75"), "(75");
        assert_eq!(format_phone("759"), "(75) 9");
        assert_eq!(format_phone("7598828"), "(75) 98828");
        assert_eq!(format_phone("75988282"), "(75) 98828-2");
    }

    #[test]
    fn reformats_already_masked_value() {
        assert_eq!(format_phone("(75) 98828-297"), "(75) 98828-297");
        assert_eq!(format_phone("(75) 98828-2970"), "(75) 98828-2970");
    }

    #[test]
    fn caps_at_eleven_digits() {
        assert_eq!(format_phone("759882829701"), "(75) 98828-2970");
        assert_eq!(format_phone("(75) 98828-29701234"), "(75) 98828-2970");
    }

    #[test]
    fn empty_or_non_digit_input_clears_field() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("abc-()"), "");
    }
}
