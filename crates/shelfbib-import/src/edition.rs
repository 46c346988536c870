//! Edition ordinal naming
//!
//! Maps small edition numbers to their English ordinal word. The table
//! covers the editions that actually occur in catalogs (1-32 plus a few
//! landmark values); general ordinal generation is out of scope.

/// Ordinal word for a tabled edition number.
pub fn ordinal_word(value: u64) -> Option<&'static str> {
    let word = match value {
        1 => "First",
        2 => "Second",
        3 => "Third",
        4 => "Fourth",
        5 => "Fifth",
        6 => "Sixth",
        7 => "Seventh",
        8 => "Eighth",
        9 => "Ninth",
        10 => "Tenth",
        11 => "Eleventh",
        12 => "Twelfth",
        13 => "Thirteenth",
        14 => "Fourteenth",
        15 => "Fifteenth",
        16 => "Sixteenth",
        17 => "Seventeenth",
        18 => "Eighteenth",
        19 => "Nineteenth",
        20 => "Twentieth",
        21 => "Twenty-first",
        22 => "Twenty-second",
        23 => "Twenty-third",
        24 => "Twenty-fourth",
        25 => "Twenty-fifth",
        26 => "Twenty-sixth",
        27 => "Twenty-seventh",
        28 => "Twenty-eighth",
        29 => "Twenty-ninth",
        30 => "Thirtieth",
        31 => "Thirty-first",
        32 => "Thirty-second",
        100 => "Hundredth",
        101 => "Hundred and first",
        112 => "Hundred and twelfth",
        1000 => "Thousandth",
        _ => return None,
    };
    Some(word)
}

/// Ordinal word for a digit string, falling back to the digits
/// themselves (with a warning) when the value is not in the table.
pub fn ordinal_text(digits: &str, warnings: &mut Vec<String>) -> String {
    match digits.parse::<u64>().ok().and_then(ordinal_word) {
        Some(word) => word.to_string(),
        None => {
            warnings.push(format!("no ordinal word for edition {digits}"));
            digits.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabled_ordinals() {
        assert_eq!(ordinal_word(2), Some("Second"));
        assert_eq!(ordinal_word(21), Some("Twenty-first"));
        assert_eq!(ordinal_word(32), Some("Thirty-second"));
        assert_eq!(ordinal_word(112), Some("Hundred and twelfth"));
    }

    #[test]
    fn test_untabled_ordinal_is_none() {
        assert_eq!(ordinal_word(50), None);
        assert_eq!(ordinal_word(0), None);
        assert_eq!(ordinal_word(999), None);
    }

    #[test]
    fn test_ordinal_text_tabled() {
        let mut warnings = Vec::new();
        assert_eq!(ordinal_text("2", &mut warnings), "Second");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_ordinal_text_untabled_warns_and_keeps_digits() {
        let mut warnings = Vec::new();
        assert_eq!(ordinal_text("50", &mut warnings), "50");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("50"));
    }

    #[test]
    fn test_ordinal_text_overflowing_digits_keep_literal_value() {
        let mut warnings = Vec::new();
        let digits = "99999999999999999999999999";
        assert_eq!(ordinal_text(digits, &mut warnings), digits);
        assert_eq!(warnings.len(), 1);
    }
}
