//! Permissive Roman numeral arithmetic.
//!
//! Accepts any run of letters and never rejects it: letters outside the
//! Roman set are worth zero, and subtraction only ever looks at the single
//! following letter. `iiv` is therefore 5, not 3.

/// The recognized Roman letters, lowercase. Matching is case-insensitive.
pub const ROMAN_LETTERS: [char; 7] = ['i', 'v', 'x', 'l', 'c', 'd', 'm'];

/// Whether `c` is one of `i v x l c d m`, in either case.
pub fn is_roman_letter(c: char) -> bool {
    ROMAN_LETTERS.contains(&c.to_ascii_lowercase())
}

/// Value of a single Roman letter, or 0 for anything else.
pub fn roman_digit_value(c: char) -> u32 {
    match c.to_ascii_lowercase() {
        'i' => 1,
        'v' => 5,
        'x' => 10,
        'l' => 50,
        'c' => 100,
        'd' => 500,
        'm' => 1000,
        _ => 0,
    }
}

/// Convert a run of Roman letters to its decimal value as a digit string.
///
/// Each letter is subtracted when the letter right after it is worth
/// strictly more, otherwise added; the last letter is always added.
///
/// ```
/// use layered_sort_keys::roman_to_int_str;
///
/// assert_eq!(roman_to_int_str("MCMLXX"), "1970");
/// assert_eq!(roman_to_int_str("iiv"), "5");
/// assert_eq!(roman_to_int_str(""), "0");
/// ```
pub fn roman_to_int_str(letters: &str) -> String {
    let values: Vec<i64> = letters
        .chars()
        .map(|c| i64::from(roman_digit_value(c)))
        .collect();

    let mut total: i64 = 0;
    for (idx, value) in values.iter().enumerate() {
        match values.get(idx + 1) {
            Some(next) if value < next => total -= value,
            _ => total += value,
        }
    }

    total.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values() {
        assert_eq!(roman_digit_value('i'), 1);
        assert_eq!(roman_digit_value('V'), 5);
        assert_eq!(roman_digit_value('x'), 10);
        assert_eq!(roman_digit_value('L'), 50);
        assert_eq!(roman_digit_value('c'), 100);
        assert_eq!(roman_digit_value('D'), 500);
        assert_eq!(roman_digit_value('m'), 1000);
        assert_eq!(roman_digit_value('a'), 0);
        assert_eq!(roman_digit_value('1'), 0);
        assert_eq!(roman_digit_value('.'), 0);
    }

    #[test]
    fn test_is_roman_letter() {
        for c in "ivxlcdmIVXLCDM".chars() {
            assert!(is_roman_letter(c), "{} should be a roman letter", c);
        }
        for c in "abefgnyzA0 .-".chars() {
            assert!(!is_roman_letter(c), "{} should not be a roman letter", c);
        }
    }

    #[test]
    fn test_roman_to_int_str() {
        let cases = [
            ("", "0"),
            ("I", "1"),
            ("II", "2"),
            ("III", "3"),
            ("IIII", "4"),
            ("IIIII", "5"),
            ("iv", "4"),
            ("v", "5"),
            ("vi", "6"),
            ("vii", "7"),
            ("viii", "8"),
            ("iX", "9"),
            ("x", "10"),
            ("XI", "11"),
            ("L", "50"),
            ("C", "100"),
            ("d", "500"),
            ("M", "1000"),
            ("MCMLXX", "1970"),
            ("CM", "900"),
        ];
        for (letters, expected) in cases {
            assert_eq!(roman_to_int_str(letters), expected, "input {:?}", letters);
        }
    }

    #[test]
    fn test_adjacent_pair_rule_for_repeated_prefixes() {
        assert_eq!(roman_to_int_str("iv"), "4");
        assert_eq!(roman_to_int_str("iiv"), "5");
        assert_eq!(roman_to_int_str("iiiv"), "6");
        assert_eq!(roman_to_int_str("iiiiv"), "7");
        assert_eq!(roman_to_int_str("iiiiiv"), "8");
    }

    #[test]
    fn test_unrecognized_letters_are_worth_zero() {
        assert_eq!(roman_to_int_str("12345"), "0");
        assert_eq!(roman_to_int_str("ii "), "2");
        assert_eq!(roman_to_int_str(" vi"), "6");
        assert_eq!(roman_to_int_str("v-v"), "10");
    }

    #[test]
    fn test_case_does_not_matter() {
        assert_eq!(roman_to_int_str("mcmxciv"), roman_to_int_str("MCMXCIV"));
        assert_eq!(roman_to_int_str("McMxCiV"), "1994");
    }
}
