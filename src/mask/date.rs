//! `DD/MM/YYYY` display mask.

/// Number of digits kept by the date mask (`DDMMYYYY`).
pub const DATE_DIGITS: usize = 8;

/// Mask raw input as `DD/MM/YYYY`.
///
/// Non-digits are stripped, the result is truncated to eight digits and a
/// `/` is inserted after the day and after the month once the next digit is
/// present. No calendar validation happens: `99/99/9999` is a valid display.
///
/// ```rust
/// use receipt_render::mask_date;
///
/// assert_eq!(mask_date("251"), "25/1");
/// assert_eq!(mask_date("25122023"), "25/12/2023");
/// ```
pub fn mask_date(raw: &str) -> String {
    let mut masked = String::with_capacity(DATE_DIGITS + 2);

    for (i, digit) in raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(DATE_DIGITS)
        .enumerate()
    {
        if i == 2 || i == 4 {
            masked.push('/');
        }
        masked.push(digit);
    }

    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_inputs_have_no_separator() {
        assert_eq!(mask_date(""), "");
        assert_eq!(mask_date("2"), "2");
        assert_eq!(mask_date("25"), "25");
    }

    #[test]
    fn test_progression() {
        let typed = "25122023";
        let steps: Vec<String> = (1..=typed.len()).map(|n| mask_date(&typed[..n])).collect();
        assert_eq!(
            steps,
            [
                "2",
                "25",
                "25/1",
                "25/12",
                "25/12/2",
                "25/12/20",
                "25/12/202",
                "25/12/2023"
            ]
        );
    }

    #[test]
    fn test_remask_is_stable() {
        assert_eq!(mask_date("25/12/2023"), "25/12/2023");
        assert_eq!(mask_date(&mask_date("2512")), "25/12");
    }

    #[test]
    fn test_truncates_to_eight_digits() {
        assert_eq!(mask_date("2512202399"), "25/12/2023");
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(mask_date("99999999"), "99/99/9999");
    }
}
