//! Currency masking, formatting and the inverse parser.

use serde::Serialize;

/// Maximum number of digits kept by the currency mask.
///
/// Fifteen digits of cents stay below 2^53, so [`Amount::to_f64`] is exact
/// for every value the mask can produce. Further keystrokes are dropped.
pub const MAX_CURRENCY_DIGITS: usize = 15;

/// A monetary amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Amount(i64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a number of cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount in cents.
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// The amount in whole currency units, e.g. `12345` cents is `123.45`.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Add two amounts, clamping at the numeric bounds.
    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Amount::saturating_add)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&CurrencyFormat::default().format(*self))
    }
}

/// Locale convention used to display amounts.
///
/// The default is the Brazilian real: `R$ 1.234,56`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Symbol placed before the number, separated by a space.
    pub symbol: String,
    /// Separator between groups of three integer digits.
    pub thousands_separator: char,
    /// Separator between the integer part and the two fraction digits.
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

impl CurrencyFormat {
    /// Brazilian real (`R$`, `.` thousands, `,` decimals).
    pub fn brl() -> Self {
        Self {
            symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }

    /// Format an amount with symbol, grouped integer part and two fraction digits.
    ///
    /// ```rust
    /// use receipt_render::{Amount, CurrencyFormat};
    ///
    /// let brl = CurrencyFormat::brl();
    /// assert_eq!(brl.format(Amount::from_cents(123456789)), "R$ 1.234.567,89");
    /// ```
    pub fn format(&self, amount: Amount) -> String {
        let cents = amount.cents().unsigned_abs();
        let sign = if amount.cents() < 0 { "-" } else { "" };
        let int_str = group_thousands(cents / 100, self.thousands_separator);

        format!(
            "{sign}{} {int_str}{}{:02}",
            self.symbol,
            self.decimal_separator,
            cents % 100
        )
    }

    /// Mask raw keystroke input as a currency value.
    ///
    /// All non-digit characters are stripped and the remaining digits are read
    /// as cents. Empty input yields an empty display and a zero amount.
    pub fn mask(&self, raw: &str) -> (String, Amount) {
        let digits: Vec<u8> = raw
            .bytes()
            .filter(u8::is_ascii_digit)
            .take(MAX_CURRENCY_DIGITS)
            .collect();

        if digits.is_empty() {
            return (String::new(), Amount::ZERO);
        }

        let cents = digits
            .iter()
            .fold(0i64, |acc, d| acc * 10 + i64::from(d - b'0'));
        let amount = Amount::from_cents(cents);

        (self.format(amount), amount)
    }

    /// Parse a masked display string back into an amount.
    ///
    /// The currency symbol and thousands separators are removed and the
    /// decimal separator is read as the decimal point. Like a lenient float
    /// parser, the longest leading numeric prefix is used; anything
    /// unparseable is zero. Fraction digits past the second are truncated.
    /// A leading minus, as printed by [`CurrencyFormat::format`] for negative
    /// amounts, is kept.
    pub fn parse(&self, display: &str) -> Amount {
        let cleaned: String = display
            .replace(self.symbol.as_str(), "")
            .chars()
            .filter(|c| *c != self.thousands_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();

        parse_decimal_prefix(cleaned.trim()).unwrap_or(Amount::ZERO)
    }
}

/// Mask raw input with the default currency format.
pub fn mask_currency(raw: &str) -> (String, Amount) {
    CurrencyFormat::default().mask(raw)
}

/// Parse a display string produced by [`mask_currency`].
pub fn parse_currency(display: &str) -> Amount {
    CurrencyFormat::default().parse(display)
}

/// Format an amount with the default currency format.
pub fn format_currency(amount: Amount) -> String {
    CurrencyFormat::default().format(amount)
}

/// Parse `[-]digits[.digits]` from the start of `s`.
fn parse_decimal_prefix(s: &str) -> Option<Amount> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let rest = rest.trim_start();

    let int_digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let after_int = &rest[int_digits.len()..];
    let frac_digits: String = after_int
        .strip_prefix('.')
        .map(|frac| frac.chars().take_while(char::is_ascii_digit).collect())
        .unwrap_or_default();

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut cents: i64 = 0;
    for d in int_digits.bytes() {
        cents = cents
            .saturating_mul(10)
            .saturating_add(i64::from(d - b'0'));
    }
    cents = cents.saturating_mul(100);

    let mut frac = frac_digits.bytes().chain(std::iter::repeat(b'0')).take(2);
    let tens = frac.next().map_or(0, |d| i64::from(d - b'0'));
    let ones = frac.next().map_or(0, |d| i64::from(d - b'0'));
    cents = cents.saturating_add(tens * 10 + ones);

    Some(Amount::from_cents(if negative { -cents } else { cents }))
}

/// Format an integer with a separator between groups of three digits.
fn group_thousands(n: u64, sep: char) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(100, '.'), "100");
        assert_eq!(group_thousands(1000, '.'), "1.000");
        assert_eq!(group_thousands(1234567, '.'), "1.234.567");
    }

    #[test]
    fn test_mask_basic() {
        let (display, amount) = mask_currency("12345");
        assert_eq!(display, "R$ 123,45");
        assert_eq!(amount.cents(), 12345);
        assert_eq!(amount.to_f64(), 123.45);
    }

    #[test]
    fn test_mask_strips_non_digits() {
        let (display, amount) = mask_currency("R$ 1.2a3,4-5");
        assert_eq!(display, "R$ 123,45");
        assert_eq!(amount, Amount::from_cents(12345));
    }

    #[test]
    fn test_mask_empty() {
        assert_eq!(mask_currency(""), (String::new(), Amount::ZERO));
        assert_eq!(mask_currency("R$ ,"), (String::new(), Amount::ZERO));
    }

    #[test]
    fn test_mask_leading_zeros_collapse() {
        assert_eq!(mask_currency("0005").0, "R$ 0,05");
        assert_eq!(mask_currency("000").0, "R$ 0,00");
    }

    #[test]
    fn test_mask_caps_digits() {
        let (display, amount) = mask_currency("1234567890123456789");
        assert_eq!(amount.cents(), 123_456_789_012_345);
        assert_eq!(display, "R$ 1.234.567.890.123,45");
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_currency("R$ 1.234,56").cents(), 123456);
        assert_eq!(parse_currency("R$\u{a0}10,00").cents(), 1000);
        assert_eq!(parse_currency("5,5").cents(), 550);
        assert_eq!(parse_currency("7").cents(), 700);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_currency(""), Amount::ZERO);
        assert_eq!(parse_currency("abc"), Amount::ZERO);
        assert_eq!(parse_currency("R$"), Amount::ZERO);
    }

    #[test]
    fn test_parse_truncates_extra_fraction_digits() {
        assert_eq!(parse_currency("1,239").cents(), 123);
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(Amount::from_cents(-150)), "-R$ 1,50");
    }

    #[test]
    fn test_parse_reads_formatted_negatives() {
        assert_eq!(parse_currency("-R$ 1,50").cents(), -150);
        assert_eq!(parse_currency("-R$ 1.234,56").cents(), -123456);
        assert_eq!(parse_currency("R$ -0,05").cents(), -5);
        assert_eq!(parse_currency("-"), Amount::ZERO);
    }

    #[test]
    fn test_custom_format() {
        let usd = CurrencyFormat {
            symbol: "$".to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
        };
        assert_eq!(usd.mask("123456").0, "$ 1,234.56");
        assert_eq!(usd.parse("$ 1,234.56").cents(), 123456);
    }

    #[test]
    fn test_sum_saturates() {
        let total: Amount = [Amount::from_cents(i64::MAX), Amount::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), i64::MAX);
    }
}
