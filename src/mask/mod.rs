//! Input masks applied to field values as they are typed.
//!
//! Masks are pure string functions: they never fail and never validate
//! beyond stripping characters that cannot belong to the field.

pub mod currency;
pub mod date;

pub use currency::{
    format_currency, mask_currency, parse_currency, Amount, CurrencyFormat, MAX_CURRENCY_DIGITS,
};
pub use date::{mask_date, DATE_DIGITS};
