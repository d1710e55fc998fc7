//! US-dollar display amounts.
//!
//! Statement amounts are integer cents. They are shown in whole dollars:
//! the cent remainder is dropped before formatting, so every rendered
//! amount ends in `.00`.

use num_format::{Locale, ToFormattedString};
use rust_decimal::Decimal;
use std::fmt;

/// A whole-dollar amount rendered in US currency style, e.g. `$1,730.00`.
///
/// # Examples
///
/// ```
/// use theater_statement::Usd;
///
/// assert_eq!(Usd::from_cents(173_000).to_string(), "$1,730.00");
/// assert_eq!(Usd::from_cents(12_345).to_string(), "$123.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Usd(Decimal);

impl Usd {
    /// Number of decimal places shown.
    pub const SCALE: u32 = 2;

    /// Truncates `cents` to whole dollars, kept at display scale.
    pub fn from_cents(cents: u64) -> Self {
        let whole_cents = i128::from(cents / 100) * 100;
        Usd(Decimal::from_i128_with_scale(whole_cents, Self::SCALE))
    }

    /// The dollar value, always with a zero cent part.
    pub fn dollars(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        value.rescale(Self::SCALE);
        let units = value.mantissa();
        write!(
            f,
            "${}.{:02}",
            (units / 100).to_formatted_string(&Locale::en),
            units % 100
        )
    }
}

/// Renders a cent amount as a statement currency string.
pub fn usd(cents: u64) -> String {
    Usd::from_cents(cents).to_string()
}
