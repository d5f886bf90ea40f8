//! # Money Module
//!
//! Provides the `Money` type for prices in the cart and on listings.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  In floating point:   0.1 + 0.2 = 0.30000000000000004                  │
//! │                                                                         │
//! │  Integer cents:       10 + 20 = 30                                      │
//! │                                                                         │
//! │  Only display converts to major units, and display is per locale:      │
//! │    pt-BR  →  R$ 1.234,56                                                │
//! │    en-US  →  $1,234.56                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mylisting_core::money::Money;
//! use mylisting_core::Language;
//!
//! let price = Money::from_cents(123456);
//! assert_eq!(price.format(Language::EnUs), "$1,234.56");
//! assert_eq!(price.format(Language::PtBr), "R$ 1.234,56");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::i18n::Language;

/// A monetary value in the smallest currency unit (cents).
///
/// Signed so that a malformed negative price can be represented long
/// enough to be rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ```rust
    /// use mylisting_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the amount for display in the given language.
    pub fn format(&self, language: Language) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let major = (self.0 / 100).unsigned_abs();
        let minor = (self.0 % 100).unsigned_abs();

        match language {
            Language::PtBr => format!("{}R$ {},{:02}", sign, group_thousands(major, '.'), minor),
            Language::EnUs => format!("{}${}.{:02}", sign, group_thousands(major, ','), minor),
        }
    }
}

/// Inserts `sep` every three digits from the right.
fn group_thousands(value: u64, sep: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }

    out
}

/// Debug-friendly display (en-US style). Views use [`Money::format`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Language::EnUs))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_en_us() {
        assert_eq!(Money::from_cents(1099).format(Language::EnUs), "$10.99");
        assert_eq!(Money::from_cents(0).format(Language::EnUs), "$0.00");
        assert_eq!(Money::from_cents(123456789).format(Language::EnUs), "$1,234,567.89");
        assert_eq!(Money::from_cents(-550).format(Language::EnUs), "-$5.50");
    }

    #[test]
    fn test_format_pt_br() {
        assert_eq!(Money::from_cents(1099).format(Language::PtBr), "R$ 10,99");
        assert_eq!(Money::from_cents(100000).format(Language::PtBr), "R$ 1.000,00");
        assert_eq!(Money::from_cents(5).format(Language::PtBr), "R$ 0,05");
    }

    #[test]
    fn test_display_matches_en_us() {
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a * 3).cents(), 3000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, ','), "0");
        assert_eq!(group_thousands(999, ','), "999");
        assert_eq!(group_thousands(1000, ','), "1,000");
        assert_eq!(group_thousands(1234567, '.'), "1.234.567");
    }
}
