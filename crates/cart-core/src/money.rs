//! # Money Module
//!
//! Printable, cent-rounded view of a cart total.
//!
//! ```text
//! 10.10 * 3                         = 30.299999999999997
//! Money::from_amount(30.2999…)      = 3030 cents = "$30.30"
//! ```
//!
//! The numeric `total` in [`crate::ParseResult`] stays an f64; `Money` only
//! exists to present it.

use std::fmt;

/// An amount in whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(i64);

impl Money {
    /// Rounds `amount` to the nearest cent (half away from zero).
    ///
    /// Non-finite amounts map to zero; amounts beyond the `i64` cent range
    /// saturate.
    ///
    /// ```rust
    /// use cart_core::Money;
    ///
    /// assert_eq!(Money::from_amount(15.99).cents(), 1599);
    /// assert_eq!(Money::from_amount(35.5).to_string(), "$35.50");
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money(0);
        }
        Money((amount * 100.0).round() as i64)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }
}

/// Shows money as `$D.CC`. Not localized.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}
