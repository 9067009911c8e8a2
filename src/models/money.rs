//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Simulated quotes are generated as floats and rounded once on entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Represents a monetary amount stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use investpro::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a float, rounding to the nearest cent
    ///
    /// # Examples
    /// ```
    /// use investpro::models::Money;
    /// assert_eq!(Money::from_float(445.667).cents(), 44567);
    /// ```
    pub fn from_float(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Amount as a float, for ratios and percentages
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }

    /// Format with a currency symbol and thousands separators ("$125,928.30")
    pub fn format_grouped(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.dollars().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        format!("{}{}{}.{:02}", sign, symbol, grouped, self.cents_part())
    }

    /// Format a signed, grouped change: "+$2.34" / "-$1,204.50"
    pub fn format_signed(&self, symbol: &str) -> String {
        if self.is_negative() {
            self.format_grouped(symbol)
        } else {
            format!("+{}", self.format_grouped(symbol))
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Format a percentage with an explicit sign and two decimals ("+0.53%")
pub fn format_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_float_rounds() {
        assert_eq!(Money::from_float(178.454).cents(), 17845);
        assert_eq!(Money::from_float(178.455).cents(), 17846);
        assert_eq!(Money::from_float(-1.449).cents(), -145);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(Money::from_cents(12592830).format_grouped("$"), "$125,928.30");
        assert_eq!(Money::from_cents(99900).format_grouped("$"), "$999.00");
        assert_eq!(Money::from_cents(100000).format_grouped("$"), "$1,000.00");
        assert_eq!(Money::from_cents(-531795).format_grouped("$"), "-$5,317.95");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(Money::from_cents(234).format_signed("$"), "+$2.34");
        assert_eq!(Money::from_cents(-145).format_signed("$"), "-$1.45");
        assert_eq!(Money::zero().format_signed("$"), "+$0.00");
        assert_eq!(Money::from_cents(531795).format_signed("$"), "+$5,317.95");
        assert_eq!(Money::from_cents(-120450).format_signed("$"), "-$1,204.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.53), "+0.53%");
        assert_eq!(format_percent(-1.854), "-1.85%");
        assert_eq!(format_percent(0.0), "+0.00%");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);

        let total: Money = vec![a, b, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), 1501);
    }
}
