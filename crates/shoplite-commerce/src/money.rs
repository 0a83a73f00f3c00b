//! Money type for storefront amounts.
//!
//! Amounts are carried as un-rounded floating point and only rounded to
//! two decimal places at presentation boundaries. Summary and confirmation
//! views therefore agree with each other instead of compounding per-line
//! rounding error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A USD amount in dollars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
pub struct Money(f64);

impl Money {
    /// Create a Money value from a dollar amount.
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// A zero amount.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// The un-rounded dollar amount.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// The amount rounded to cents, for presentation only.
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Take a percentage of this amount (e.g. `percentage(8.0)` for tax).
    pub fn percentage(&self, percent: f64) -> Money {
        Money(self.0 * percent / 100.0)
    }

    /// Compare against another amount within a tolerance.
    pub fn approx_eq(&self, other: Money, tolerance: f64) -> bool {
        (self.0 - other.0).abs() < tolerance
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.rounded())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0 * f64::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_rounds_to_cents() {
        let m = Money::new(15.998);
        assert_eq!(m.to_string(), "$16.00");
        // The accumulator itself stays un-rounded.
        assert!((m.amount() - 15.998).abs() < 1e-9);
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(10.0);
        let b = Money::new(5.5);
        assert!((a + b).approx_eq(Money::new(15.5), 1e-9));
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::new(10.0);
        let b = Money::new(3.0);
        assert!((a - b).approx_eq(Money::new(7.0), 1e-9));
    }

    #[test]
    fn test_money_quantity_multiply() {
        let unit = Money::new(79.99);
        let line = unit * 2;
        assert!(line.approx_eq(Money::new(159.98), 1e-9));
    }

    #[test]
    fn test_money_percentage() {
        let subtotal = Money::new(159.98);
        let tax = subtotal.percentage(8.0);
        assert!(tax.approx_eq(Money::new(12.7984), 1e-9));
        assert_eq!(tax.to_string(), "$12.80");
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::new(1.1), Money::new(2.2), Money::new(3.3)]
            .into_iter()
            .sum();
        assert!(total.approx_eq(Money::new(6.6), 1e-9));
    }

    #[test]
    fn test_display_amount() {
        assert_eq!(Money::new(9.5).display_amount(), "9.50");
    }
}
