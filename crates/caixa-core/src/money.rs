//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A register that closes on a float drifts:                             │
//! │    abertura 100.00 + vendas 0.10 + suprimento 0.20 ≠ 100.30 exactly    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    10000 + 10 + 20 = 10030 centavos, always exact                      │
//! │    The closing identity (abertura + vendas + suprimentos - sangrias)   │
//! │    holds to the centavo with no tolerance                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The HTTP boundary speaks decimal reais (the frontend sends `100.0`);
//! [`Money::from_reais`] and [`Money::to_reais`] do that conversion in one
//! place so nothing else in the system ever touches a float.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: withdrawals subtract, so intermediate math can dip
///   below zero even though persisted amounts never do
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use caixa_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // R$ 10,99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal reais amount (as it arrives on the wire) into
    /// centavos, rounding to the nearest centavo.
    ///
    /// This is the ONLY place a float becomes money. Everything past the
    /// HTTP boundary is integer math.
    ///
    /// ## Example
    /// ```rust
    /// use caixa_core::money::Money;
    ///
    /// assert_eq!(Money::from_reais(100.0).cents(), 10_000);
    /// assert_eq!(Money::from_reais(0.1).cents(), 10);
    /// assert_eq!(Money::from_reais(19.99).cents(), 1_999);
    /// ```
    #[inline]
    pub fn from_reais(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }

    /// Converts back to decimal reais for the wire.
    ///
    /// Exact for every representable amount: centavos divided by 100 fits
    /// an f64 mantissa for any realistic register balance.
    #[inline]
    pub fn to_reais(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. The frontend formats amounts itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            (self.0 / 100).abs(),
            (self.0 % 100).abs()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summation for report aggregation (`movements.map(|m| m.amount()).sum()`).
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
    }

    #[test]
    fn test_from_reais_rounds_to_centavo() {
        assert_eq!(Money::from_reais(100.0).cents(), 10_000);
        assert_eq!(Money::from_reais(0.1).cents(), 10);
        assert_eq!(Money::from_reais(19.99).cents(), 1_999);
        // 0.1 + 0.2 in f64 is 0.30000000000000004; rounding repairs it
        assert_eq!(Money::from_reais(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_reais(-5.5).cents(), -550);
    }

    #[test]
    fn test_to_reais_round_trips_wire_amounts() {
        assert_eq!(Money::from_cents(10_000).to_reais(), 100.0);
        assert_eq!(Money::from_cents(1_999).to_reais(), 19.99);
        assert_eq!(Money::from_cents(0).to_reais(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "R$ 10,99");
        assert_eq!(format!("{}", Money::from_cents(500)), "R$ 5,00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-R$ 5,50");
        assert_eq!(format!("{}", Money::from_cents(0)), "R$ 0,00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut acc = Money::zero();
        acc += a;
        acc -= b;
        assert_eq!(acc.cents(), 500);
    }

    #[test]
    fn test_sum() {
        let movements = [
            Money::from_cents(3_000),
            Money::from_cents(1_500),
            Money::from_cents(500),
        ];
        let total: Money = movements.into_iter().sum();
        assert_eq!(total.cents(), 5_000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }

    /// The reconciliation identity must hold exactly in centavos, including
    /// amounts that are classic float troublemakers as decimals.
    #[test]
    fn test_closing_identity_is_exact() {
        let opening = Money::from_reais(100.10);
        let sales = Money::from_reais(0.10);
        let supplies = Money::from_reais(0.20);
        let withdrawals = Money::from_reais(0.30);

        // 100.10 + 0.10 + 0.20 - 0.30 = 100.10
        let closing = opening + sales + supplies - withdrawals;
        assert_eq!(closing.cents(), 10_010); // R$ 100,10 on the nose
    }
}
