//! Integer money and discount rates.
//!
//! Amounts are kept in minor units (1/100 of a rupiah) so discounting whole-rupiah
//! prices never goes through floating point.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

const MINOR_PER_MAJOR: u64 = 100;
const BPS_PER_UNIT: u64 = 10_000;

/// Non-negative amount of money in minor units.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Exact amount in minor units.
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Whole-rupiah amount, or `None` when it does not fit in minor units.
    pub const fn checked_from_major(major: u64) -> Option<Self> {
        match major.checked_mul(MINOR_PER_MAJOR) {
            Some(minor) => Some(Self(minor)),
            None => None,
        }
    }

    pub const fn minor(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Decimal amount in rupiah (e.g. `28500.0`).
    pub fn as_major_f64(self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    /// Amount rounded half-to-even to whole rupiah.
    pub fn round_to_major(self) -> u64 {
        round_half_even(u128::from(self.0), u128::from(MINOR_PER_MAJOR)) as u64
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Money {}

/// Sums saturate at `u64::MAX` minor units.
impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl<'a> core::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Discount fraction in basis points (1 bp = 0.01%).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(u16);

impl DiscountRate {
    pub fn from_bps(bps: u16) -> DomainResult<Self> {
        if u64::from(bps) > BPS_PER_UNIT {
            return Err(DomainError::validation(format!(
                "discount rate cannot exceed 100% (got {bps} bp)"
            )));
        }
        Ok(Self(bps))
    }

    /// Whole-percent rate, clamped to 100%.
    pub const fn from_percent(percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self(percent as u16 * 100)
    }

    pub const fn bps(self) -> u16 {
        self.0
    }

    /// Rate as a fraction in `[0, 1]` (e.g. `0.05`).
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / BPS_PER_UNIT as f64
    }

    /// `amount * (1 - rate)`, rounded half-to-even to the nearest minor unit.
    pub fn apply(self, amount: Money) -> Money {
        let keep = u128::from(BPS_PER_UNIT - u64::from(self.0));
        let scaled = u128::from(amount.0) * keep;
        // Never larger than `amount`, so it fits back into u64.
        Money(round_half_even(scaled, u128::from(BPS_PER_UNIT)) as u64)
    }
}

impl ValueObject for DiscountRate {}

impl core::fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}

fn round_half_even(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let twice = remainder * 2;
    if twice > denominator || (twice == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
