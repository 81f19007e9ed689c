//! Basis-point representation for rates.

use core::fmt;

use super::Amount;
use crate::error::AmmError;

/// Denominator that represents 100%.
pub(crate) const BPS_DENOMINATOR: u32 = 10_000;

/// A rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values can be constructed; values above 10 000 are rejected
/// wherever a rate is validated (see [`PoolConfig`](crate::config::PoolConfig)).
///
/// # Examples
///
/// ```
/// use pairswap::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert_eq!(bp.complement().get(), 9_970);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_DENOMINATOR
    }

    /// Returns `10_000 - self`, the share of an amount that is *kept*.
    ///
    /// Saturates at zero for out-of-range values.
    pub const fn complement(&self) -> Self {
        Self(BPS_DENOMINATOR.saturating_sub(self.0))
    }

    /// Computes `floor(amount * self / 10_000)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate multiplication overflows.
    pub const fn apply(&self, amount: Amount) -> crate::error::Result<Amount> {
        match amount.get().checked_mul(self.0 as u128) {
            Some(product) => Ok(Amount::new(product / BPS_DENOMINATOR as u128)),
            None => Err(AmmError::Overflow("basis points apply overflow")),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
        assert_eq!(BasisPoints::default(), BasisPoints::ZERO);
    }

    #[test]
    fn valid_percent_range() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn complement_of_thirty() {
        assert_eq!(BasisPoints::new(30).complement(), BasisPoints::new(9_970));
        assert_eq!(BasisPoints::ZERO.complement(), BasisPoints::MAX_PERCENT);
    }

    #[test]
    fn complement_saturates() {
        assert_eq!(BasisPoints::new(20_000).complement(), BasisPoints::ZERO);
    }

    #[test]
    fn apply_floors() {
        let Ok(fee) = BasisPoints::new(30).apply(Amount::new(1_000_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::new(3_000));

        // 30bp of 1 = 0.003 → 0
        let Ok(dust) = BasisPoints::new(30).apply(Amount::new(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(dust, Amount::ZERO);
    }

    #[test]
    fn apply_overflow() {
        assert!(BasisPoints::new(u32::MAX).apply(Amount::MAX).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }
}
