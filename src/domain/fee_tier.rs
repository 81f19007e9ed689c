//! Swap fee rate built on [`BasisPoints`].

use core::fmt;

use super::{Amount, BasisPoints};

/// The swap fee charged on the input side of every swap.
///
/// The fee is withheld from the input before pricing and stays in the
/// pool, so it accrues to share holders.  [`FeeTier::NONE`] reproduces
/// the pure `x · y = k` pricing.
///
/// # Examples
///
/// ```
/// use pairswap::domain::FeeTier;
///
/// assert!(FeeTier::NONE.is_free());
/// assert_eq!(FeeTier::TIER_0_30_PERCENT.basis_points().get(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// Fee-free swaps.
    pub const NONE: Self = Self(BasisPoints::ZERO);

    /// 0.05% fee, typical for correlated pairs (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee, the classic constant-product rate (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee for exotic pairs (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` if no fee is charged.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.0.get() == 0
    }

    /// Multiplier applied to the input amount, in basis points
    /// (`10_000 - fee`).
    #[must_use]
    pub const fn input_multiplier(&self) -> u128 {
        self.0.complement().get() as u128
    }

    /// Fee withheld from `amount_in`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if the
    /// intermediate multiplication overflows.
    pub const fn fee_on(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        self.0.apply(amount_in)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
