//! Asset decimal places.

use super::Amount;
use crate::error::AmmError;

/// Maximum allowed decimal places.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places an asset displays its amounts with.
///
/// Valid range is `0..=18`.  Decimals never affect pool arithmetic, which
/// works on raw [`Amount`]s; they exist to convert whole units into raw
/// units and back.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Decimals};
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.units(5), Amount::new(5_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::MAX
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places, the default for every asset and share.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidConfiguration("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts whole units to raw units.
    ///
    /// Cannot overflow: `u64::MAX * 10^18 < u128::MAX`.
    pub const fn units(&self, whole: u64) -> Amount {
        Amount::new((whole as u128) * self.factor())
    }

    /// Converts raw units to whole units, discarding the fractional part.
    #[must_use]
    pub const fn whole(&self, raw: Amount) -> u128 {
        raw.get() / self.factor()
    }

    const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}
