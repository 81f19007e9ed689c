//! Outcome of a swap operation.

use core::fmt;

use super::{Amount, AssetId};
use crate::error::AmmError;

/// The outcome of a swap: what went in, what came out, and the fee withheld.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in`.
/// - `asset_in != asset_out`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, AssetId, SwapResult};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let result = SwapResult::new(a, b, Amount::new(50), Amount::new(85), Amount::ZERO);
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapResult {
    asset_in: AssetId,
    asset_out: AssetId,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both assets are equal.
    /// - [`AmmError::InvalidQuantity`] if either amount is zero or
    ///   `fee >= amount_in`.
    pub fn new(
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if asset_in == asset_out {
            return Err(AmmError::IdenticalAssets);
        }
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(AmmError::InvalidQuantity("amount_out must be positive"));
        }
        if fee >= amount_in {
            return Err(AmmError::InvalidQuantity("fee must be less than amount_in"));
        }
        Ok(Self {
            asset_in,
            asset_out,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the asset sold.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Returns the asset bought.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee withheld from the input.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult(in={} {}, out={} {}, fee={})",
            self.amount_in, self.asset_in, self.amount_out, self.asset_out, self.fee
        )
    }
}
