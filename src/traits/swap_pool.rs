//! Swap trait for executing swaps and querying pool state.
//!
//! [`SwapPool`] is the trading side of a pool.  A swap is settled in two
//! steps:
//!
//! 1. **Transfer**: the caller moves the input asset into the pool's
//!    account.
//! 2. **Execute**: [`SwapPool::swap`] infers the input from the pool's
//!    balance delta, pays the output and resynchronizes the reserves.
//!
//! Both steps must happen while the same exclusive pool handle is held,
//! otherwise another caller could claim the delta.
//!
//! # Fee Invariant
//!
//! The fee is withheld from the input before pricing:
//!
//! ```text
//! amount_out = in × (10_000 − fee_bps) × reserve_out
//!            / (reserve_in × 10_000 + in × (10_000 − fee_bps))
//! ```
//!
//! and the fee-adjusted product of the balances never decreases.

use crate::domain::{AccountId, Amount, AssetId, AssetPair, FeeTier, SwapResult};
use crate::error::AmmError;

/// Trading operations of a two-asset pool.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common error
/// variants include:
///
/// - [`AmmError::InsufficientInputAmount`]: the input was not transferred
/// - [`AmmError::InsufficientOutputLiquidity`]: reserves cannot pay out
/// - [`AmmError::InvariantViolation`]: the product would decrease
/// - [`AmmError::Overflow`]: arithmetic overflow during calculation
pub trait SwapPool {
    /// Executes a swap whose input has already been transferred into the
    /// pool.
    ///
    /// Exactly one of `amount_a_in` and `amount_b_in` must be non-zero; it
    /// names the side sold.  The output is sent to `recipient`.  Either
    /// every side effect happens or none does.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInputAmount`] if both inputs are zero or
    ///   the pool received less than declared.
    /// - [`AmmError::InvalidQuantity`] if both inputs are non-zero.
    /// - [`AmmError::InsufficientOutputLiquidity`] if the pool cannot pay.
    /// - [`AmmError::InsufficientOutputAmount`] if the output rounds to zero.
    /// - [`AmmError::InvariantViolation`] if the product would decrease.
    fn swap(
        &mut self,
        amount_a_in: Amount,
        amount_b_in: Amount,
        recipient: AccountId,
    ) -> Result<SwapResult, AmmError>;

    /// Returns what selling `amount_in` of `asset_in` would pay out right now.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset_in` is not part of the pair.
    /// - [`AmmError::InsufficientOutputLiquidity`] if a reserve is empty.
    fn quote_out(&self, asset_in: &AssetId, amount_in: Amount) -> Result<Amount, AmmError>;

    /// Returns the last-synchronized reserves in canonical pair order.
    #[must_use]
    fn reserves(&self) -> (Amount, Amount);

    /// Returns the canonically ordered asset pair.
    #[must_use]
    fn pair(&self) -> &AssetPair;

    /// Returns the fee tier applied to swaps.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;
}
