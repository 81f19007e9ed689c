//! Share issuance trait extending [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! The outstanding share supply only changes through
//! [`LiquidityPool::mint`] and [`LiquidityPool::burn`]:
//!
//! ```text
//! total_shares = Σ share_balance[holder]   for all holders
//! ```
//!
//! The first deposit locks a fixed minimum of shares in the burn sink, so
//! the supply never returns to zero once a pool is active.

use super::SwapPool;
use crate::domain::{AccountId, Amount, Redemption};
use crate::error::AmmError;

/// Pools that issue shares against deposits of both assets.
pub trait LiquidityPool: SwapPool {
    /// Mints shares for the assets deposited since the last
    /// synchronization and sends them to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInitialLiquidity`] if a first deposit does
    ///   not exceed the minimum liquidity.
    /// - [`AmmError::ZeroLiquidityMinted`] if the deposit earns no shares.
    /// - [`AmmError::Overflow`] if arithmetic overflows.
    fn mint(&mut self, recipient: AccountId) -> Result<Amount, AmmError>;

    /// Burns the shares held by the pool's own account and pays the
    /// proportional slice of both reserves to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmountBurned`] if either payout rounds to zero.
    /// - [`AmmError::Overflow`] if arithmetic overflows.
    fn burn(&mut self, recipient: AccountId) -> Result<Redemption, AmmError>;

    /// Returns the outstanding share supply.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the share ledger is poisoned.
    fn total_shares(&self) -> Result<Amount, AmmError>;
}
