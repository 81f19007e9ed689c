//! Unified error types for the pairswap library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant is terminal for the call that produced it:
//! nothing is retried internally and no partial state is left behind.

use thiserror::Error;

/// Errors produced by pools, the registry, the router and asset ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// Both sides of a pair refer to the same asset.
    #[error("a pool requires two distinct assets")]
    IdenticalAssets,

    /// A pool already exists for this unordered pair.
    #[error("a pool already exists for this asset pair")]
    PairAlreadyExists,

    /// No pool exists for this unordered pair.
    #[error("no pool exists for this asset pair")]
    PoolNotFound,

    /// The asset identifier is not registered in the directory.
    #[error("asset is not registered")]
    UnknownAsset,

    /// An asset with the same identifier is already registered.
    #[error("an asset with this identifier is already registered")]
    AssetAlreadyRegistered,

    /// The first deposit does not clear the minimum liquidity lock.
    #[error("initial deposit does not exceed the minimum liquidity")]
    InsufficientInitialLiquidity,

    /// The deposit is too small to mint a single share.
    #[error("deposit is too small to mint any shares")]
    ZeroLiquidityMinted,

    /// The burned shares redeem to zero of at least one asset.
    #[error("burned shares redeem to zero of an asset")]
    ZeroAmountBurned,

    /// The pool did not receive the input the swap declares.
    #[error("swap input is missing or smaller than declared")]
    InsufficientInputAmount,

    /// The swap output rounds down to zero.
    #[error("swap output rounds down to zero")]
    InsufficientOutputAmount,

    /// The swap output would drain the out-reserve.
    #[error("swap output exceeds the available reserve")]
    InsufficientOutputLiquidity,

    /// The constant product would decrease.
    #[error("constant-product invariant violated")]
    InvariantViolation,

    /// The holder's balance does not cover the transfer or burn.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The spender's allowance does not cover the transfer.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// The caller may not perform this operation on the ledger or holder.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    /// An amount argument is invalid.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// An asset argument does not belong to the pool.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The fee rate is unusable.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A lock was poisoned by a panicking holder.
    #[error("lock poisoned: {0}")]
    LockPoisoned(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
