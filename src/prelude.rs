//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```
//!
//! Brings the domain types, pool traits, configuration, the registry, the
//! router and the error type into scope with one import.

pub use crate::asset::{AssetDirectory, FungibleAsset};
pub use crate::config::PoolConfig;
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, Decimals, FeeTier, Redemption, Side,
    SwapResult,
};
pub use crate::error::{AmmError, Result};
pub use crate::factory::PoolRegistry;
pub use crate::math::CheckedArithmetic;
pub use crate::pools::{Pool, PoolGuard, PoolStatus};
pub use crate::router::Router;
pub use crate::traits::{LiquidityPool, SwapPool};
