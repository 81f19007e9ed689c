//! The constant-product pair and its supporting pieces.
//!
//! | Item | Role |
//! |------|------|
//! | [`Pool`] | Pair state: two reserves, a share asset, the pool lock |
//! | [`PoolGuard`] | Exclusive handle implementing [`SwapPool`](crate::traits::SwapPool) and [`LiquidityPool`](crate::traits::LiquidityPool) |
//! | [`BalanceTracker`] | Reserve snapshot, delta and invariant checks |
//! | [`curve`] | Pure pricing formulas shared with the router |

mod balance_tracker;
pub mod curve;
mod pair;

#[cfg(test)]
mod proptest_properties;

pub use balance_tracker::{BalanceTracker, Snapshot};
pub use pair::{Pool, PoolGuard, PoolStatus};
