//! Core trait abstractions for pool operations.
//!
//! [`SwapPool`] covers swaps and the read-only state a trader needs;
//! [`LiquidityPool`] extends it with share minting and burning.  Both are
//! implemented by [`PoolGuard`](crate::pools::PoolGuard), the exclusive
//! handle a caller holds while it settles transfers with a pool.

mod liquidity_pool;
mod swap_pool;

pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
