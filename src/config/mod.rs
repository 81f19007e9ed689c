//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint every pool in a registry is
//! created from: the swap fee, the minimum-liquidity lock and the metadata of
//! the share asset each pool issues.

mod pool_config;

pub use pool_config::{PoolConfig, DEFAULT_MINIMUM_LIQUIDITY};
