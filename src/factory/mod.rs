//! Pool creation and lookup.
//!
//! The [`PoolRegistry`] is the single place pools come from.  It keeps at
//! most one pool per unordered asset pair, assigns each pool a creation
//! index (which fixes its account and share-asset identifiers), and
//! registers the share asset in the [`AssetDirectory`](crate::asset::AssetDirectory).
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pairswap::asset::AssetDirectory;
//! use pairswap::config::PoolConfig;
//! use pairswap::domain::{AssetId, Decimals};
//! use pairswap::factory::PoolRegistry;
//!
//! let assets = Arc::new(AssetDirectory::new());
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! assets.create_asset(usdc, "USD Coin", "USDC", Decimals::new(6).expect("ok")).expect("new");
//! assets.create_asset(weth, "Wrapped Ether", "WETH", Decimals::MAX).expect("new");
//!
//! let registry = PoolRegistry::new(assets, PoolConfig::default()).expect("valid");
//! let pool = registry.create_pool(weth, usdc).expect("created");
//! assert_eq!(pool.pair().first(), usdc);
//! assert!(registry.create_pool(usdc, weth).is_err());
//! ```

mod registry;

pub use registry::PoolRegistry;
