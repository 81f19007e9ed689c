//! # pairswap
//!
//! Constant-product automated market maker for pairs of fungible assets.
//!
//! Anyone may create a pool for an unordered pair of assets, deposit both
//! assets to receive a pool-share asset, redeem shares for a proportional
//! slice of the reserves, or swap one asset for the other at the price set
//! by the reserve ratio (`x · y = k`).
//!
//! Everything is in memory and thread-safe: asset ledgers, the asset
//! directory, the pool registry, and the pools themselves can be shared
//! across threads behind [`Arc`](std::sync::Arc).
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pairswap::prelude::*;
//!
//! // 1. Register two assets
//! let assets = Arc::new(AssetDirectory::new());
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let usdc_ledger = assets
//!     .create_asset(usdc, "USD Coin", "USDC", Decimals::new(6).expect("valid decimals"))
//!     .expect("registered");
//! let weth_ledger = assets
//!     .create_asset(weth, "Wrapped Ether", "WETH", Decimals::MAX)
//!     .expect("registered");
//!
//! // 2. Build a registry with a 0.30% fee and a router over it
//! let config = PoolConfig::default()
//!     .with_fee_tier(FeeTier::TIER_0_30_PERCENT)
//!     .expect("valid config");
//! let registry = Arc::new(PoolRegistry::new(Arc::clone(&assets), config).expect("valid"));
//! let router = Router::new(registry, AccountId::from_bytes([0x70; 32]));
//!
//! // 3. Fund a liquidity provider and let the router spend for them
//! let alice = AccountId::from_bytes([0xa1; 32]);
//! usdc_ledger.mint(alice, Amount::new(10_000_000_000)).expect("mint");
//! weth_ledger.mint(alice, weth_ledger.decimals().units(10)).expect("mint");
//! usdc_ledger.approve(alice, router.account(), Amount::MAX).expect("approve");
//! weth_ledger.approve(alice, router.account(), Amount::MAX).expect("approve");
//!
//! // 4. Seed the pool, then sell 100 USDC for WETH
//! router
//!     .add_liquidity(
//!         alice,
//!         usdc,
//!         weth,
//!         Amount::new(5_000_000_000),
//!         weth_ledger.decimals().units(2),
//!         alice,
//!     )
//!     .expect("deposit");
//! let result = router
//!     .swap(alice, usdc, weth, Amount::new(100_000_000), alice)
//!     .expect("swap");
//!
//! assert!(result.amount_out().get() > 0);
//! assert_eq!(result.fee(), Amount::new(300_000));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  approves the router in each ledger
//! └──────┬──────┘
//!        │ add_liquidity / remove_liquidity / swap
//!        ▼
//! ┌─────────────┐
//! │   Router     │  optimal split, transfers in, unwinds on failure
//! └──────┬──────┘
//!        │ get_or_create / require
//!        ▼
//! ┌─────────────┐
//! │  Registry    │  one pool per unordered pair
//! └──────┬──────┘
//!        │ Pool::lock → PoolGuard
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  mint / burn / swap from balance deltas
//! └──────┬──────┘
//!        │ balance_of / transfer / mint / burn
//!        ▼
//! ┌─────────────┐
//! │   Ledgers    │  FungibleAsset per asset, incl. share assets
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AssetId`](domain::AssetId), [`FeeTier`](domain::FeeTier), etc. |
//! | [`asset`] | [`FungibleAsset`](asset::FungibleAsset) ledgers and the [`AssetDirectory`](asset::AssetDirectory) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): fee, minimum liquidity, share metadata |
//! | [`traits`] | Pool seams: [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool) |
//! | [`pools`] | [`Pool`](pools::Pool), its [`BalanceTracker`](pools::BalanceTracker) and pricing [`curve`](pools::curve) |
//! | [`factory`] | [`PoolRegistry`](factory::PoolRegistry) |
//! | [`router`] | [`Router`](router::Router) |
//! | [`math`] | Checked and 256-bit arithmetic |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`info` for pool and asset creation,
//! `debug` for every settlement, `warn` when the router unwinds) and never
//! installs a subscriber.

pub mod asset;
pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod router;
pub mod traits;
