//! Fungible asset ledgers.
//!
//! A [`FungibleAsset`] keeps balances and allowances for one asset; the
//! [`AssetDirectory`] maps identifiers to ledgers so pools and the router can
//! resolve the assets a pair trades and the share asset it issues.

mod directory;
mod fungible;

pub use directory::AssetDirectory;
pub use fungible::FungibleAsset;
