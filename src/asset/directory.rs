//! Identifier-to-ledger lookup.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::info;

use super::FungibleAsset;
use crate::domain::{AssetId, Decimals};
use crate::error::AmmError;

/// Resolves [`AssetId`]s to their shared [`FungibleAsset`] ledgers.
///
/// Entries are permanent; an identifier can be registered once.
#[derive(Debug, Default)]
pub struct AssetDirectory {
    assets: RwLock<HashMap<AssetId, Arc<FungibleAsset>>>,
}

impl AssetDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ledger under `id` and registers it.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `id` is in the pool-share namespace.
    /// - [`AmmError::AssetAlreadyRegistered`] if `id` is taken.
    /// - [`AmmError::LockPoisoned`] if the directory lock is poisoned.
    pub fn create_asset(
        &self,
        id: AssetId,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: Decimals,
    ) -> Result<Arc<FungibleAsset>, AmmError> {
        let asset = Arc::new(FungibleAsset::new(id, name, symbol, decimals));
        self.register(Arc::clone(&asset))?;
        Ok(asset)
    }

    /// Registers an existing ledger under its own identifier.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if the identifier is in the pool-share
    ///   namespace ([`AssetId::is_pool_share`]).
    /// - [`AmmError::AssetAlreadyRegistered`] if the identifier is taken.
    /// - [`AmmError::LockPoisoned`] if the directory lock is poisoned.
    pub fn register(&self, asset: Arc<FungibleAsset>) -> Result<(), AmmError> {
        if asset.id().is_pool_share() {
            return Err(AmmError::InvalidAsset("identifier is reserved for pool shares"));
        }
        self.insert(asset)
    }

    /// Registers a pool's share ledger.  Only the pool registry calls this.
    pub(crate) fn register_share(&self, asset: Arc<FungibleAsset>) -> Result<(), AmmError> {
        self.insert(asset)
    }

    fn insert(&self, asset: Arc<FungibleAsset>) -> Result<(), AmmError> {
        let mut assets = self
            .assets
            .write()
            .map_err(|_| AmmError::LockPoisoned("asset directory"))?;
        let id = asset.id();
        if assets.contains_key(&id) {
            return Err(AmmError::AssetAlreadyRegistered);
        }
        info!(asset = %id, symbol = asset.symbol(), "asset registered");
        assets.insert(id, asset);
        Ok(())
    }

    /// Looks up the ledger for `id`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] if `id` is not registered.
    /// - [`AmmError::LockPoisoned`] if the directory lock is poisoned.
    pub fn get(&self, id: &AssetId) -> Result<Arc<FungibleAsset>, AmmError> {
        self.assets
            .read()
            .map_err(|_| AmmError::LockPoisoned("asset directory"))?
            .get(id)
            .cloned()
            .ok_or(AmmError::UnknownAsset)
    }

    /// Returns `true` if `id` is registered.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the directory lock is poisoned.
    pub fn contains(&self, id: &AssetId) -> Result<bool, AmmError> {
        Ok(self
            .assets
            .read()
            .map_err(|_| AmmError::LockPoisoned("asset directory"))?
            .contains_key(id))
    }

    /// Number of registered assets, share assets included.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the directory lock is poisoned.
    pub fn len(&self) -> Result<usize, AmmError> {
        Ok(self
            .assets
            .read()
            .map_err(|_| AmmError::LockPoisoned("asset directory"))?
            .len())
    }

    /// Returns `true` if nothing is registered.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the directory lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, AmmError> {
        Ok(self.len()? == 0)
    }
}
