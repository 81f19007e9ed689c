//! Append-only registry of pools keyed by unordered asset pair.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use tracing::info;

use crate::asset::AssetDirectory;
use crate::config::PoolConfig;
use crate::domain::{AssetId, AssetPair};
use crate::error::AmmError;
use crate::pools::Pool;

#[derive(Debug, Default)]
struct PoolTable {
    by_pair: HashMap<AssetPair, Arc<Pool>>,
    ordered: Vec<Arc<Pool>>,
}

/// Maps each unordered asset pair to at most one [`Pool`].
///
/// Entries are permanent.  The registry lock is held only for the lookup or
/// insert itself and never while a pool lock is held.
#[derive(Debug)]
pub struct PoolRegistry {
    assets: Arc<AssetDirectory>,
    config: PoolConfig,
    pools: RwLock<PoolTable>,
}

impl PoolRegistry {
    /// Creates an empty registry whose pools resolve assets through
    /// `assets` and are all created with `config`.
    ///
    /// # Errors
    ///
    /// Any [`PoolConfig::validate`] error.
    pub fn new(assets: Arc<AssetDirectory>, config: PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            assets,
            config,
            pools: RwLock::new(PoolTable::default()),
        })
    }

    /// Directory the registry resolves assets through.
    #[must_use]
    pub const fn assets(&self) -> &Arc<AssetDirectory> {
        &self.assets
    }

    /// Configuration applied to every pool.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    fn table(&self) -> Result<RwLockReadGuard<'_, PoolTable>, AmmError> {
        self.pools
            .read()
            .map_err(|_| AmmError::LockPoisoned("pool registry"))
    }

    /// Creates the pool for `(x, y)`.  `(y, x)` names the same pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `x == y`.
    /// - [`AmmError::UnknownAsset`] if either asset is not in the directory.
    /// - [`AmmError::PairAlreadyExists`] if the pair already has a pool.
    /// - [`AmmError::LockPoisoned`] if a registry or directory lock is
    ///   poisoned.
    pub fn create_pool(&self, x: AssetId, y: AssetId) -> Result<Arc<Pool>, AmmError> {
        let pair = AssetPair::new(x, y)?;
        let asset_x = self.assets.get(&x)?;
        let asset_y = self.assets.get(&y)?;

        let mut table = self
            .pools
            .write()
            .map_err(|_| AmmError::LockPoisoned("pool registry"))?;
        if table.by_pair.contains_key(&pair) {
            return Err(AmmError::PairAlreadyExists);
        }
        let mut index = u64::try_from(table.ordered.len())
            .map_err(|_| AmmError::Overflow("pool index overflow"))?;
        // another registry over the same directory may own this index
        let pool = loop {
            let candidate = Arc::new(Pool::new(
                index,
                Arc::clone(&asset_x),
                Arc::clone(&asset_y),
                self.config.clone(),
            )?);
            match self.assets.register_share(Arc::clone(candidate.share_asset())) {
                Ok(()) => break candidate,
                Err(AmmError::AssetAlreadyRegistered) => {
                    index = index
                        .checked_add(1)
                        .ok_or(AmmError::Overflow("pool index overflow"))?;
                }
                Err(err) => return Err(err),
            }
        };

        table.by_pair.insert(pair, Arc::clone(&pool));
        table.ordered.push(Arc::clone(&pool));
        info!(
            index,
            pool = %pool.account(),
            asset_a = %pair.first(),
            asset_b = %pair.second(),
            share = %pool.share_asset().id(),
            fee = %self.config.fee_tier(),
            "pool created"
        );
        Ok(pool)
    }

    /// Looks up the pool for `(x, y)` in either order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `x == y`.
    /// - [`AmmError::LockPoisoned`] if the registry lock is poisoned.
    pub fn get(&self, x: AssetId, y: AssetId) -> Result<Option<Arc<Pool>>, AmmError> {
        let pair = AssetPair::new(x, y)?;
        Ok(self.table()?.by_pair.get(&pair).cloned())
    }

    /// Looks up the pool for `(x, y)`, creating it if absent.
    ///
    /// # Errors
    ///
    /// Same as [`PoolRegistry::create_pool`], except that an existing pair
    /// is returned instead of rejected.
    pub fn get_or_create(&self, x: AssetId, y: AssetId) -> Result<Arc<Pool>, AmmError> {
        if let Some(pool) = self.get(x, y)? {
            return Ok(pool);
        }
        match self.create_pool(x, y) {
            // another caller created it between the lookup and the insert
            Err(AmmError::PairAlreadyExists) => self.get(x, y)?.ok_or(AmmError::PoolNotFound),
            created => created,
        }
    }

    /// Looks up the pool for `(x, y)`, failing if there is none.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pair has no pool.
    /// - [`AmmError::IdenticalAssets`] if `x == y`.
    pub fn require(&self, x: AssetId, y: AssetId) -> Result<Arc<Pool>, AmmError> {
        self.get(x, y)?.ok_or(AmmError::PoolNotFound)
    }

    /// Number of pools created so far.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the registry lock is poisoned.
    pub fn pool_count(&self) -> Result<usize, AmmError> {
        Ok(self.table()?.ordered.len())
    }

    /// The `index`-th pool this registry created.
    ///
    /// Usually equal to [`Pool::index`]; the two differ when another
    /// registry shares the asset directory.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the registry lock is poisoned.
    pub fn pool_at(&self, index: usize) -> Result<Option<Arc<Pool>>, AmmError> {
        Ok(self.table()?.ordered.get(index).cloned())
    }
}
