//! Constant-product pair over two fungible assets.
//!
//! A [`Pool`] owns an account in both asset ledgers and issues its own share
//! asset.  Callers never tell the pool how much they deposited: they move
//! assets into [`Pool::account`] and the pool infers the amounts from its
//! balance deltas (see [`BalanceTracker`]).
//!
//! # Locking
//!
//! All mutations go through a [`PoolGuard`], the exclusive handle returned
//! by [`Pool::lock`].  A caller that transfers assets in and then calls
//! `mint`/`swap` must hold the same guard across both steps.  The guard
//! reads and writes asset ledgers one at a time and never while holding
//! another ledger.
//!
//! # Share math
//!
//! ```text
//! first deposit:  root   = ⌊√(Δa × Δb)⌋,   root > MIN
//!                 burn sink ← MIN,  recipient ← root − MIN
//! later deposit:  shares = min(⌊Δa × T / Ra⌋, ⌊Δb × T / Rb⌋)
//! burn:           out_x  = ⌊liquidity × Rx / T⌋
//! ```

use core::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use super::balance_tracker::{BalanceTracker, Snapshot};
use super::curve;
use crate::asset::FungibleAsset;
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, AssetPair, FeeTier, Redemption, Side, SwapResult};
use crate::error::AmmError;
use crate::math::{mul_div, sqrt_product, CheckedArithmetic};
use crate::traits::{LiquidityPool, SwapPool};

/// Lifecycle stage of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolStatus {
    /// Created, no shares issued yet.
    Uninitialized,
    /// The first deposit has been minted.  Terminal.
    Active,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Active => write!(f, "active"),
        }
    }
}

/// A constant-product pool for one unordered asset pair.
#[derive(Debug)]
pub struct Pool {
    index: u64,
    account: AccountId,
    pair: AssetPair,
    asset_a: Arc<FungibleAsset>,
    asset_b: Arc<FungibleAsset>,
    shares: Arc<FungibleAsset>,
    config: PoolConfig,
    tracker: Mutex<BalanceTracker>,
}

impl Pool {
    /// Creates an empty pool for `asset_x` and `asset_y`, in either order.
    ///
    /// The pool's account is [`AccountId::pool(index)`](AccountId::pool) and
    /// its share asset is [`AssetId::pool_share(index)`](AssetId::pool_share),
    /// described by the share metadata in `config`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both ledgers share an identifier.
    /// - Any [`PoolConfig::validate`] error.
    pub fn new(
        index: u64,
        asset_x: Arc<FungibleAsset>,
        asset_y: Arc<FungibleAsset>,
        config: PoolConfig,
    ) -> Result<Self, AmmError> {
        config.validate()?;
        let pair = AssetPair::new(asset_x.id(), asset_y.id())?;
        let (asset_a, asset_b) = if asset_x.id() == pair.first() {
            (asset_x, asset_y)
        } else {
            (asset_y, asset_x)
        };
        let account = AccountId::pool(index);
        let shares = Arc::new(
            FungibleAsset::new(
                AssetId::pool_share(index),
                config.share_name(),
                config.share_symbol(),
                config.share_decimals(),
            )
            .with_mint_authority(account),
        );
        Ok(Self {
            index,
            account,
            pair,
            asset_a,
            asset_b,
            shares,
            config,
            tracker: Mutex::new(BalanceTracker::new()),
        })
    }

    /// Takes the pool's exclusive lock.
    ///
    /// Blocks while another caller holds it.  Must not be called again on
    /// the same thread while a guard is alive.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if a previous holder panicked.
    pub fn lock(&self) -> Result<PoolGuard<'_>, AmmError> {
        let tracker = self
            .tracker
            .lock()
            .map_err(|_| AmmError::LockPoisoned("pool"))?;
        Ok(PoolGuard {
            pool: self,
            tracker,
        })
    }

    /// Index the pool account and share asset identifiers derive from.
    pub const fn index(&self) -> u64 {
        self.index
    }

    /// The pool's holder identity in every ledger.
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Canonically ordered asset pair.
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Configuration the pool was created with.
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Ledger of the pair's first asset.
    pub const fn asset_a(&self) -> &Arc<FungibleAsset> {
        &self.asset_a
    }

    /// Ledger of the pair's second asset.
    pub const fn asset_b(&self) -> &Arc<FungibleAsset> {
        &self.asset_b
    }

    /// Ledger of the asset on `side`.
    pub const fn asset(&self, side: Side) -> &Arc<FungibleAsset> {
        match side {
            Side::A => &self.asset_a,
            Side::B => &self.asset_b,
        }
    }

    /// Ledger of the share asset this pool issues.
    ///
    /// Its mint authority is the pool account, so only [`LiquidityPool::mint`]
    /// and [`LiquidityPool::burn`] change the share supply.
    pub const fn share_asset(&self) -> &Arc<FungibleAsset> {
        &self.shares
    }

    /// Last-synchronized reserves in canonical pair order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the pool lock is poisoned.
    pub fn get_reserves(&self) -> Result<(Amount, Amount), AmmError> {
        Ok(self.lock()?.reserves())
    }

    /// Outstanding share supply.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the share ledger is poisoned.
    pub fn total_shares(&self) -> Result<Amount, AmmError> {
        self.shares.total_supply()
    }

    /// Current lifecycle stage.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the share ledger is poisoned.
    pub fn status(&self) -> Result<PoolStatus, AmmError> {
        if self.total_shares()?.is_zero() {
            Ok(PoolStatus::Uninitialized)
        } else {
            Ok(PoolStatus::Active)
        }
    }

    /// Locks the pool and mints shares for the pending deposit.
    ///
    /// Only safe when the deposit was transferred in beforehand by the same
    /// caller and nothing else can interleave; otherwise use [`Pool::lock`].
    ///
    /// # Errors
    ///
    /// See [`LiquidityPool::mint`].
    pub fn mint(&self, recipient: AccountId) -> Result<Amount, AmmError> {
        self.lock()?.mint(recipient)
    }

    /// Locks the pool and burns the shares it holds.
    ///
    /// # Errors
    ///
    /// See [`LiquidityPool::burn`].
    pub fn burn(&self, recipient: AccountId) -> Result<Redemption, AmmError> {
        self.lock()?.burn(recipient)
    }

    /// Locks the pool and executes a swap.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap(
        &self,
        amount_a_in: Amount,
        amount_b_in: Amount,
        recipient: AccountId,
    ) -> Result<SwapResult, AmmError> {
        self.lock()?.swap(amount_a_in, amount_b_in, recipient)
    }

    /// Locks the pool and forces the reserves to the actual balances.
    ///
    /// # Errors
    ///
    /// See [`PoolGuard::sync`].
    pub fn sync(&self) -> Result<(Amount, Amount), AmmError> {
        self.lock()?.sync()
    }

    /// Locks the pool and sends any balance above the reserves to
    /// `recipient`.
    ///
    /// # Errors
    ///
    /// See [`PoolGuard::skim`].
    pub fn skim(&self, recipient: AccountId) -> Result<(Amount, Amount), AmmError> {
        self.lock()?.skim(recipient)
    }
}

/// Exclusive access to a [`Pool`].
///
/// Releases the lock when dropped.
#[derive(Debug)]
pub struct PoolGuard<'a> {
    pool: &'a Pool,
    tracker: MutexGuard<'a, BalanceTracker>,
}

impl PoolGuard<'_> {
    /// The locked pool.
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        self.pool
    }

    fn snapshot(&self) -> Result<Snapshot, AmmError> {
        Snapshot::read(&self.pool.asset_a, &self.pool.asset_b, &self.pool.account)
    }

    /// Forces the reserves to the pool's actual balances, absorbing any
    /// donation, and returns the new reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if a ledger lock is poisoned.
    pub fn sync(&mut self) -> Result<(Amount, Amount), AmmError> {
        let snapshot = self.snapshot()?;
        self.tracker.sync(&snapshot);
        let (reserve_a, reserve_b) = self.tracker.reserves();
        debug!(pool = %self.pool.account, reserve_a = %reserve_a, reserve_b = %reserve_b, "sync");
        Ok((reserve_a, reserve_b))
    }

    /// Sends each balance held beyond its reserve to `recipient` and
    /// returns the amounts sent.  Reserves are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if a ledger lock is poisoned.
    pub fn skim(&mut self, recipient: AccountId) -> Result<(Amount, Amount), AmmError> {
        let snapshot = self.snapshot()?;
        let (excess_a, excess_b) = self.tracker.excess(&snapshot);
        if !excess_a.is_zero() {
            self.pool
                .asset_a
                .pay_out(self.pool.account, recipient, excess_a)?;
        }
        if !excess_b.is_zero() {
            self.pool
                .asset_b
                .pay_out(self.pool.account, recipient, excess_b)?;
        }
        debug!(pool = %self.pool.account, to = %recipient, excess_a = %excess_a, excess_b = %excess_b, "skim");
        Ok((excess_a, excess_b))
    }
}

impl SwapPool for PoolGuard<'_> {
    fn swap(
        &mut self,
        amount_a_in: Amount,
        amount_b_in: Amount,
        recipient: AccountId,
    ) -> Result<SwapResult, AmmError> {
        let (side_in, declared) = match (amount_a_in.is_zero(), amount_b_in.is_zero()) {
            (false, true) => (Side::A, amount_a_in),
            (true, false) => (Side::B, amount_b_in),
            (true, true) => return Err(AmmError::InsufficientInputAmount),
            (false, false) => {
                return Err(AmmError::InvalidQuantity(
                    "exactly one swap input must be non-zero",
                ))
            }
        };
        let side_out = side_in.other();
        let fee_tier = self.pool.config.fee_tier();

        let snapshot = self.snapshot()?;
        let reserve_in = self.tracker.reserve(side_in);
        let reserve_out = self.tracker.reserve(side_out);
        let received = snapshot.on(side_in).safe_sub(&reserve_in)?;
        if received < declared {
            return Err(AmmError::InsufficientInputAmount);
        }

        let amount_out = curve::amount_out(declared, reserve_in, reserve_out, fee_tier)?;
        if amount_out >= reserve_out {
            return Err(AmmError::InsufficientOutputLiquidity);
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }

        let projected = snapshot.after_payout(side_out, amount_out)?;
        self.tracker
            .ensure_k_not_decreased(&projected, side_out, amount_out, fee_tier)?;
        let fee = fee_tier.fee_on(declared)?;
        let result = SwapResult::new(
            self.pool.pair.asset(side_in),
            self.pool.pair.asset(side_out),
            declared,
            amount_out,
            fee,
        )?;

        self.pool
            .asset(side_out)
            .pay_out(self.pool.account, recipient, amount_out)?;
        let settled = self.snapshot()?;
        self.tracker.sync(&settled);

        let (reserve_a, reserve_b) = self.tracker.reserves();
        debug!(
            pool = %self.pool.account,
            asset_in = %result.asset_in(),
            amount_in = %declared,
            amount_out = %amount_out,
            fee = %fee,
            reserve_a = %reserve_a,
            reserve_b = %reserve_b,
            "swap"
        );
        Ok(result)
    }

    fn quote_out(&self, asset_in: &AssetId, amount_in: Amount) -> Result<Amount, AmmError> {
        let side_in = self.pool.pair.side_of(asset_in)?;
        curve::amount_out(
            amount_in,
            self.tracker.reserve(side_in),
            self.tracker.reserve(side_in.other()),
            self.pool.config.fee_tier(),
        )
    }

    fn reserves(&self) -> (Amount, Amount) {
        self.tracker.reserves()
    }

    fn pair(&self) -> &AssetPair {
        &self.pool.pair
    }

    fn fee_tier(&self) -> FeeTier {
        self.pool.config.fee_tier()
    }
}

impl LiquidityPool for PoolGuard<'_> {
    fn mint(&mut self, recipient: AccountId) -> Result<Amount, AmmError> {
        let snapshot = self.snapshot()?;
        let (amount_a, amount_b) = self.tracker.deltas(&snapshot)?;
        let total = self.pool.shares.total_supply()?;
        let minimum = self.pool.config.minimum_liquidity();

        let (issued, locked) = if total.is_zero() {
            let root = sqrt_product(amount_a, amount_b);
            if root <= minimum {
                return Err(AmmError::InsufficientInitialLiquidity);
            }
            (root.safe_sub(&minimum)?, minimum)
        } else {
            let (reserve_a, reserve_b) = self.tracker.reserves();
            let by_a = mul_div(amount_a, total, reserve_a)?;
            let by_b = mul_div(amount_b, total, reserve_b)?;
            (by_a.min(by_b), Amount::ZERO)
        };
        if issued.is_zero() {
            return Err(AmmError::ZeroLiquidityMinted);
        }
        let supply = total.safe_add(&locked)?.safe_add(&issued)?;

        if !locked.is_zero() {
            self.pool.shares.issue(AccountId::BURN, locked)?;
        }
        self.pool.shares.issue(recipient, issued)?;
        self.tracker.sync(&snapshot);

        debug!(
            pool = %self.pool.account,
            to = %recipient,
            amount_a = %amount_a,
            amount_b = %amount_b,
            shares = %issued,
            locked = %locked,
            supply = %supply,
            "mint"
        );
        Ok(issued)
    }

    fn burn(&mut self, recipient: AccountId) -> Result<Redemption, AmmError> {
        let account = self.pool.account;
        let liquidity = self.pool.shares.balance_of(&account)?;
        let total = self.pool.shares.total_supply()?;
        if total.is_zero() {
            return Err(AmmError::ZeroAmountBurned);
        }
        self.tracker.ensure_covered(&self.snapshot()?)?;

        let (reserve_a, reserve_b) = self.tracker.reserves();
        let amount_a = mul_div(liquidity, reserve_a, total)?;
        let amount_b = mul_div(liquidity, reserve_b, total)?;
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::ZeroAmountBurned);
        }

        self.pool.shares.retire(account, liquidity)?;
        self.pool.asset_a.pay_out(account, recipient, amount_a)?;
        self.pool.asset_b.pay_out(account, recipient, amount_b)?;
        let settled = self.snapshot()?;
        self.tracker.sync(&settled);

        debug!(
            pool = %account,
            to = %recipient,
            shares = %liquidity,
            amount_a = %amount_a,
            amount_b = %amount_b,
            "burn"
        );
        Ok(Redemption::new(amount_a, amount_b))
    }

    fn total_shares(&self) -> Result<Amount, AmmError> {
        self.pool.shares.total_supply()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Decimals;

    const LP: AccountId = AccountId::from_bytes([0x11; 32]);
    const TRADER: AccountId = AccountId::from_bytes([0x22; 32]);

    fn ledger(byte: u8, symbol: &str) -> Arc<FungibleAsset> {
        Arc::new(FungibleAsset::new(
            AssetId::from_bytes([byte; 32]),
            symbol,
            symbol,
            Decimals::MAX,
        ))
    }

    fn small_lock() -> PoolConfig {
        let Ok(config) = PoolConfig::default().with_minimum_liquidity(Amount::new(100)) else {
            panic!("valid config");
        };
        config
    }

    fn make_pool(config: PoolConfig) -> Pool {
        let Ok(pool) = Pool::new(0, ledger(1, "AAA"), ledger(2, "BBB"), config) else {
            panic!("valid pool");
        };
        pool
    }

    /// Sends `a`/`b` to the pool and mints, all under one guard.
    fn deposit(pool: &Pool, a: u128, b: u128) -> Result<Amount, AmmError> {
        let mut guard = pool.lock()?;
        pool.asset_a().mint(pool.account(), Amount::new(a))?;
        pool.asset_b().mint(pool.account(), Amount::new(b))?;
        guard.mint(LP)
    }

    fn balance(asset: &FungibleAsset, holder: AccountId) -> Amount {
        let Ok(amount) = asset.balance_of(&holder) else {
            panic!("ledger readable");
        };
        amount
    }

    #[test]
    fn assets_are_ordered_canonically() {
        let Ok(pool) = Pool::new(3, ledger(9, "HI"), ledger(4, "LO"), PoolConfig::default()) else {
            panic!("valid pool");
        };
        assert_eq!(pool.asset_a().symbol(), "LO");
        assert_eq!(pool.asset_b().symbol(), "HI");
        assert_eq!(pool.account(), AccountId::pool(3));
        assert_eq!(pool.share_asset().id(), AssetId::pool_share(3));
        assert_eq!(pool.share_asset().symbol(), "PSLP");
        assert_eq!(pool.index(), 3);
    }

    #[test]
    fn identical_assets_rejected() {
        let asset = ledger(1, "AAA");
        let result = Pool::new(0, Arc::clone(&asset), asset, PoolConfig::default());
        let Err(AmmError::IdenticalAssets) = result else {
            panic!("expected IdenticalAssets");
        };
    }

    #[test]
    fn first_mint_locks_minimum_liquidity() {
        let pool = make_pool(PoolConfig::default());
        assert_eq!(pool.status(), Ok(PoolStatus::Uninitialized));

        let ten = 10_000_000_000_000_000_000;
        let twenty = 20_000_000_000_000_000_000;
        let Ok(issued) = deposit(&pool, ten, twenty) else {
            panic!("first mint failed");
        };

        let root = Amount::new(14_142_135_623_730_950_488);
        assert_eq!(pool.total_shares(), Ok(root));
        assert_eq!(issued, Amount::new(14_142_135_623_730_949_488));
        assert_eq!(balance(pool.share_asset(), LP), issued);
        assert_eq!(balance(pool.share_asset(), AccountId::BURN), Amount::new(1_000));
        assert_eq!(pool.get_reserves(), Ok((Amount::new(ten), Amount::new(twenty))));
        assert_eq!(pool.status(), Ok(PoolStatus::Active));
    }

    #[test]
    fn first_mint_at_minimum_rejected() {
        let pool = make_pool(PoolConfig::default());
        assert_eq!(deposit(&pool, 1_000, 1_000), Err(AmmError::InsufficientInitialLiquidity));
        assert_eq!(pool.total_shares(), Ok(Amount::ZERO));
        assert_eq!(pool.get_reserves(), Ok((Amount::ZERO, Amount::ZERO)));
    }

    #[test]
    fn one_sided_first_deposit_rejected() {
        let pool = make_pool(PoolConfig::default());
        assert_eq!(deposit(&pool, 1_000_000, 0), Err(AmmError::InsufficientInitialLiquidity));
    }

    #[test]
    fn later_mint_takes_smaller_ratio() {
        let pool = make_pool(PoolConfig::default());
        let Ok(_) = deposit(&pool, 1_000_000, 4_000_000) else {
            panic!("first mint failed");
        };
        // total = 2_000_000; 10% of A and 5% of B -> 5% of supply
        assert_eq!(deposit(&pool, 100_000, 200_000), Ok(Amount::new(100_000)));
        assert_eq!(pool.total_shares(), Ok(Amount::new(2_100_000)));
        assert_eq!(
            pool.get_reserves(),
            Ok((Amount::new(1_100_000), Amount::new(4_200_000)))
        );
    }

    #[test]
    fn empty_deposit_mints_nothing() {
        let pool = make_pool(PoolConfig::default());
        let Ok(_) = deposit(&pool, 1_000_000, 1_000_000) else {
            panic!("first mint failed");
        };
        assert_eq!(pool.mint(LP), Err(AmmError::ZeroLiquidityMinted));
    }

    #[test]
    fn burn_pays_proportional_slice() {
        let pool = make_pool(PoolConfig::default());
        let Ok(issued) = deposit(&pool, 1_000_000, 4_000_000) else {
            panic!("first mint failed");
        };
        let Ok(mut guard) = pool.lock() else {
            panic!("lock");
        };
        let Ok(()) = pool.share_asset().transfer(LP, pool.account(), issued) else {
            panic!("share transfer");
        };
        let Ok(redemption) = guard.burn(LP) else {
            panic!("burn failed");
        };
        drop(guard);

        // 1_999_000 of 2_000_000 shares
        assert_eq!(redemption.amount_a(), Amount::new(999_500));
        assert_eq!(redemption.amount_b(), Amount::new(3_998_000));
        assert_eq!(balance(pool.asset_a(), LP), Amount::new(999_500));
        assert_eq!(pool.total_shares(), Ok(Amount::new(1_000)));
        assert_eq!(pool.get_reserves(), Ok((Amount::new(500), Amount::new(2_000))));
    }

    #[test]
    fn burn_without_shares_rejected() {
        let pool = make_pool(PoolConfig::default());
        assert_eq!(pool.burn(LP), Err(AmmError::ZeroAmountBurned));
        let Ok(_) = deposit(&pool, 1_000_000, 1_000_000) else {
            panic!("first mint failed");
        };
        assert_eq!(pool.burn(LP), Err(AmmError::ZeroAmountBurned));
    }

    #[test]
    fn fee_free_swap_vector() {
        let pool = make_pool(small_lock());
        let Ok(_) = deposit(&pool, 300, 600) else {
            panic!("first mint failed");
        };
        let Ok(mut guard) = pool.lock() else {
            panic!("lock");
        };
        let Ok(()) = pool.asset_a().mint(pool.account(), Amount::new(50)) else {
            panic!("input transfer");
        };
        let Ok(result) = guard.swap(Amount::new(50), Amount::ZERO, TRADER) else {
            panic!("swap failed");
        };
        drop(guard);

        assert_eq!(result.amount_out(), Amount::new(85));
        assert_eq!(result.fee(), Amount::ZERO);
        assert_eq!(result.asset_in(), pool.pair().first());
        assert_eq!(balance(pool.asset_b(), TRADER), Amount::new(85));
        assert_eq!(pool.get_reserves(), Ok((Amount::new(350), Amount::new(515))));
    }

    #[test]
    fn swap_b_to_a_with_fee() {
        let Ok(config) = small_lock().with_fee_tier(FeeTier::TIER_0_30_PERCENT) else {
            panic!("valid config");
        };
        let pool = make_pool(config);
        let Ok(_) = deposit(&pool, 100_000, 100_000) else {
            panic!("first mint failed");
        };
        let Ok(mut guard) = pool.lock() else {
            panic!("lock");
        };
        assert_eq!(guard.quote_out(&pool.pair().second(), Amount::new(1_000)), Ok(Amount::new(987)));
        let Ok(()) = pool.asset_b().mint(pool.account(), Amount::new(1_000)) else {
            panic!("input transfer");
        };
        let Ok(result) = guard.swap(Amount::ZERO, Amount::new(1_000), TRADER) else {
            panic!("swap failed");
        };
        assert_eq!(result.amount_out(), Amount::new(987));
        assert_eq!(result.fee(), Amount::new(3));
        assert_eq!(guard.reserves(), (Amount::new(99_013), Amount::new(101_000)));
    }

    #[test]
    fn swap_without_transfer_rejected() {
        let pool = make_pool(small_lock());
        let Ok(_) = deposit(&pool, 300, 600) else {
            panic!("first mint failed");
        };
        assert_eq!(
            pool.swap(Amount::new(50), Amount::ZERO, TRADER),
            Err(AmmError::InsufficientInputAmount)
        );
        assert_eq!(
            pool.swap(Amount::ZERO, Amount::ZERO, TRADER),
            Err(AmmError::InsufficientInputAmount)
        );
        let Err(AmmError::InvalidQuantity(_)) = pool.swap(Amount::new(1), Amount::new(1), TRADER)
        else {
            panic!("expected InvalidQuantity");
        };
    }

    #[test]
    fn swap_short_input_rejected() {
        let pool = make_pool(small_lock());
        let Ok(_) = deposit(&pool, 300, 600) else {
            panic!("first mint failed");
        };
        let Ok(mut guard) = pool.lock() else {
            panic!("lock");
        };
        let Ok(()) = pool.asset_a().mint(pool.account(), Amount::new(49)) else {
            panic!("input transfer");
        };
        assert_eq!(
            guard.swap(Amount::new(50), Amount::ZERO, TRADER),
            Err(AmmError::InsufficientInputAmount)
        );
        assert_eq!(guard.reserves(), (Amount::new(300), Amount::new(600)));
    }

    #[test]
    fn swap_on_virgin_pool_rejected() {
        let pool = make_pool(PoolConfig::default());
        let Ok(mut guard) = pool.lock() else {
            panic!("lock");
        };
        let Ok(()) = pool.asset_a().mint(pool.account(), Amount::new(10)) else {
            panic!("input transfer");
        };
        assert_eq!(
            guard.swap(Amount::new(10), Amount::ZERO, TRADER),
            Err(AmmError::InsufficientOutputLiquidity)
        );
    }

    #[test]
    fn dust_swap_rejected() {
        let pool = make_pool(small_lock());
        let Ok(_) = deposit(&pool, 1_000_000, 1_000) else {
            panic!("first mint failed");
        };
        let Ok(mut guard) = pool.lock() else {
            panic!("lock");
        };
        let Ok(()) = pool.asset_a().mint(pool.account(), Amount::new(1)) else {
            panic!("input transfer");
        };
        assert_eq!(
            guard.swap(Amount::new(1), Amount::ZERO, TRADER),
            Err(AmmError::InsufficientOutputAmount)
        );
        assert_eq!(balance(pool.asset_b(), TRADER), Amount::ZERO);
    }

    #[test]
    fn sync_absorbs_donation() {
        let pool = make_pool(PoolConfig::default());
        let Ok(_) = deposit(&pool, 1_000_000, 1_000_000) else {
            panic!("first mint failed");
        };
        let Ok(()) = pool.asset_b().mint(pool.account(), Amount::new(5)) else {
            panic!("donation");
        };
        assert_eq!(pool.sync(), Ok((Amount::new(1_000_000), Amount::new(1_000_005))));
    }

    #[test]
    fn skim_returns_excess_only() {
        let pool = make_pool(PoolConfig::default());
        let Ok(_) = deposit(&pool, 1_000_000, 1_000_000) else {
            panic!("first mint failed");
        };
        let Ok(()) = pool.asset_a().mint(pool.account(), Amount::new(7)) else {
            panic!("donation");
        };
        assert_eq!(pool.skim(TRADER), Ok((Amount::new(7), Amount::ZERO)));
        assert_eq!(balance(pool.asset_a(), TRADER), Amount::new(7));
        assert_eq!(
            pool.get_reserves(),
            Ok((Amount::new(1_000_000), Amount::new(1_000_000)))
        );
        assert_eq!(balance(pool.asset_a(), pool.account()), Amount::new(1_000_000));
    }

    #[test]
    fn share_supply_only_moves_through_the_pool() {
        let pool = make_pool(PoolConfig::default());
        let Ok(issued) = deposit(&pool, 1_000_000, 1_000_000) else {
            panic!("first mint failed");
        };
        let Ok(total) = pool.total_shares() else {
            panic!("share ledger");
        };
        assert_eq!(pool.share_asset().mint_authority(), Some(pool.account()));

        let inflated = Amount::new(total.get() * 1_000);
        let Err(AmmError::Unauthorized(_)) = pool.share_asset().mint(pool.account(), inflated) else {
            panic!("expected Unauthorized");
        };
        let Err(AmmError::Unauthorized(_)) = pool.share_asset().burn(LP, issued) else {
            panic!("expected Unauthorized");
        };
        assert_eq!(pool.burn(TRADER), Err(AmmError::ZeroAmountBurned));
        assert_eq!(pool.total_shares(), Ok(total));
        assert_eq!(
            pool.get_reserves(),
            Ok((Amount::new(1_000_000), Amount::new(1_000_000)))
        );
    }

    #[test]
    fn locked_minimum_is_never_redeemable() {
        let pool = make_pool(PoolConfig::default());
        let Ok(_) = deposit(&pool, 1_000_000, 1_000_000) else {
            panic!("first mint failed");
        };
        let locked = Amount::new(1_000);
        let Err(AmmError::Unauthorized(_)) =
            pool.share_asset().transfer(AccountId::BURN, pool.account(), locked)
        else {
            panic!("expected Unauthorized");
        };
        assert_eq!(pool.burn(TRADER), Err(AmmError::ZeroAmountBurned));
        assert_eq!(pool.share_asset().balance_of(&AccountId::BURN), Ok(locked));
        assert_eq!(balance(pool.asset_a(), TRADER), Amount::ZERO);
    }

    #[test]
    fn reserves_cannot_be_transferred_out_directly() {
        let pool = make_pool(PoolConfig::default());
        let Ok(_) = deposit(&pool, 1_000_000, 1_000_000) else {
            panic!("first mint failed");
        };
        let Err(AmmError::Unauthorized(_)) =
            pool.asset_a().transfer(pool.account(), TRADER, Amount::new(1))
        else {
            panic!("expected Unauthorized");
        };
        assert_eq!(balance(pool.asset_a(), pool.account()), Amount::new(1_000_000));
    }

    #[test]
    fn swap_near_u128_ceiling_settles() {
        let big = 1u128 << 126;
        let Ok(config) = PoolConfig::default().with_fee_tier(FeeTier::TIER_0_30_PERCENT) else {
            panic!("valid config");
        };
        let pool = make_pool(config);
        let Ok(_) = deposit(&pool, big, big) else {
            panic!("first mint failed");
        };
        let Ok(mut guard) = pool.lock() else {
            panic!("lock");
        };
        let amount_in = Amount::new(1u128 << 100);
        let Ok(()) = pool.asset_a().mint(pool.account(), amount_in) else {
            panic!("input transfer");
        };
        let Ok(result) = guard.swap(amount_in, Amount::ZERO, TRADER) else {
            panic!("swap failed");
        };
        drop(guard);

        assert!(result.amount_out() > Amount::ZERO);
        assert!(result.amount_out() < amount_in);
        assert_eq!(
            pool.get_reserves(),
            Ok((
                Amount::new(big + amount_in.get()),
                Amount::new(big - result.amount_out().get())
            ))
        );
    }
}
