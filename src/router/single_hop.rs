//! The router itself.

use std::sync::Arc;

use super::settlement::Settlement;
use crate::domain::{AccountId, Amount, AssetId, Side, SwapResult};
use crate::error::AmmError;
use crate::factory::PoolRegistry;
use crate::pools::curve;
use crate::traits::{LiquidityPool, SwapPool};

/// Stateless front end for adding liquidity, removing liquidity and
/// swapping.
///
/// Every operation touches exactly one pool.  Amounts are taken and
/// returned in the caller's asset order, whatever the pool's canonical
/// order is.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use pairswap::asset::AssetDirectory;
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::{AccountId, Amount, AssetId, Decimals};
/// use pairswap::factory::PoolRegistry;
/// use pairswap::router::Router;
///
/// let assets = Arc::new(AssetDirectory::new());
/// let x = AssetId::from_bytes([1u8; 32]);
/// let y = AssetId::from_bytes([2u8; 32]);
/// let ledger_x = assets.create_asset(x, "X", "X", Decimals::MAX).expect("new");
/// let ledger_y = assets.create_asset(y, "Y", "Y", Decimals::MAX).expect("new");
///
/// let registry = Arc::new(PoolRegistry::new(Arc::clone(&assets), PoolConfig::default()).expect("valid"));
/// let router = Router::new(registry, AccountId::from_bytes([0x70; 32]));
///
/// let alice = AccountId::from_bytes([0xa1; 32]);
/// for ledger in [&ledger_x, &ledger_y] {
///     ledger.mint(alice, Amount::new(1_000_000)).expect("mint");
///     ledger.approve(alice, router.account(), Amount::new(1_000_000)).expect("approve");
/// }
///
/// let shares = router
///     .add_liquidity(alice, x, y, Amount::new(40_000), Amount::new(10_000), alice)
///     .expect("deposit");
/// assert_eq!(shares, Amount::new(19_000));
/// ```
#[derive(Debug, Clone)]
pub struct Router {
    registry: Arc<PoolRegistry>,
    account: AccountId,
}

impl Router {
    /// Creates a router over `registry`.  `account` is the spender callers
    /// must approve in each ledger.
    #[must_use]
    pub const fn new(registry: Arc<PoolRegistry>, account: AccountId) -> Self {
        Self { registry, account }
    }

    /// The registry pools are resolved through.
    #[must_use]
    pub const fn registry(&self) -> &Arc<PoolRegistry> {
        &self.registry
    }

    /// The spender identity callers approve.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Deposits the largest amounts not exceeding `(desired_x, desired_y)`
    /// that match the pool's ratio and mints shares to `recipient`.
    ///
    /// Creates the pool if the pair has none.  A fresh pool takes the
    /// desired amounts as they are.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] / [`AmmError::UnknownAsset`] from
    ///   pool resolution.
    /// - [`AmmError::InsufficientAllowance`] / [`AmmError::InsufficientBalance`]
    ///   if `caller` cannot fund the deposit.
    /// - Any [`LiquidityPool::mint`] error.
    ///
    /// On error no balance or allowance has changed.
    pub fn add_liquidity(
        &self,
        caller: AccountId,
        asset_x: AssetId,
        asset_y: AssetId,
        desired_x: Amount,
        desired_y: Amount,
        recipient: AccountId,
    ) -> Result<Amount, AmmError> {
        let pool = self.registry.get_or_create(asset_x, asset_y)?;
        let side_x = pool.pair().side_of(&asset_x)?;

        let mut guard = pool.lock()?;
        let (reserve_x, reserve_y) = in_caller_order(guard.reserves(), side_x);
        let (amount_x, amount_y) =
            curve::optimal_deposit(desired_x, desired_y, reserve_x, reserve_y)?;

        let mut journal = Settlement::new(self.account, pool.account());
        let outcome = journal
            .pull(pool.asset(side_x), caller, amount_x)
            .and_then(|()| journal.pull(pool.asset(side_x.other()), caller, amount_y))
            .and_then(|()| guard.mint(recipient));
        journal.close(outcome)
    }

    /// Redeems `liquidity` of `caller`'s shares and pays both assets to
    /// `recipient`.  Returns the payouts in `(asset_x, asset_y)` order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pair has no pool.
    /// - [`AmmError::InsufficientAllowance`] / [`AmmError::InsufficientBalance`]
    ///   if `caller` cannot hand over the shares.
    /// - Any [`LiquidityPool::burn`] error.
    ///
    /// On error no balance or allowance has changed.
    pub fn remove_liquidity(
        &self,
        caller: AccountId,
        asset_x: AssetId,
        asset_y: AssetId,
        liquidity: Amount,
        recipient: AccountId,
    ) -> Result<(Amount, Amount), AmmError> {
        let pool = self.registry.require(asset_x, asset_y)?;
        let side_x = pool.pair().side_of(&asset_x)?;

        let mut guard = pool.lock()?;
        let mut journal = Settlement::new(self.account, pool.account());
        let outcome = journal
            .pull(pool.share_asset(), caller, liquidity)
            .and_then(|()| guard.burn(recipient));
        let redemption = journal.close(outcome)?;
        Ok((redemption.on(side_x), redemption.on(side_x.other())))
    }

    /// Sells `amount_in` of `asset_in` from `caller` for `asset_out`, paid
    /// to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pair has no pool.
    /// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientAllowance`] / [`AmmError::InsufficientBalance`]
    ///   if `caller` cannot fund the input.
    /// - Any [`SwapPool::swap`] error.
    ///
    /// On error no balance or allowance has changed.
    pub fn swap(
        &self,
        caller: AccountId,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        recipient: AccountId,
    ) -> Result<SwapResult, AmmError> {
        let pool = self.registry.require(asset_in, asset_out)?;
        if amount_in.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        let side_in = pool.pair().side_of(&asset_in)?;
        let (amount_a_in, amount_b_in) = match side_in {
            Side::A => (amount_in, Amount::ZERO),
            Side::B => (Amount::ZERO, amount_in),
        };

        let mut guard = pool.lock()?;
        let mut journal = Settlement::new(self.account, pool.account());
        let outcome = journal
            .pull(pool.asset(side_in), caller, amount_in)
            .and_then(|()| guard.swap(amount_a_in, amount_b_in, recipient));
        journal.close(outcome)
    }

    /// The amounts [`Router::add_liquidity`] would transfer for these
    /// desired amounts right now, in caller order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if `asset_x == asset_y`.
    /// - [`AmmError::Overflow`] if a scaled amount exceeds `u128`.
    pub fn quote_liquidity(
        &self,
        asset_x: AssetId,
        asset_y: AssetId,
        desired_x: Amount,
        desired_y: Amount,
    ) -> Result<(Amount, Amount), AmmError> {
        let Some(pool) = self.registry.get(asset_x, asset_y)? else {
            return Ok((desired_x, desired_y));
        };
        let side_x = pool.pair().side_of(&asset_x)?;
        let (reserve_x, reserve_y) = in_caller_order(pool.get_reserves()?, side_x);
        curve::optimal_deposit(desired_x, desired_y, reserve_x, reserve_y)
    }

    /// The output [`Router::swap`] would pay for `amount_in` right now.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pair has no pool.
    /// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientOutputLiquidity`] if the pool is empty.
    pub fn quote_swap(
        &self,
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
    ) -> Result<Amount, AmmError> {
        let pool = self.registry.require(asset_in, asset_out)?;
        let guard = pool.lock()?;
        guard.quote_out(&asset_in, amount_in)
    }

    /// Current reserves of the `(asset_x, asset_y)` pool in caller order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if the pair has no pool.
    pub fn reserves(&self, asset_x: AssetId, asset_y: AssetId) -> Result<(Amount, Amount), AmmError> {
        let pool = self.registry.require(asset_x, asset_y)?;
        let side_x = pool.pair().side_of(&asset_x)?;
        Ok(in_caller_order(pool.get_reserves()?, side_x))
    }
}

/// Reorders canonical `(a, b)` values so the `side_x` value comes first.
const fn in_caller_order(canonical: (Amount, Amount), side_x: Side) -> (Amount, Amount) {
    match side_x {
        Side::A => canonical,
        Side::B => (canonical.1, canonical.0),
    }
}
