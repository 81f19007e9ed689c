//! In-memory fungible asset ledger.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::domain::{AccountId, Amount, AssetId, Decimals};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

#[derive(Debug, Default)]
struct Book {
    total_supply: Amount,
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<(AccountId, AccountId), Amount>,
}

impl Book {
    fn balance_of(&self, holder: &AccountId) -> Amount {
        self.balances.get(holder).copied().unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn set_balance(&mut self, holder: AccountId, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, amount);
        }
    }

    fn set_allowance(&mut self, owner: AccountId, spender: AccountId, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }

    fn move_balance(&mut self, from: AccountId, to: AccountId, amount: Amount) -> Result<(), AmmError> {
        if from.is_burn() {
            return Err(AmmError::Unauthorized("burn account balances are locked"));
        }
        let from_balance = self.balance_of(&from);
        if from_balance < amount {
            return Err(AmmError::InsufficientBalance);
        }
        if from == to || amount.is_zero() {
            return Ok(());
        }
        let to_balance = self.balance_of(&to).safe_add(&amount)?;
        self.set_balance(from, from_balance.safe_sub(&amount)?);
        self.set_balance(to, to_balance);
        Ok(())
    }
}

/// A mintable balance ledger with transfer, approve and allowance semantics.
///
/// Every method takes `&self`; the ledger sits behind a single [`RwLock`]
/// and each call holds it only for its own duration.  Balances of zero are
/// not stored.
///
/// Two kinds of holder are guarded:
///
/// - [`AccountId::BURN`]: nothing ever leaves it.
/// - Pool accounts ([`AccountId::is_pool`]): the public transfer methods
///   refuse to move their balances; only the owning pool pays out.
///
/// A ledger with a [`mint_authority`](Self::mint_authority) (every pool
/// share asset) rejects the public [`mint`](Self::mint) and
/// [`burn`](Self::burn); its supply changes only through its pool.
///
/// # Examples
///
/// ```
/// use pairswap::asset::FungibleAsset;
/// use pairswap::domain::{AccountId, Amount, AssetId, Decimals};
///
/// let asset = FungibleAsset::new(AssetId::from_bytes([1u8; 32]), "Token", "TKN", Decimals::MAX);
/// let alice = AccountId::from_bytes([0xa1; 32]);
/// let bob = AccountId::from_bytes([0xb0; 32]);
///
/// asset.mint(alice, Amount::new(100)).expect("mint");
/// asset.transfer(alice, bob, Amount::new(40)).expect("transfer");
/// assert_eq!(asset.balance_of(&bob), Ok(Amount::new(40)));
/// ```
#[derive(Debug)]
pub struct FungibleAsset {
    id: AssetId,
    name: String,
    symbol: String,
    decimals: Decimals,
    mint_authority: Option<AccountId>,
    book: RwLock<Book>,
}

impl FungibleAsset {
    /// Creates an empty ledger with zero supply.
    #[must_use]
    pub fn new(
        id: AssetId,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: Decimals,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            mint_authority: None,
            book: RwLock::new(Book::default()),
        }
    }

    /// Hands supply control to `authority`, the pool issuing this asset.
    #[must_use]
    pub(crate) fn with_mint_authority(mut self, authority: AccountId) -> Self {
        self.mint_authority = Some(authority);
        self
    }

    /// Returns the asset identifier.
    #[must_use]
    pub const fn id(&self) -> AssetId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the number of decimals of one whole unit.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// The account that controls the supply, if any.
    #[must_use]
    pub const fn mint_authority(&self) -> Option<AccountId> {
        self.mint_authority
    }

    fn ensure_open_supply(&self) -> Result<(), AmmError> {
        if self.mint_authority.is_some() {
            return Err(AmmError::Unauthorized("supply is managed by the issuing pool"));
        }
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Book>, AmmError> {
        self.book
            .read()
            .map_err(|_| AmmError::LockPoisoned("asset ledger"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Book>, AmmError> {
        self.book
            .write()
            .map_err(|_| AmmError::LockPoisoned("asset ledger"))
    }

    /// Returns the balance held by `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the ledger lock is poisoned.
    pub fn balance_of(&self, holder: &AccountId) -> Result<Amount, AmmError> {
        Ok(self.read()?.balance_of(holder))
    }

    /// Returns the outstanding supply.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the ledger lock is poisoned.
    pub fn total_supply(&self) -> Result<Amount, AmmError> {
        Ok(self.read()?.total_supply)
    }

    /// Returns how much `spender` may still move out of `owner`'s balance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the ledger lock is poisoned.
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Result<Amount, AmmError> {
        Ok(self.read()?.allowance(owner, spender))
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `from` is the burn sink or a pool.
    /// - [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    /// - [`AmmError::LockPoisoned`] if the ledger lock is poisoned.
    pub fn transfer(&self, from: AccountId, to: AccountId, amount: Amount) -> Result<(), AmmError> {
        ensure_not_pool(&from)?;
        self.write()?.move_balance(from, to, amount)
    }

    /// Moves `amount` out of a pool account.  Callers are the owning pool
    /// and the router unwinding its own deposit.
    pub(crate) fn pay_out(&self, pool: AccountId, to: AccountId, amount: Amount) -> Result<(), AmmError> {
        self.write()?.move_balance(pool, to, amount)
    }

    /// Sets `spender`'s allowance over `owner`'s balance to exactly `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if the ledger lock is poisoned.
    pub fn approve(&self, owner: AccountId, spender: AccountId, amount: Amount) -> Result<(), AmmError> {
        self.write()?.set_allowance(owner, spender, amount);
        Ok(())
    }

    /// Raises `spender`'s allowance over `owner`'s balance by `amount`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if the allowance would exceed `u128::MAX`.
    /// - [`AmmError::LockPoisoned`] if the ledger lock is poisoned.
    pub fn increase_allowance(
        &self,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let mut book = self.write()?;
        let raised = book.allowance(&owner, &spender).safe_add(&amount)?;
        book.set_allowance(owner, spender, raised);
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance.
    ///
    /// The allowance and the balance are checked together; on failure
    /// neither changes.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `from` is the burn sink or a pool.
    /// - [`AmmError::InsufficientAllowance`] if `spender` may not move `amount`.
    /// - [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    /// - [`AmmError::LockPoisoned`] if the ledger lock is poisoned.
    pub fn transfer_from(
        &self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        ensure_not_pool(&from)?;
        let mut book = self.write()?;
        let allowance = book.allowance(&from, &spender);
        if allowance < amount {
            return Err(AmmError::InsufficientAllowance);
        }
        book.move_balance(from, to, amount)?;
        book.set_allowance(from, spender, allowance.safe_sub(&amount)?);
        Ok(())
    }

    /// Creates `amount` new units held by `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if the ledger has a mint authority.
    /// - [`AmmError::Overflow`] if the total supply would exceed `u128::MAX`.
    /// - [`AmmError::LockPoisoned`] if the ledger lock is poisoned.
    pub fn mint(&self, to: AccountId, amount: Amount) -> Result<(), AmmError> {
        self.ensure_open_supply()?;
        self.issue(to, amount)
    }

    /// Destroys `amount` units held by `from`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if the ledger has a mint authority or
    ///   `from` is the burn sink.
    /// - [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    /// - [`AmmError::LockPoisoned`] if the ledger lock is poisoned.
    pub fn burn(&self, from: AccountId, amount: Amount) -> Result<(), AmmError> {
        self.ensure_open_supply()?;
        self.retire(from, amount)
    }

    pub(crate) fn issue(&self, to: AccountId, amount: Amount) -> Result<(), AmmError> {
        let mut book = self.write()?;
        let supply = book.total_supply.safe_add(&amount)?;
        // balance <= supply, so this cannot overflow once the supply fits
        let balance = book.balance_of(&to).safe_add(&amount)?;
        book.total_supply = supply;
        book.set_balance(to, balance);
        debug!(asset = %self.id, holder = %to, amount = %amount, "minted");
        Ok(())
    }

    pub(crate) fn retire(&self, from: AccountId, amount: Amount) -> Result<(), AmmError> {
        if from.is_burn() {
            return Err(AmmError::Unauthorized("burn account balances are locked"));
        }
        let mut book = self.write()?;
        let balance = book.balance_of(&from);
        if balance < amount {
            return Err(AmmError::InsufficientBalance);
        }
        book.total_supply = book.total_supply.safe_sub(&amount)?;
        book.set_balance(from, balance.safe_sub(&amount)?);
        debug!(asset = %self.id, holder = %from, amount = %amount, "burned");
        Ok(())
    }
}

fn ensure_not_pool(from: &AccountId) -> Result<(), AmmError> {
    if from.is_pool() {
        return Err(AmmError::Unauthorized("pool balances move only through pool operations"));
    }
    Ok(())
}
