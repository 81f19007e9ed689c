//! Holder identity in asset ledgers.

use core::fmt;

/// Identity of anything that can hold a balance: users, the router, pools,
/// and the burn sink.
///
/// # Examples
///
/// ```
/// use pairswap::domain::AccountId;
///
/// let alice = AccountId::from_bytes([7u8; 32]);
/// assert_ne!(alice, AccountId::BURN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// The all-zero account.  Shares sent here are locked forever: ledgers
    /// refuse every transfer out of it.
    pub const BURN: Self = Self([0u8; 32]);

    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Account of the pool with creation index `index`.
    #[must_use]
    pub const fn pool(index: u64) -> Self {
        Self(super::derived_bytes(super::POOL_TAG, index))
    }

    /// Returns `true` for the burn sink.
    #[must_use]
    pub fn is_burn(&self) -> bool {
        *self == Self::BURN
    }

    /// Returns `true` for an account in the pool namespace.
    ///
    /// Balances held by such accounts only move through pool operations.
    #[must_use]
    pub const fn is_pool(&self) -> bool {
        super::has_tag(&self.0, super::POOL_TAG)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_short_hex(f, &self.0)
    }
}
