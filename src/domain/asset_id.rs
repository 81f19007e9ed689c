//! Chain-agnostic asset identifier.

use core::fmt;

/// Identifier of a fungible asset.
///
/// Wraps a fixed-size `[u8; 32]` byte array.  Identifiers are totally
/// ordered by their bytes; [`AssetPair`](super::AssetPair) relies on that
/// ordering to normalize pairs.
///
/// # Examples
///
/// ```
/// use pairswap::domain::AssetId;
///
/// let lo = AssetId::from_bytes([1u8; 32]);
/// let hi = AssetId::from_bytes([2u8; 32]);
/// assert!(lo < hi);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Identifier of the share asset issued by the pool with creation
    /// index `index`.
    #[must_use]
    pub const fn pool_share(index: u64) -> Self {
        Self(super::derived_bytes(super::SHARE_TAG, index))
    }

    /// Returns `true` for an identifier in the pool-share namespace.
    #[must_use]
    pub const fn is_pool_share(&self) -> bool {
        super::has_tag(&self.0, super::SHARE_TAG)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_short_hex(f, &self.0)
    }
}
