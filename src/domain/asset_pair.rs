//! Unordered pair of distinct assets in canonical order.

use super::AssetId;
use crate::error::AmmError;

/// Which side of a pair an asset occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The lower identifier (`asset_a`).
    A,
    /// The higher identifier (`asset_b`).
    B,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// A pair of distinct assets, canonically sorted by identifier.
///
/// The canonical ordering guarantees `first() < second()`, so `(X, Y)` and
/// `(Y, X)` produce equal pairs and resolve to the same pool.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{AssetId, AssetPair};
///
/// let x = AssetId::from_bytes([1u8; 32]);
/// let y = AssetId::from_bytes([2u8; 32]);
///
/// let pair = AssetPair::new(y, x).expect("distinct assets");
/// assert_eq!(pair.first(), x);
/// assert_eq!(pair.second(), y);
/// assert_eq!(pair, AssetPair::new(x, y).expect("distinct assets"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a canonically-ordered `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both identifiers are equal.
    pub fn new(x: AssetId, y: AssetId) -> Result<Self, AmmError> {
        if x == y {
            return Err(AmmError::IdenticalAssets);
        }
        let (asset_a, asset_b) = if x < y { (x, y) } else { (y, x) };
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the first asset (lower identifier).
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset (higher identifier).
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if the asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Returns the side `asset` occupies.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `asset` is not in the pair.
    pub fn side_of(&self, asset: &AssetId) -> Result<Side, AmmError> {
        if *asset == self.asset_a {
            Ok(Side::A)
        } else if *asset == self.asset_b {
            Ok(Side::B)
        } else {
            Err(AmmError::InvalidAsset("asset is not part of this pair"))
        }
    }

    /// Returns the asset on `side`.
    #[must_use]
    pub const fn asset(&self, side: Side) -> AssetId {
        match side {
            Side::A => self.asset_a,
            Side::B => self.asset_b,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn id(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    #[test]
    fn preserves_sorted_input() {
        let Ok(pair) = AssetPair::new(id(1), id(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.first(), id(1));
        assert_eq!(pair.second(), id(2));
    }

    #[test]
    fn sorts_reversed_input() {
        let Ok(pair) = AssetPair::new(id(9), id(3)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.first(), id(3));
        assert_eq!(pair.second(), id(9));
    }

    #[test]
    fn rejects_identical_assets() {
        assert_eq!(AssetPair::new(id(1), id(1)), Err(AmmError::IdenticalAssets));
    }

    #[test]
    fn reversed_pairs_are_equal() {
        let (Ok(p1), Ok(p2)) = (AssetPair::new(id(1), id(2)), AssetPair::new(id(2), id(1)))
        else {
            panic!("expected Ok");
        };
        assert_eq!(p1, p2);
    }

    #[test]
    fn side_lookup() {
        let Ok(pair) = AssetPair::new(id(2), id(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.side_of(&id(1)), Ok(Side::A));
        assert_eq!(pair.side_of(&id(2)), Ok(Side::B));
        assert!(pair.side_of(&id(3)).is_err());
        assert_eq!(pair.asset(Side::B), id(2));
        assert_eq!(Side::A.other(), Side::B);
    }

    #[test]
    fn contains() {
        let Ok(pair) = AssetPair::new(id(1), id(2)) else {
            panic!("expected Ok");
        };
        assert!(pair.contains(&id(1)));
        assert!(!pair.contains(&id(3)));
    }
}
