//! Configuration shared by every pool a registry creates.

use crate::domain::{Amount, BasisPoints, Decimals, FeeTier};
use crate::error::AmmError;

/// Shares locked in the burn sink on a pool's first deposit.
pub const DEFAULT_MINIMUM_LIQUIDITY: Amount = Amount::new(1_000);

const DEFAULT_SHARE_NAME: &str = "PairSwap LP";
const DEFAULT_SHARE_SYMBOL: &str = "PSLP";

/// Configuration for constant-product pools (`x · y = k`).
///
/// # Defaults
///
/// - Fee: [`FeeTier::NONE`] (swaps are fee-free).
/// - Minimum liquidity: [`DEFAULT_MINIMUM_LIQUIDITY`].
/// - Share asset: `"PairSwap LP"` / `"PSLP"` with 18 decimals.
///
/// # Validation
///
/// - The fee must be strictly below 100 %.
/// - The minimum liquidity must be non-zero.
/// - The share symbol must be non-empty.
///
/// # Examples
///
/// ```
/// use pairswap::config::PoolConfig;
/// use pairswap::domain::FeeTier;
///
/// let config = PoolConfig::default().with_fee_tier(FeeTier::TIER_0_30_PERCENT);
/// assert!(config.is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    fee_tier: FeeTier,
    minimum_liquidity: Amount,
    share_name: String,
    share_symbol: String,
    share_decimals: Decimals,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee is 100 % or more.
    /// - [`AmmError::InvalidConfiguration`] if the minimum liquidity is zero
    ///   or the share symbol is empty.
    pub fn new(
        fee_tier: FeeTier,
        minimum_liquidity: Amount,
        share_name: impl Into<String>,
        share_symbol: impl Into<String>,
        share_decimals: Decimals,
    ) -> Result<Self, AmmError> {
        let config = Self {
            fee_tier,
            minimum_liquidity,
            share_name: share_name.into(),
            share_symbol: share_symbol.into(),
            share_decimals,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`PoolConfig::new`].
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.fee_tier.basis_points() >= BasisPoints::MAX_PERCENT {
            return Err(AmmError::InvalidFee("fee must be below 100%"));
        }
        if self.minimum_liquidity.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "minimum liquidity must be positive",
            ));
        }
        if self.share_symbol.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration(
                "share symbol must not be empty",
            ));
        }
        Ok(())
    }

    /// Returns a copy with a different fee tier.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee is 100 % or more.
    pub fn with_fee_tier(mut self, fee_tier: FeeTier) -> Result<Self, AmmError> {
        self.fee_tier = fee_tier;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with a different minimum-liquidity lock.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `minimum_liquidity` is zero.
    pub fn with_minimum_liquidity(mut self, minimum_liquidity: Amount) -> Result<Self, AmmError> {
        self.minimum_liquidity = minimum_liquidity;
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with different share-asset metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `symbol` is empty.
    pub fn with_share_metadata(
        mut self,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: Decimals,
    ) -> Result<Self, AmmError> {
        self.share_name = name.into();
        self.share_symbol = symbol.into();
        self.share_decimals = decimals;
        self.validate()?;
        Ok(self)
    }

    /// Returns the swap fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the shares locked in the burn sink on the first deposit.
    pub const fn minimum_liquidity(&self) -> Amount {
        self.minimum_liquidity
    }

    /// Returns the share asset's display name.
    #[must_use]
    pub fn share_name(&self) -> &str {
        &self.share_name
    }

    /// Returns the share asset's ticker symbol.
    #[must_use]
    pub fn share_symbol(&self) -> &str {
        &self.share_symbol
    }

    /// Returns the share asset's decimals.
    #[must_use]
    pub const fn share_decimals(&self) -> Decimals {
        self.share_decimals
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            fee_tier: FeeTier::NONE,
            minimum_liquidity: DEFAULT_MINIMUM_LIQUIDITY,
            share_name: DEFAULT_SHARE_NAME.to_owned(),
            share_symbol: DEFAULT_SHARE_SYMBOL.to_owned(),
            share_decimals: Decimals::MAX,
        }
    }
}
