//! Journal of transfers pulled into a pool during one router call.

use tracing::warn;

use crate::asset::FungibleAsset;
use crate::domain::{AccountId, Amount};
use crate::error::AmmError;

#[derive(Debug)]
struct Leg<'a> {
    asset: &'a FungibleAsset,
    owner: AccountId,
    amount: Amount,
}

/// Records every allowance-backed transfer into `pool` so a failed call can
/// hand the funds and the consumed allowance back.
///
/// Must be closed while the pool lock that covered the transfers is still
/// held.
#[derive(Debug)]
pub(crate) struct Settlement<'a> {
    spender: AccountId,
    pool: AccountId,
    legs: Vec<Leg<'a>>,
}

impl<'a> Settlement<'a> {
    pub(crate) const fn new(spender: AccountId, pool: AccountId) -> Self {
        Self {
            spender,
            pool,
            legs: Vec::new(),
        }
    }

    /// Moves `amount` of `asset` from `owner` into the pool using the
    /// spender's allowance.  Zero amounts are skipped.
    pub(crate) fn pull(
        &mut self,
        asset: &'a FungibleAsset,
        owner: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        asset.transfer_from(self.spender, owner, self.pool, amount)?;
        self.legs.push(Leg {
            asset,
            owner,
            amount,
        });
        Ok(())
    }

    /// Passes `outcome` through, unwinding every recorded leg in reverse
    /// order first if it is an error.
    pub(crate) fn close<T>(self, outcome: Result<T, AmmError>) -> Result<T, AmmError> {
        let error = match outcome {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };
        if self.legs.is_empty() {
            return Err(error);
        }
        warn!(
            pool = %self.pool,
            legs = self.legs.len(),
            error = %error,
            "unwinding partial settlement"
        );
        for leg in self.legs.iter().rev() {
            if let Err(unwind) = leg.refund(self.pool, self.spender) {
                warn!(
                    asset = %leg.asset.id(),
                    owner = %leg.owner,
                    amount = %leg.amount,
                    error = %unwind,
                    "refund failed"
                );
            }
        }
        Err(error)
    }
}

impl Leg<'_> {
    fn refund(&self, pool: AccountId, spender: AccountId) -> Result<(), AmmError> {
        self.asset.pay_out(pool, self.owner, self.amount)?;
        self.asset
            .increase_allowance(self.owner, spender, self.amount)
    }
}
