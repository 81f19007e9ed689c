//! Reconciliation between what a pool holds and what it last recorded.
//!
//! Deposits are never declared by the caller.  A pool snapshots its
//! actual balances, diffs them against the recorded reserves, and after
//! settling writes the balances back as the new reserves.

use ethnum::U256;

use crate::asset::FungibleAsset;
use crate::domain::{AccountId, Amount, FeeTier, Side, BPS_DENOMINATOR};
use crate::error::AmmError;
use crate::math::{full_mul, product, widen, CheckedArithmetic};

/// Balances of both pair assets held by a pool at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    balance_a: Amount,
    balance_b: Amount,
}

impl Snapshot {
    /// Creates a snapshot from explicit balances.
    pub const fn new(balance_a: Amount, balance_b: Amount) -> Self {
        Self {
            balance_a,
            balance_b,
        }
    }

    /// Reads `holder`'s balance in both ledgers.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::LockPoisoned`] if a ledger lock is poisoned.
    pub fn read(
        asset_a: &FungibleAsset,
        asset_b: &FungibleAsset,
        holder: &AccountId,
    ) -> Result<Self, AmmError> {
        Ok(Self::new(asset_a.balance_of(holder)?, asset_b.balance_of(holder)?))
    }

    /// Balance on `side`.
    pub const fn on(&self, side: Side) -> Amount {
        match side {
            Side::A => self.balance_a,
            Side::B => self.balance_b,
        }
    }

    /// Returns the snapshot with `amount` paid out of `side`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if `side` holds less than `amount`.
    pub fn after_payout(&self, side: Side, amount: Amount) -> Result<Self, AmmError> {
        let mut next = *self;
        match side {
            Side::A => next.balance_a = self.balance_a.safe_sub(&amount)?,
            Side::B => next.balance_b = self.balance_b.safe_sub(&amount)?,
        }
        Ok(next)
    }
}

/// A pool's last-synchronized reserves.
///
/// Immediately after any mutating pool operation the reserves equal the
/// pool's balances in the two ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceTracker {
    reserve_a: Amount,
    reserve_b: Amount,
}

impl BalanceTracker {
    /// Creates a tracker with both reserves at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
        }
    }

    /// Recorded reserves in canonical pair order.
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Recorded reserve on `side`.
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// Amounts received since the last synchronization.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if a balance fell below its reserve,
    /// which only happens if funds left the pool outside its own operations.
    pub fn deltas(&self, snapshot: &Snapshot) -> Result<(Amount, Amount), AmmError> {
        Ok((
            snapshot.balance_a.safe_sub(&self.reserve_a)?,
            snapshot.balance_b.safe_sub(&self.reserve_b)?,
        ))
    }

    /// Checks that both balances still cover the recorded reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if a balance fell below its reserve.
    pub fn ensure_covered(&self, snapshot: &Snapshot) -> Result<(), AmmError> {
        if snapshot.balance_a < self.reserve_a || snapshot.balance_b < self.reserve_b {
            return Err(AmmError::Underflow("pool balance below its reserve"));
        }
        Ok(())
    }

    /// Balances held beyond the reserves, floored at zero.
    pub const fn excess(&self, snapshot: &Snapshot) -> (Amount, Amount) {
        (
            snapshot.balance_a.saturating_sub(&self.reserve_a),
            snapshot.balance_b.saturating_sub(&self.reserve_b),
        )
    }

    /// Records `snapshot` as the new reserves.
    pub fn sync(&mut self, snapshot: &Snapshot) {
        self.reserve_a = snapshot.balance_a;
        self.reserve_b = snapshot.balance_b;
    }

    /// Checks the fee-adjusted constant product against the recorded
    /// reserves for balances the pool would hold after paying `amount_out`
    /// from `side_out`.
    ///
    /// ```text
    /// in_x  = projected_x − (reserve_x − out_x)      (floored at zero)
    /// adj_x = projected_x × 10_000 − in_x × fee_bps
    /// adj_a × adj_b ≥ reserve_a × reserve_b × 10_000²
    /// ```
    ///
    /// The products are compared at full 512-bit width, so any pair of
    /// `u128` balances is accepted.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvariantViolation`] if the product would decrease.
    /// - [`AmmError::Underflow`] if a fee-adjusted balance goes negative.
    pub fn ensure_k_not_decreased(
        &self,
        projected: &Snapshot,
        side_out: Side,
        amount_out: Amount,
        fee: FeeTier,
    ) -> Result<(), AmmError> {
        let adjusted_a = self.adjusted(projected, Side::A, side_out, amount_out, fee)?;
        let adjusted_b = self.adjusted(projected, Side::B, side_out, amount_out, fee)?;
        let scale = U256::new(u128::from(BPS_DENOMINATOR));

        let after = full_mul(adjusted_a, adjusted_b);
        let before = full_mul(product(self.reserve_a, self.reserve_b), scale * scale);
        if after < before {
            return Err(AmmError::InvariantViolation);
        }
        Ok(())
    }

    fn adjusted(
        &self,
        projected: &Snapshot,
        side: Side,
        side_out: Side,
        amount_out: Amount,
        fee: FeeTier,
    ) -> Result<U256, AmmError> {
        let out = if side == side_out {
            amount_out
        } else {
            Amount::ZERO
        };
        let balance = projected.on(side);
        let floor = self.reserve(side).saturating_sub(&out);
        let amount_in = balance.saturating_sub(&floor);

        let scaled = widen(balance) * U256::new(u128::from(BPS_DENOMINATOR));
        let withheld = widen(amount_in) * U256::new(u128::from(fee.basis_points().get()));
        scaled
            .checked_sub(withheld)
            .ok_or(AmmError::Underflow("fee-adjusted balance underflow"))
    }
}
