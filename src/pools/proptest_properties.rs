//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Swap reversibility**: round-trip A→B→A returns ≤ original.
//! 2. **Invariant preservation**: `reserve_a × reserve_b` never decreases
//!    across swaps.
//! 3. **Fee monotonicity**: larger input ⇒ larger or equal fee.
//! 4. **Share proportionality**: later deposits earn at most their
//!    smaller share of the reserves.
//! 5. **Burn inverts mint**: redeeming freshly minted shares returns at
//!    most what was deposited, losing only rounding dust.
//! 6. **Reserve sync**: reserves equal the pool's balances after every
//!    operation.

use std::sync::Arc;

use proptest::prelude::*;

use super::Pool;
use crate::asset::FungibleAsset;
use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetId, Decimals, FeeTier, Redemption, Side, SwapResult};
use crate::error::AmmError;
use crate::math::product;
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const LP: AccountId = AccountId::from_bytes([0x11; 32]);
const TRADER: AccountId = AccountId::from_bytes([0x22; 32]);

fn ledger(byte: u8) -> Arc<FungibleAsset> {
    Arc::new(FungibleAsset::new(
        AssetId::from_bytes([byte; 32]),
        "Asset",
        "AST",
        Decimals::MAX,
    ))
}

fn make_pool(fee: FeeTier) -> Pool {
    let Ok(config) = PoolConfig::default().with_fee_tier(fee) else {
        panic!("valid config");
    };
    let Ok(pool) = Pool::new(0, ledger(1), ledger(2), config) else {
        panic!("valid pool");
    };
    pool
}

fn deposit(pool: &Pool, a: u128, b: u128) -> Result<Amount, AmmError> {
    let mut guard = pool.lock()?;
    pool.asset_a().mint(pool.account(), Amount::new(a))?;
    pool.asset_b().mint(pool.account(), Amount::new(b))?;
    guard.mint(LP)
}

fn seeded(fee: FeeTier, ra: u128, rb: u128) -> Pool {
    let pool = make_pool(fee);
    let Ok(_) = deposit(&pool, ra, rb) else {
        panic!("seed deposit");
    };
    pool
}

fn sell(pool: &Pool, side: Side, amount: u128) -> Result<SwapResult, AmmError> {
    let mut guard = pool.lock()?;
    pool.asset(side).mint(pool.account(), Amount::new(amount))?;
    match side {
        Side::A => guard.swap(Amount::new(amount), Amount::ZERO, TRADER),
        Side::B => guard.swap(Amount::ZERO, Amount::new(amount), TRADER),
    }
}

fn redeem(pool: &Pool, shares: Amount) -> Result<Redemption, AmmError> {
    let mut guard = pool.lock()?;
    pool.share_asset().transfer(LP, pool.account(), shares)?;
    guard.burn(LP)
}

fn reserves(pool: &Pool) -> (u128, u128) {
    let Ok((a, b)) = pool.get_reserves() else {
        panic!("pool lock");
    };
    (a.get(), b.get())
}

fn pool_balances(pool: &Pool) -> (u128, u128) {
    let (Ok(a), Ok(b)) = (
        pool.asset_a().balance_of(&pool.account()),
        pool.asset_b().balance_of(&pool.account()),
    ) else {
        panic!("ledger readable");
    };
    (a.get(), b.get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Fee tiers from free up to 1%.
fn fee_strategy() -> impl Strategy<Value = FeeTier> {
    prop_oneof![
        Just(FeeTier::NONE),
        Just(FeeTier::TIER_0_05_PERCENT),
        Just(FeeTier::TIER_0_30_PERCENT),
        Just(FeeTier::TIER_1_00_PERCENT),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let pool = seeded(fee, ra, rb);

        let Ok(result_ab) = sell(&pool, Side::A, swap_in) else {
            return Ok(());
        };
        let Ok(result_ba) = sell(&pool, Side::B, result_ab.amount_out().get()) else {
            return Ok(());
        };
        let final_a = result_ba.amount_out().get();

        prop_assert!(
            final_a <= swap_in,
            "round-trip should lose value: final={} > original={}",
            final_a, swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_preservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        sides in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let pool = seeded(fee, ra, rb);

        for a_to_b in sides {
            let (before_a, before_b) = reserves(&pool);
            let (side, reserve_in) = if a_to_b { (Side::A, before_a) } else { (Side::B, before_b) };
            if sell(&pool, side, (reserve_in / 200).max(1)).is_err() {
                continue;
            }
            let (after_a, after_b) = reserves(&pool);
            let k_before = product(Amount::new(before_a), Amount::new(before_b));
            let k_after = product(Amount::new(after_a), Amount::new(after_b));
            prop_assert!(
                k_after >= k_before,
                "k should never decrease: k_after={} < k_before={}",
                k_after, k_before
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Fee Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fee_monotonicity(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let inputs = [
            (ra / 10_000).max(1),
            (ra / 1_000).max(2),
            (ra / 100).max(3),
        ];

        let mut fees = Vec::new();
        for &input in &inputs {
            let pool = seeded(FeeTier::TIER_0_30_PERCENT, ra, rb);
            let Ok(result) = sell(&pool, Side::A, input) else {
                continue;
            };
            fees.push(result.fee().get());
        }

        for pair in fees.windows(2) {
            if let [prev, curr] = pair {
                prop_assert!(
                    curr >= prev,
                    "fee should be non-decreasing: {} < {}",
                    curr, prev
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Share Proportionality
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_share_proportionality(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in 1u128..=1_000_000u128,
        db in 1u128..=1_000_000u128,
    ) {
        let pool = seeded(FeeTier::NONE, ra, rb);
        let Ok(total) = pool.total_shares() else {
            return Ok(());
        };
        let total = total.get();

        let Ok(minted) = deposit(&pool, da, db) else {
            return Ok(());
        };
        let minted = minted.get();

        // minted / total <= da / ra and <= db / rb
        prop_assert!(minted * ra <= da * total, "over-issued against A");
        prop_assert!(minted * rb <= db * total, "over-issued against B");
        // and is exactly the smaller floored ratio
        let by_a = da * total / ra;
        let by_b = db * total / rb;
        prop_assert_eq!(minted, by_a.min(by_b));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Burn Inverts Mint
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_burn_inverts_mint(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        percent in 1u128..=100u128,
    ) {
        let pool = seeded(FeeTier::NONE, ra, rb);
        let da = ra * percent / 100;
        let db = rb * percent / 100;

        let Ok(minted) = deposit(&pool, da, db) else {
            return Ok(());
        };
        let Ok(redemption) = redeem(&pool, minted) else {
            return Ok(());
        };
        let (out_a, out_b) = (redemption.amount_a().get(), redemption.amount_b().get());

        prop_assert!(out_a <= da, "burn returned more A than deposited: {} > {}", out_a, da);
        prop_assert!(out_b <= db, "burn returned more B than deposited: {} > {}", out_b, db);
        // rounding costs at most a unit per division plus the ratio slack
        prop_assert!(out_a + 2 + ra / 1_000 >= da * 99 / 100, "lost too much A: {} of {}", out_a, da);
        prop_assert!(out_b + 2 + rb / 1_000 >= db * 99 / 100, "lost too much B: {} of {}", out_b, db);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Reserve Sync
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reserves_track_balances(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        steps in proptest::collection::vec((0u8..3u8, 1u128..=100_000u128), 1..10),
    ) {
        let pool = seeded(fee, ra, rb);

        for (op, amount) in steps {
            let outcome = match op {
                0 => sell(&pool, Side::A, amount).map(|_| ()),
                1 => sell(&pool, Side::B, amount).map(|_| ()),
                _ => deposit(&pool, amount, amount).map(|_| ()),
            };
            if outcome.is_err() {
                // a rejected call leaves its transfer as a donation
                let Ok(_) = pool.sync() else {
                    return Ok(());
                };
            }
            prop_assert_eq!(reserves(&pool), pool_balances(&pool));
        }
    }
}
