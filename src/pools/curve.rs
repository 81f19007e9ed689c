//! Constant-product pricing formulas.
//!
//! Pure functions over reserves; the pool and the router share them so a
//! quote always matches what an execution would pay.
//!
//! # Swap output (`x · y = k` with the fee withheld from the input)
//!
//! ```text
//! m          = 10_000 − fee_bps
//! amount_out = amount_in × m × reserve_out
//!            / (reserve_in × 10_000 + amount_in × m)
//! ```
//!
//! All divisions round down, in favour of the pool.

use ethnum::U256;

use crate::domain::{Amount, FeeTier, BPS_DENOMINATOR};
use crate::error::AmmError;
use crate::math::{mul_div, mul_div_wide, narrow, widen};

/// Output of an exact-in swap against `reserve_in` / `reserve_out`.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientOutputLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the output exceeds `u128`.
pub fn amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientOutputLiquidity);
    }

    let scaled_in = widen(amount_in) * U256::new(fee.input_multiplier());
    let denominator = widen(reserve_in) * U256::new(u128::from(BPS_DENOMINATOR)) + scaled_in;
    let out = mul_div_wide(scaled_in, widen(reserve_out), denominator)?;

    narrow(out, "swap output overflow")
}

/// Amount of `y` worth `amount_x` at the ratio `reserve_y / reserve_x`.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `reserve_x` is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
pub fn quote(amount_x: Amount, reserve_x: Amount, reserve_y: Amount) -> Result<Amount, AmmError> {
    mul_div(amount_x, reserve_y, reserve_x)
}

/// Largest deposit not exceeding `(desired_x, desired_y)` that matches the
/// pool's current ratio.
///
/// An empty pool takes the desired amounts as they are.  Otherwise the full
/// `desired_x` is kept when its matching `y` fits within `desired_y`; if not,
/// the full `desired_y` is kept and `x` is scaled down.
///
/// # Errors
///
/// - [`AmmError::InsufficientOutputLiquidity`] if exactly one reserve is zero.
/// - [`AmmError::Overflow`] if an intermediate quotient exceeds `u128`.
pub fn optimal_deposit(
    desired_x: Amount,
    desired_y: Amount,
    reserve_x: Amount,
    reserve_y: Amount,
) -> Result<(Amount, Amount), AmmError> {
    if reserve_x.is_zero() && reserve_y.is_zero() {
        return Ok((desired_x, desired_y));
    }
    if reserve_x.is_zero() || reserve_y.is_zero() {
        return Err(AmmError::InsufficientOutputLiquidity);
    }

    let optimal_y = quote(desired_x, reserve_x, reserve_y)?;
    if optimal_y <= desired_y {
        return Ok((desired_x, optimal_y));
    }
    // optimal_y > desired_y implies optimal_x <= desired_x
    let optimal_x = quote(desired_y, reserve_y, reserve_x)?;
    Ok((optimal_x, desired_y))
}
