//! 256-bit intermediates for share and invariant arithmetic.
//!
//! At 18 decimals a reserve of a few hundred whole units already squares
//! past `u128::MAX`, so every product of two amounts is formed in
//! [`U256`] and narrowed back only once the final quotient is known.

use ethnum::U256;

use crate::domain::Amount;
use crate::error::AmmError;

/// Widens an amount into 256 bits.
#[inline]
#[must_use]
pub fn widen(amount: Amount) -> U256 {
    U256::new(amount.get())
}

/// Narrows a 256-bit value back into an [`Amount`].
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the value does not fit
/// in 128 bits.
pub fn narrow(value: U256, context: &'static str) -> Result<Amount, AmmError> {
    let (high, low) = value.into_words();
    if high != 0 {
        return Err(AmmError::Overflow(context));
    }
    Ok(Amount::new(low))
}

/// Full-width product of two amounts.  Never overflows.
#[inline]
#[must_use]
pub fn product(a: Amount, b: Amount) -> U256 {
    widen(a) * widen(b)
}

/// `floor(a * b / denominator)` without intermediate overflow.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
pub fn mul_div(a: Amount, b: Amount, denominator: Amount) -> Result<Amount, AmmError> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    narrow(product(a, b) / widen(denominator), "mul_div quotient overflow")
}

/// Full 512-bit product of two 256-bit values as `(high, low)` words.
///
/// Tuples compare lexicographically, so two results can be ordered
/// directly.
#[must_use]
pub fn full_mul(a: U256, b: U256) -> (U256, U256) {
    let (a_hi, a_lo) = a.into_words();
    let (b_hi, b_lo) = b.into_words();
    let lo_lo = U256::new(a_lo) * U256::new(b_lo);
    let lo_hi = U256::new(a_lo) * U256::new(b_hi);
    let hi_lo = U256::new(a_hi) * U256::new(b_lo);
    let hi_hi = U256::new(a_hi) * U256::new(b_hi);

    let (cross, cross_carry) = lo_hi.overflowing_add(hi_lo);
    let (low, low_carry) = lo_lo.overflowing_add(cross << 128u32);
    // the true product is below 2^512, so the high word cannot wrap
    let high = hi_hi
        + (cross >> 128u32)
        + U256::from_words(u128::from(cross_carry), 0)
        + U256::new(u128::from(low_carry));
    (high, low)
}

/// `floor(a * b / denominator)` over a 512-bit intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds 256 bits.
pub fn mul_div_wide(a: U256, b: U256, denominator: U256) -> Result<U256, AmmError> {
    if denominator == U256::ZERO {
        return Err(AmmError::DivisionByZero);
    }
    let (high, low) = full_mul(a, b);
    if high == U256::ZERO {
        return Ok(low / denominator);
    }
    if high >= denominator {
        return Err(AmmError::Overflow("wide quotient overflow"));
    }

    // restoring long division, one bit of `low` at a time; rem < denominator
    let mut rem = high;
    let mut quotient = U256::ZERO;
    for bit in (0..256u32).rev() {
        let carry = (rem >> 255u32) != U256::ZERO;
        rem = (rem << 1u32) | ((low >> bit) & U256::ONE);
        quotient <<= 1u32;
        if carry || rem >= denominator {
            rem = rem.wrapping_sub(denominator);
            quotient |= U256::ONE;
        }
    }
    Ok(quotient)
}

/// `floor(sqrt(a * b))`, the geometric mean used for the first deposit.
///
/// The root of a product of two `u128` values always fits in `u128`.
#[must_use]
pub fn sqrt_product(a: Amount, b: Amount) -> Amount {
    let (_, low) = isqrt(product(a, b)).into_words();
    Amount::new(low)
}

/// Integer square root via Newton's method.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n == U256::ZERO {
        return U256::ZERO;
    }
    let mut x = n;
    let mut y = (x >> 1u32) + (x & U256::ONE);
    while y < x {
        x = y;
        y = (x + n / x) >> 1u32;
    }
    x
}
