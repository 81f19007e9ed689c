//! Arithmetic utilities for pool calculations.
//!
//! [`CheckedArithmetic`] gives overflow-safe operations on
//! [`Amount`](crate::domain::Amount).  The [`wide`] helpers carry products of two
//! amounts in 256 bits so share and invariant math never truncates.

mod checked;
pub mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{full_mul, isqrt, mul_div, mul_div_wide, narrow, product, sqrt_product, widen};
