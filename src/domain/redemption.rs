//! Assets paid out for burned shares.

use core::fmt;

use super::{Amount, Side};

/// The two asset amounts a burn pays out, in canonical pair order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Redemption {
    amount_a: Amount,
    amount_b: Amount,
}

impl Redemption {
    /// Creates a redemption of `amount_a` and `amount_b`.
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    /// Amount of the pair's first asset.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the pair's second asset.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Amount on `side`.
    pub const fn on(&self, side: Side) -> Amount {
        match side {
            Side::A => self.amount_a,
            Side::B => self.amount_b,
        }
    }
}

impl fmt::Display for Redemption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Redemption(a={}, b={})", self.amount_a, self.amount_b)
    }
}
