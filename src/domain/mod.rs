//! Fundamental domain value types used throughout the library.
//!
//! Identifiers, amounts, rates and operation outcomes.  All types are
//! newtypes with validated constructors where a range applies.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod basis_points;
mod decimals;
mod fee_tier;
mod redemption;
mod swap_result;

use core::fmt;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::{AssetPair, Side};
pub use basis_points::BasisPoints;
pub(crate) use basis_points::BPS_DENOMINATOR;
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use redemption::Redemption;
pub use swap_result::SwapResult;

const POOL_TAG: u8 = 0x01;
const SHARE_TAG: u8 = 0x02;

/// `0xff, tag, 0…, index (big-endian)`: identifiers minted by the registry.
const fn derived_bytes(tag: u8, index: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[0] = 0xff;
    bytes[1] = tag;
    let be = index.to_be_bytes();
    let mut i = 0;
    while i < 8 {
        bytes[24 + i] = be[i];
        i += 1;
    }
    bytes
}

/// Returns `true` if `bytes` were produced by [`derived_bytes`] with `tag`.
const fn has_tag(bytes: &[u8; 32], tag: u8) -> bool {
    bytes[0] == 0xff && bytes[1] == tag
}

fn write_short_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8; 32]) -> fmt::Result {
    write!(f, "0x")?;
    for b in &bytes[..4] {
        write!(f, "{b:02x}")?;
    }
    write!(f, "…")?;
    for b in &bytes[30..] {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}
