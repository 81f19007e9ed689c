//! Single-hop orchestration over the registry, pools and asset ledgers.
//!
//! The [`Router`] turns "deposit these two assets", "redeem these shares"
//! and "sell this much" into the transfer-then-settle sequence a pool
//! expects.  Callers grant the router an allowance in each ledger first;
//! the router pulls funds under the pool lock and hands everything back if
//! the pool rejects the call.

mod settlement;
mod single_hop;

pub use single_hop::Router;
