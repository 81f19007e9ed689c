//! Liquidity lifecycle example.
//!
//! Registers two assets, opens a 0.30% pool through the router, trades in
//! both directions, and redeems the provider's shares.  Pool and ledger
//! events are logged through `tracing`.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=pairswap=debug cargo run --example liquidity_lifecycle
//! ```

use std::sync::Arc;

use pairswap::asset::AssetDirectory;
use pairswap::config::PoolConfig;
use pairswap::domain::{AccountId, Amount, AssetId, Decimals, FeeTier};
use pairswap::factory::PoolRegistry;
use pairswap::router::Router;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("=== Pair pool lifecycle (x · y = k) ===\n");

    // ── 1. Register assets ──────────────────────────────────────────────
    let assets = Arc::new(AssetDirectory::new());
    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    let usdc_ledger = assets.create_asset(usdc, "USD Coin", "USDC", Decimals::new(6)?)?;
    let weth_ledger = assets.create_asset(weth, "Wrapped Ether", "WETH", Decimals::MAX)?;
    println!(
        "Assets: {} ({} dp), {} ({} dp)",
        usdc_ledger.symbol(),
        usdc_ledger.decimals().get(),
        weth_ledger.symbol(),
        weth_ledger.decimals().get(),
    );

    // ── 2. Registry and router ──────────────────────────────────────────
    let config = PoolConfig::default().with_fee_tier(FeeTier::TIER_0_30_PERCENT)?;
    let registry = Arc::new(PoolRegistry::new(Arc::clone(&assets), config)?);
    let router = Router::new(Arc::clone(&registry), AccountId::from_bytes([0x70; 32]));

    // ── 3. Fund a provider and a trader ─────────────────────────────────
    let alice = AccountId::from_bytes([0xa1; 32]);
    let bob = AccountId::from_bytes([0xb0; 32]);
    for holder in [alice, bob] {
        usdc_ledger.mint(holder, usdc_ledger.decimals().units(1_000_000))?;
        weth_ledger.mint(holder, weth_ledger.decimals().units(1_000))?;
        usdc_ledger.approve(holder, router.account(), Amount::MAX)?;
        weth_ledger.approve(holder, router.account(), Amount::MAX)?;
    }

    // ── 4. Seed the pool: 200 000 USDC against 100 WETH ─────────────────
    let shares = router.add_liquidity(
        alice,
        usdc,
        weth,
        usdc_ledger.decimals().units(200_000),
        weth_ledger.decimals().units(100),
        alice,
    )?;
    let pool = registry.require(usdc, weth)?;
    info!(pool = %pool.account(), shares = %shares, "pool seeded");
    println!("\n--- Seed ---");
    println!("  Shares minted: {shares}");
    println!("  Share asset:   {}", pool.share_asset().symbol());
    println!("  Status:        {}", pool.status()?);

    // ── 5. Quote, then sell 5 000 USDC ──────────────────────────────────
    let sell = usdc_ledger.decimals().units(5_000);
    let quoted = router.quote_swap(usdc, weth, sell)?;
    let result = router.swap(bob, usdc, weth, sell, bob)?;
    println!("\n--- Swap: sell 5 000 USDC ---");
    println!("  Quoted out:    {quoted}");
    println!("  Amount out:    {}", result.amount_out());
    println!("  Fee paid:      {}", result.fee());

    // ── 6. Sell the WETH back ───────────────────────────────────────────
    let back = router.swap(bob, weth, usdc, result.amount_out(), bob)?;
    println!("\n--- Swap: sell {} WETH units ---", result.amount_out());
    println!("  Amount out:    {}", back.amount_out());
    let (reserve_usdc, reserve_weth) = router.reserves(usdc, weth)?;
    println!("  Reserves:      {reserve_usdc} USDC / {reserve_weth} WETH");

    // ── 7. A second deposit at the current ratio ────────────────────────
    let desired = (usdc_ledger.decimals().units(10_000), weth_ledger.decimals().units(10));
    let (take_usdc, take_weth) = router.quote_liquidity(usdc, weth, desired.0, desired.1)?;
    let bob_shares = router.add_liquidity(bob, usdc, weth, desired.0, desired.1, bob)?;
    println!("\n--- Deposit at ratio ---");
    println!("  Transferred:   {take_usdc} USDC + {take_weth} WETH");
    println!("  Shares minted: {bob_shares}");

    // ── 8. Redeem the provider's shares ─────────────────────────────────
    pool.share_asset().approve(alice, router.account(), shares)?;
    let (out_usdc, out_weth) = router.remove_liquidity(alice, usdc, weth, shares, alice)?;
    println!("\n--- Remove ---");
    println!("  Returned:      {out_usdc} USDC + {out_weth} WETH");
    println!("  Total shares:  {}", pool.total_shares()?);

    println!("\n=== Done ===");
    Ok(())
}
