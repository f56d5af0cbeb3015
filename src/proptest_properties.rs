//! Property-based tests using `proptest` for engine invariant validation.
//!
//! Covered properties:
//!
//! 1. **Share conservation**: the four mint shares always sum to the
//!    total issued quantity.
//! 2. **Mint monotonicity**: supply and curve price never decrease
//!    across a mint.
//! 3. **Burn correctness**: supply decreases by exactly the burned
//!    amount and the spot price never rises.
//! 4. **Constant-product invariant**: `k` never decreases across a
//!    pool swap.
//! 5. **Router optimality**: the chosen route matches the larger of
//!    the two decision-time quotes.
//! 6. **POL monotonicity**: LP balance and contribution counters never
//!    decrease.
//! 7. **No profitable round trip**: buy-then-sell always returns less
//!    foreign than was paid in.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::EngineConfig;
use crate::domain::{Amount, Ppm, Route};
use crate::engine::Engine;
use crate::pools::XykPool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn fresh_engine() -> Engine {
    let Ok(engine) = Engine::new(EngineConfig::default()) else {
        panic!("valid engine");
    };
    engine
}

/// Engine with a live pool, bootstrapped by one curve mint.
fn live_engine(bootstrap_tokens: u128) -> Engine {
    let mut engine = fresh_engine();
    let Ok(_) = engine.swap_foreign_to_native(Amount::from_tokens(bootstrap_tokens), Amount::ZERO)
    else {
        panic!("bootstrap trade");
    };
    engine
}

fn live_pool(native: u128, foreign: u128) -> XykPool {
    let Ok(mut pool) = XykPool::new(Ppm::new(3_000)) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.add_liquidity(Amount::new(native), Amount::new(foreign)) else {
        panic!("bootstrap deposit");
    };
    pool
}

fn product(pool: &XykPool) -> primitive_types::U512 {
    crate::math::big::widen(pool.reserve_native().get())
        * crate::math::big::widen(pool.reserve_foreign().get())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    // -- 1. Share conservation ----------------------------------------------

    #[test]
    fn mint_shares_sum_to_total(foreign in 1u128..=10_000_000_000_000_000_000u128) {
        let engine = fresh_engine();
        if let Some(quote) = engine.minter().mint_quote(Amount::new(foreign)) {
            let sum = quote
                .user()
                .saturating_add(&quote.pol())
                .saturating_add(&quote.treasury())
                .saturating_add(&quote.team());
            prop_assert_eq!(sum, quote.minted());
        }
    }

    // -- 2. Mint monotonicity -----------------------------------------------

    #[test]
    fn mint_never_lowers_supply_or_price(
        bootstrap in 100u128..=50_000u128,
        tokens in 1u128..=50_000u128,
    ) {
        let mut engine = live_engine(bootstrap);
        let supply_before = engine.minter().supply();
        let price_before = engine.minter().spot_price();
        let Ok(mint) = engine.mint_native(Amount::from_tokens(tokens)) else {
            panic!("mint within envelope");
        };
        prop_assert!(engine.minter().supply() >= supply_before);
        prop_assert!(engine.minter().spot_price() >= price_before);
        // Slope is positive and something was minted, so strictly.
        prop_assert!(!mint.total_native().is_zero());
        prop_assert!(engine.minter().spot_price() > price_before);
    }

    // -- 3. Burn correctness ------------------------------------------------

    #[test]
    fn burn_reduces_supply_exactly(
        bootstrap in 100u128..=50_000u128,
        burn_fraction in 1u128..=100u128,
    ) {
        let mut engine = live_engine(bootstrap);
        let supply_before = engine.minter().supply();
        let price_before = engine.minter().spot_price();
        let burn = Amount::from_raw(
            supply_before.get() * primitive_types::U256::from(burn_fraction)
                / primitive_types::U256::from(100u64),
        );
        prop_assume!(!burn.is_zero());
        let Ok(out) = engine.burn_native(burn) else {
            panic!("burn within supply");
        };
        let Some(expected) = supply_before.checked_sub(&burn) else {
            panic!("subtraction within supply");
        };
        prop_assert_eq!(out.supply_after(), expected);
        prop_assert_eq!(engine.minter().supply(), expected);
        prop_assert!(engine.minter().spot_price() <= price_before);
    }

    // -- 4. Constant-product invariant ---------------------------------------

    #[test]
    fn pool_product_never_decreases(
        reserve_native in 1_000_000u128..=1_000_000_000_000u128,
        reserve_foreign in 1_000_000u128..=1_000_000_000_000u128,
        amount in 1_000u128..=1_000_000_000u128,
        foreign_side in proptest::bool::ANY,
    ) {
        let mut pool = live_pool(reserve_native, reserve_foreign);
        let k_before = product(&pool);
        let result = if foreign_side {
            pool.swap_foreign_to_native(Amount::new(amount), Amount::ZERO)
        } else {
            pool.swap_native_to_foreign(Amount::new(amount), Amount::ZERO)
        };
        if result.is_ok() {
            prop_assert!(product(&pool) >= k_before);
        } else {
            // A refused swap must leave the reserves untouched.
            prop_assert_eq!(product(&pool), k_before);
        }
    }

    // -- 5. Router optimality -----------------------------------------------

    #[test]
    fn router_takes_the_larger_quote(
        bootstrap in 100u128..=50_000u128,
        tokens in 1u128..=50_000u128,
    ) {
        let mut engine = live_engine(bootstrap);
        // Reconstruct the decision-time quotes on a clone.
        let probe = engine.clone();
        let foreign_in = Amount::from_tokens(tokens);
        let Ok(fee) = Ppm::new(2_000).apply(foreign_in, crate::domain::Rounding::Down) else {
            panic!("fee fits");
        };
        let Some(net) = foreign_in.checked_sub(&fee) else {
            panic!("net fits");
        };
        let utbc_user = probe
            .minter()
            .mint_quote(net)
            .map_or(Amount::ZERO, |q| q.user());
        let xyk_out = probe.pool().quote_native_out(net);

        if let Ok(out) = engine.swap_foreign_to_native(foreign_in, Amount::ZERO) {
            match out.route() {
                Route::Utbc => prop_assert!(utbc_user >= xyk_out),
                Route::Xyk => prop_assert!(xyk_out > utbc_user),
            }
        }
    }

    // -- 6. POL monotonicity --------------------------------------------------

    #[test]
    fn pol_counters_never_decrease(
        bootstrap in 100u128..=10_000u128,
        trades in proptest::collection::vec(1u128..=5_000u128, 1..6),
    ) {
        let mut engine = live_engine(bootstrap);
        let mut lp = engine.pol().balance_lp();
        let mut native = engine.pol().contributed_native();
        let mut foreign = engine.pol().contributed_foreign();
        for tokens in trades {
            let _ = engine.swap_foreign_to_native(Amount::from_tokens(tokens), Amount::ZERO);
            prop_assert!(engine.pol().balance_lp() >= lp);
            prop_assert!(engine.pol().contributed_native() >= native);
            prop_assert!(engine.pol().contributed_foreign() >= foreign);
            lp = engine.pol().balance_lp();
            native = engine.pol().contributed_native();
            foreign = engine.pol().contributed_foreign();
        }
    }

    // -- 7. No profitable round trip ------------------------------------------

    #[test]
    fn round_trip_always_loses(
        bootstrap in 100u128..=50_000u128,
        tokens in 1u128..=10_000u128,
    ) {
        let mut engine = live_engine(bootstrap);
        let foreign_in = Amount::from_tokens(tokens);
        let Ok(bought) = engine.swap_foreign_to_native(foreign_in, Amount::ZERO) else {
            // Sub-threshold or unroutable inputs are outside this property.
            return Ok(());
        };
        let Ok(sold) = engine.swap_native_to_foreign(bought.amount_out(), Amount::ZERO) else {
            return Ok(());
        };
        prop_assert!(sold.amount_out() < foreign_in);
    }
}
