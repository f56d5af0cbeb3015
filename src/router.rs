//! Best-route front-end for external trades.
//!
//! Every trade enters here. The router validates thresholds, deducts
//! its proportional fee, quotes both execution branches on the net
//! amount, and executes whichever delivers more native to the user:
//! the bonding-curve mint (UTBC) or the pool swap (XYK). Ties prefer
//! the curve. Native sales have a single branch, the pool, because the
//! curve is unidirectional.
//!
//! Within one trade the side effects run in a fixed order: fee
//! deduction, quotes, fee forwarding, branch execution. Every failure
//! is raised before the first state write, so a caller observes either
//! the whole trade or nothing.

use crate::domain::{Amount, Ppm, Route, RouteOutcome, Rounding, PRECISION};
use crate::error::{EngineError, Result};
use crate::fees::FeeManager;
use crate::math::{mul_div, CheckedArithmetic};
use crate::minter::UtbcMinter;
use crate::pol::PolManager;
use crate::pools::XykPool;

/// Stateless dispatcher over the minter, pool, and fee manager.
///
/// Holds only the routing parameters; the peers arrive as `&mut`
/// arguments so the component graph stays acyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartRouter {
    fee_router_ppm: Ppm,
    min_swap_foreign: Amount,
    min_initial_foreign: Amount,
}

impl SmartRouter {
    /// Creates a router.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidFee`] if the router fee is not
    /// below 100%.
    pub fn new(
        fee_router_ppm: Ppm,
        min_swap_foreign: Amount,
        min_initial_foreign: Amount,
    ) -> Result<Self> {
        if !fee_router_ppm.is_fraction() {
            return Err(EngineError::InvalidFee("router fee must be below 100%"));
        }
        Ok(Self {
            fee_router_ppm,
            min_swap_foreign,
            min_initial_foreign,
        })
    }

    /// Returns the router fee.
    pub const fn fee_router_ppm(&self) -> Ppm {
        self.fee_router_ppm
    }

    /// Returns the general trade minimum.
    pub const fn min_swap_foreign(&self) -> Amount {
        self.min_swap_foreign
    }

    /// Returns the floor for the very first mint.
    pub const fn min_initial_foreign(&self) -> Amount {
        self.min_initial_foreign
    }

    /// Trades foreign units for native units through the better branch.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidAmount`] for a zero input or one fully
    ///   consumed by the router fee.
    /// - [`EngineError::BelowMinimum`] below the trade minimum, or below
    ///   the initial-mint floor while the pool is not live.
    /// - [`EngineError::SlippageExceeded`] when the pool quoted a
    ///   positive output but no branch clears `min_native_out`.
    /// - [`EngineError::NoRoute`] when no branch produces any output.
    #[allow(clippy::too_many_arguments)]
    pub fn swap_foreign_to_native(
        &self,
        pool: &mut XykPool,
        minter: &mut UtbcMinter,
        pol: &mut PolManager,
        fees: &mut FeeManager,
        foreign_in: Amount,
        min_native_out: Amount,
    ) -> Result<RouteOutcome> {
        if foreign_in.is_zero() {
            return Err(EngineError::InvalidAmount("swap amount must be positive"));
        }
        if foreign_in < self.min_swap_foreign {
            return Err(EngineError::BelowMinimum("swap below minimum foreign amount"));
        }
        if !pool.has_liquidity() && foreign_in < self.min_initial_foreign {
            return Err(EngineError::BelowMinimum(
                "initial mint requires minimum foreign amount",
            ));
        }

        let router_fee = self.fee_router_ppm.apply(foreign_in, Rounding::Down)?;
        let foreign_net = foreign_in.safe_sub(&router_fee)?;
        if foreign_net.is_zero() {
            return Err(EngineError::InvalidAmount(
                "amount net of router fee must be positive",
            ));
        }

        let utbc_user = minter
            .mint_quote(foreign_net)
            .map_or(Amount::ZERO, |quote| quote.user());
        let xyk_out = if pool.has_liquidity() {
            pool.quote_native_out(foreign_net)
        } else {
            Amount::ZERO
        };

        let utbc_viable = !utbc_user.is_zero() && utbc_user >= min_native_out;
        let xyk_viable = !xyk_out.is_zero() && xyk_out >= min_native_out;
        let route = if utbc_viable && (!xyk_viable || utbc_user >= xyk_out) {
            Route::Utbc
        } else if xyk_viable {
            Route::Xyk
        } else if !xyk_out.is_zero() {
            return Err(EngineError::SlippageExceeded);
        } else {
            return Err(EngineError::NoRoute);
        };

        fees.receive_fee_foreign(pool, minter, router_fee);

        match route {
            Route::Utbc => {
                let mint = minter.mint_native(pol, pool, foreign_net)?;
                Ok(RouteOutcome::minted(foreign_in, router_fee, mint))
            }
            Route::Xyk => {
                let swap = pool.swap_foreign_to_native(foreign_net, min_native_out)?;
                Ok(RouteOutcome::swapped(foreign_in, router_fee, swap))
            }
        }
    }

    /// Trades native units for foreign units through the pool.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidAmount`] for a zero input.
    /// - [`EngineError::PoolNotInitialized`] while the pool is not live.
    /// - [`EngineError::InsufficientLiquidity`] when the pool spot price
    ///   floors to zero.
    /// - [`EngineError::BelowMinimum`] when the net input is worth less
    ///   than the trade minimum at the spot price.
    /// - [`EngineError::SlippageExceeded`] from the pool when the output
    ///   misses `min_foreign_out`.
    pub fn swap_native_to_foreign(
        &self,
        pool: &mut XykPool,
        minter: &mut UtbcMinter,
        fees: &mut FeeManager,
        native_in: Amount,
        min_foreign_out: Amount,
    ) -> Result<RouteOutcome> {
        if native_in.is_zero() {
            return Err(EngineError::InvalidAmount("swap amount must be positive"));
        }
        if !pool.has_liquidity() {
            return Err(EngineError::PoolNotInitialized);
        }

        let router_fee = self.fee_router_ppm.apply(native_in, Rounding::Down)?;
        let native_net = native_in.safe_sub(&router_fee)?;
        let price_spot = pool.spot_price()?;
        if price_spot.is_zero() {
            return Err(EngineError::InsufficientLiquidity);
        }
        let net_as_foreign = mul_div(
            native_net,
            price_spot,
            Amount::new(PRECISION),
            Rounding::Down,
        )?;
        if net_as_foreign < self.min_swap_foreign {
            return Err(EngineError::BelowMinimum(
                "sale below minimum foreign value",
            ));
        }

        fees.receive_fee_native(minter, router_fee);

        let swap = pool.swap_native_to_foreign(native_net, min_foreign_out)?;
        Ok(RouteOutcome::swapped(native_in, router_fee, swap))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ShareConfig;
    use crate::domain::RouteDetail;

    struct Parts {
        pool: XykPool,
        minter: UtbcMinter,
        pol: PolManager,
        fees: FeeManager,
        router: SmartRouter,
    }

    fn parts() -> Parts {
        let Ok(pool) = XykPool::new(Ppm::new(3_000)) else {
            panic!("expected pool");
        };
        let Ok(minter) = UtbcMinter::new(
            Amount::new(1_000_000_000),
            Ppm::new(1_000),
            ShareConfig::default(),
        ) else {
            panic!("expected minter");
        };
        let Ok(router) = SmartRouter::new(
            Ppm::new(2_000),
            Amount::new(10_000_000_000),
            Amount::from_tokens(100),
        ) else {
            panic!("expected router");
        };
        Parts {
            pool,
            minter,
            pol: PolManager::new(),
            fees: FeeManager::new(Amount::new(10_000_000_000)),
            router,
        }
    }

    fn buy(parts: &mut Parts, foreign_in: Amount, min_out: Amount) -> Result<RouteOutcome> {
        parts.router.swap_foreign_to_native(
            &mut parts.pool,
            &mut parts.minter,
            &mut parts.pol,
            &mut parts.fees,
            foreign_in,
            min_out,
        )
    }

    fn sell(parts: &mut Parts, native_in: Amount, min_out: Amount) -> Result<RouteOutcome> {
        parts.router.swap_native_to_foreign(
            &mut parts.pool,
            &mut parts.minter,
            &mut parts.fees,
            native_in,
            min_out,
        )
    }

    // -- validation -----------------------------------------------------------

    #[test]
    fn zero_input_rejected() {
        let mut p = parts();
        let r = buy(&mut p, Amount::ZERO, Amount::ZERO);
        assert!(matches!(r, Err(EngineError::InvalidAmount(_))));
    }

    #[test]
    fn below_trade_minimum_rejected() {
        let mut p = parts();
        let r = buy(&mut p, Amount::new(9_999_999_999), Amount::ZERO);
        assert!(matches!(r, Err(EngineError::BelowMinimum(_))));
    }

    #[test]
    fn initial_mint_floor_enforced() {
        let mut p = parts();
        // Above the trade minimum but below the 100 token initial floor.
        let r = buy(&mut p, Amount::from_tokens(50), Amount::ZERO);
        assert!(matches!(r, Err(EngineError::BelowMinimum(_))));
        assert_eq!(p.minter.supply(), Amount::ZERO);
        assert_eq!(p.fees.fees_foreign(), Amount::ZERO);
    }

    #[test]
    fn full_fee_router_rejected() {
        let r = SmartRouter::new(Ppm::ONE, Amount::ZERO, Amount::ZERO);
        assert!(matches!(r, Err(EngineError::InvalidFee(_))));
    }

    // -- foreign-to-native routing --------------------------------------------

    #[test]
    fn first_buy_routes_through_the_curve() {
        let mut p = parts();
        let Ok(out) = buy(&mut p, Amount::from_tokens(10_000), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(out.route(), Route::Utbc);
        assert_eq!(out.router_fee(), Amount::new(20_000_000_000_000));
        assert_eq!(out.amount_out(), Amount::new(1_488_885_741_997_137));
        assert!(matches!(out.detail(), RouteDetail::Mint(_)));
        assert!(p.pool.has_liquidity());
        assert!(p.pol.balance_lp() > Amount::ZERO);
        assert_eq!(p.fees.fees_foreign(), Amount::new(20_000_000_000_000));
    }

    #[test]
    fn router_picks_the_larger_output() {
        let mut p = parts();
        let Ok(_) = buy(&mut p, Amount::from_tokens(10_000), Amount::ZERO) else {
            panic!("expected bootstrap buy");
        };
        // After the bootstrap the pool sells native at roughly a third of
        // the user-effective curve price, so the follow-up buy must take
        // the pool branch.
        let foreign_net = Amount::new(998_000_000_000_000);
        let utbc_user = p
            .minter
            .mint_quote(foreign_net)
            .map_or(Amount::ZERO, |q| q.user());
        let xyk_out = p.pool.quote_native_out(foreign_net);
        assert!(xyk_out > utbc_user);
        let Ok(out) = buy(&mut p, Amount::from_tokens(1_000), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(out.route(), Route::Xyk);
        // The pending foreign fee buffer was swapped in before execution,
        // which nudges the executed output just under the pre-trade quote.
        assert_eq!(out.amount_out(), Amount::new(134_418_537_367_867));
    }

    #[test]
    fn min_native_out_failure_is_slippage_when_pool_quotes() {
        let mut p = parts();
        let Ok(_) = buy(&mut p, Amount::from_tokens(10_000), Amount::ZERO) else {
            panic!("expected bootstrap buy");
        };
        let r = buy(
            &mut p,
            Amount::from_tokens(1_000),
            Amount::from_tokens(100_000_000),
        );
        assert!(matches!(r, Err(EngineError::SlippageExceeded)));
    }

    #[test]
    fn no_route_when_nothing_quotes() {
        let Ok(pool) = XykPool::new(Ppm::new(3_000)) else {
            panic!("expected pool");
        };
        // A curve so expensive that a minimum-sized payment mints zero.
        let Ok(minter) = UtbcMinter::new(
            Amount::from_raw(primitive_types::U256::one() << 200usize),
            Ppm::ZERO,
            ShareConfig::default(),
        ) else {
            panic!("expected minter");
        };
        let Ok(router) = SmartRouter::new(Ppm::new(2_000), Amount::new(1), Amount::new(1)) else {
            panic!("expected router");
        };
        let mut p = Parts {
            pool,
            minter,
            pol: PolManager::new(),
            fees: FeeManager::new(Amount::new(1)),
            router,
        };
        let r = buy(&mut p, Amount::new(1_000), Amount::ZERO);
        assert!(matches!(r, Err(EngineError::NoRoute)));
    }

    // -- native-to-foreign ----------------------------------------------------

    #[test]
    fn sell_requires_live_pool() {
        let mut p = parts();
        let r = sell(&mut p, Amount::from_tokens(1), Amount::ZERO);
        assert!(matches!(r, Err(EngineError::PoolNotInitialized)));
    }

    #[test]
    fn sell_executes_through_the_pool() {
        let mut p = parts();
        let Ok(bought) = buy(&mut p, Amount::from_tokens(10_000), Amount::ZERO) else {
            panic!("expected buy");
        };
        let Ok(out) = sell(&mut p, bought.amount_out(), Amount::ZERO) else {
            panic!("expected sell");
        };
        assert_eq!(out.route(), Route::Xyk);
        assert!(!out.amount_out().is_zero());
        assert!(matches!(out.detail(), RouteDetail::Swap(_)));
        // The router fee was forwarded as a native fee and burned.
        assert!(p.fees.fees_native() > Amount::ZERO);
        assert!(p.fees.total_native_burned() > Amount::ZERO);
    }

    #[test]
    fn sell_below_minimum_value_rejected() {
        let mut p = parts();
        let Ok(_) = buy(&mut p, Amount::from_tokens(10_000), Amount::ZERO) else {
            panic!("expected buy");
        };
        // A dust sale whose foreign value is far below the minimum.
        let r = sell(&mut p, Amount::new(1_000), Amount::ZERO);
        assert!(matches!(r, Err(EngineError::BelowMinimum(_))));
    }

    #[test]
    fn sell_slippage_propagates() {
        let mut p = parts();
        let Ok(bought) = buy(&mut p, Amount::from_tokens(10_000), Amount::ZERO) else {
            panic!("expected buy");
        };
        let r = sell(&mut p, bought.amount_out(), Amount::from_tokens(1_000_000));
        assert!(matches!(r, Err(EngineError::SlippageExceeded)));
    }
}
