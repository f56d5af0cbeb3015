//! Protocol-owned-liquidity manager.
//!
//! Converts the minter's POL allocation and the buyer's full foreign
//! payment into a permanent LP position. While the pool is empty the
//! manager bootstraps it directly from everything it holds; once the
//! pool is live each contribution runs a two-step *zap*: a balanced
//! top-up at the pool ratio, then a swap of the remaining foreign side
//! into native.
//!
//! The manager never surfaces failure. Whatever the pool refuses stays
//! in the native/foreign buffers and rides along with the next
//! contribution; only a successful deposit or swap drains them. LP held
//! here is permanent: no operation reduces `balance_lp` or the
//! cumulative contribution counters.

use tracing::debug;

use crate::domain::{Amount, PolOutcome, Rounding};
use crate::math::mul_div;
use crate::pools::XykPool;

/// Accumulator of protocol-owned liquidity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolManager {
    balance_lp: Amount,
    contributed_native: Amount,
    contributed_foreign: Amount,
    buffer_native: Amount,
    buffer_foreign: Amount,
}

impl PolManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the LP units minted on the manager's behalf.
    pub const fn balance_lp(&self) -> Amount {
        self.balance_lp
    }

    /// Returns the cumulative native amount the pool has consumed.
    pub const fn contributed_native(&self) -> Amount {
        self.contributed_native
    }

    /// Returns the cumulative foreign amount the pool has consumed.
    pub const fn contributed_foreign(&self) -> Amount {
        self.contributed_foreign
    }

    /// Returns the parked native balance.
    pub const fn buffer_native(&self) -> Amount {
        self.buffer_native
    }

    /// Returns the parked foreign balance.
    pub const fn buffer_foreign(&self) -> Amount {
        self.buffer_foreign
    }

    /// Contributes `(native, foreign)` towards the LP position.
    ///
    /// Infallible by contract: every failure path parks the tokens in
    /// the buffers and reports zeros. The report aggregates LP minted
    /// and amounts consumed across both zap steps.
    pub fn add_liquidity(
        &mut self,
        pool: &mut XykPool,
        native: Amount,
        foreign: Amount,
    ) -> PolOutcome {
        let native_total = self.buffer_native.saturating_add(&native);
        let foreign_total = self.buffer_foreign.saturating_add(&foreign);

        if pool.has_liquidity() {
            self.zap(pool, native_total, foreign_total)
        } else {
            self.bootstrap(pool, native_total, foreign_total)
        }
    }

    /// First-liquidity path: the pool's initial ratio is set directly
    /// from everything the manager holds.
    fn bootstrap(
        &mut self,
        pool: &mut XykPool,
        native_total: Amount,
        foreign_total: Amount,
    ) -> PolOutcome {
        if native_total.is_zero() || foreign_total.is_zero() {
            self.buffer_native = native_total;
            self.buffer_foreign = foreign_total;
            return PolOutcome::default();
        }
        match pool.add_liquidity(native_total, foreign_total) {
            Ok(out) => {
                self.balance_lp = self.balance_lp.saturating_add(&out.lp_minted());
                self.contributed_native = self.contributed_native.saturating_add(&out.native_used());
                self.contributed_foreign =
                    self.contributed_foreign.saturating_add(&out.foreign_used());
                self.buffer_native = out.native_rest();
                self.buffer_foreign = out.foreign_rest();
                PolOutcome::new(out.lp_minted(), out.native_used(), out.foreign_used())
            }
            Err(err) => {
                debug!(%err, "pol bootstrap deferred, amounts parked");
                self.buffer_native = native_total;
                self.buffer_foreign = foreign_total;
                PolOutcome::default()
            }
        }
    }

    /// Live-pool path: balanced top-up first, then the foreign residual
    /// is swapped into native and parked.
    fn zap(&mut self, pool: &mut XykPool, native_total: Amount, foreign_total: Amount) -> PolOutcome {
        let mut native_rest = native_total;
        let mut foreign_rest = foreign_total;
        let mut lp_minted = Amount::ZERO;
        let mut native_used = Amount::ZERO;
        let mut foreign_used = Amount::ZERO;

        if !native_total.is_zero() && !foreign_total.is_zero() {
            if let Some((use_native, use_foreign)) =
                Self::balanced_pair(pool, native_total, foreign_total)
            {
                match pool.add_liquidity(use_native, use_foreign) {
                    Ok(out) => {
                        lp_minted = out.lp_minted();
                        native_used = out.native_used();
                        foreign_used = out.foreign_used();
                        self.balance_lp = self.balance_lp.saturating_add(&lp_minted);
                        self.contributed_native =
                            self.contributed_native.saturating_add(&native_used);
                        self.contributed_foreign =
                            self.contributed_foreign.saturating_add(&foreign_used);
                        native_rest = native_rest.checked_sub(&native_used).unwrap_or(Amount::ZERO);
                        foreign_rest =
                            foreign_rest.checked_sub(&foreign_used).unwrap_or(Amount::ZERO);
                    }
                    Err(err) => {
                        debug!(%err, "pol balanced top-up skipped");
                    }
                }
            }
        }

        if !foreign_rest.is_zero() && pool.has_liquidity() {
            match pool.swap_foreign_to_native(foreign_rest, Amount::ZERO) {
                Ok(swap) => {
                    native_rest = native_rest.saturating_add(&swap.amount_out());
                    self.contributed_foreign =
                        self.contributed_foreign.saturating_add(&foreign_rest);
                    foreign_rest = Amount::ZERO;
                }
                Err(err) => {
                    debug!(%err, "pol residual swap skipped");
                }
            }
        }

        self.buffer_native = native_rest;
        self.buffer_foreign = foreign_rest;
        PolOutcome::new(lp_minted, native_used, foreign_used)
    }

    /// Largest `(native, foreign)` pair at the pool's current ratio that
    /// fits inside the held totals.
    fn balanced_pair(
        pool: &XykPool,
        native_total: Amount,
        foreign_total: Amount,
    ) -> Option<(Amount, Amount)> {
        let foreign_by_native = mul_div(
            native_total,
            pool.reserve_foreign(),
            pool.reserve_native(),
            Rounding::Down,
        )
        .ok()?;
        let (use_native, use_foreign) = if foreign_by_native <= foreign_total {
            (native_total, foreign_by_native)
        } else {
            let native_by_foreign = mul_div(
                foreign_total,
                pool.reserve_native(),
                pool.reserve_foreign(),
                Rounding::Down,
            )
            .ok()?;
            (native_by_foreign, foreign_total)
        };
        if use_native.is_zero() || use_foreign.is_zero() {
            return None;
        }
        Some((use_native, use_foreign))
    }
}
