//! Constant-product pool implementation.
//!
//! The swap invariant is `x * y = k` where `x` and `y` are the native
//! and foreign reserves. Fees are deducted from the input amount before
//! the pricing formula is applied:
//!
//! 1. `in_after_fee = amount_in * (PPM - fee_ppm)`
//! 2. `out = in_after_fee * reserve_out / (reserve_in * PPM + in_after_fee)`
//!
//! with floor division throughout, so `k` never decreases across a swap
//! (strictly increases whenever `fee_ppm > 0`).
//!
//! # Lifecycle
//!
//! A pool starts *empty* (both reserves and the LP supply zero) and
//! becomes *live* on the first successful
//! [`XykPool::add_liquidity`], which seeds the LP supply with
//! `sqrt(native * foreign)`. Once live, neither swaps nor top-ups can
//! drain a reserve to zero.

use crate::domain::{Amount, LiquidityOutcome, Ppm, Rounding, SwapOutcome, PPM, PRECISION};
use crate::error::{EngineError, Result};
use crate::math::{mul_div, sqrt_product, CheckedArithmetic};

/// A constant-product pool holding native/foreign reserves and the
/// outstanding LP supply.
///
/// # Example
///
/// ```
/// use utbc_engine::domain::{Amount, Ppm};
/// use utbc_engine::pools::XykPool;
///
/// let mut pool = XykPool::new(Ppm::new(3_000)).expect("fee below 100%");
/// assert!(!pool.has_liquidity());
///
/// pool.add_liquidity(Amount::from_tokens(10), Amount::from_tokens(20))
///     .expect("bootstrap");
/// assert!(pool.has_liquidity());
///
/// let out = pool
///     .swap_foreign_to_native(Amount::from_tokens(1), Amount::ZERO)
///     .expect("swap");
/// assert!(!out.amount_out().is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XykPool {
    fee_ppm: Ppm,
    reserve_native: Amount,
    reserve_foreign: Amount,
    supply_lp: Amount,
}

impl XykPool {
    /// Creates an empty pool with the given proportional fee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidFee`] if `fee_ppm` is not below 100%.
    pub fn new(fee_ppm: Ppm) -> Result<Self> {
        if !fee_ppm.is_fraction() {
            return Err(EngineError::InvalidFee("pool fee must be below 100%"));
        }
        Ok(Self {
            fee_ppm,
            reserve_native: Amount::ZERO,
            reserve_foreign: Amount::ZERO,
            supply_lp: Amount::ZERO,
        })
    }

    /// Returns the pool fee.
    pub const fn fee_ppm(&self) -> Ppm {
        self.fee_ppm
    }

    /// Returns the native reserve.
    pub const fn reserve_native(&self) -> Amount {
        self.reserve_native
    }

    /// Returns the foreign reserve.
    pub const fn reserve_foreign(&self) -> Amount {
        self.reserve_foreign
    }

    /// Returns the outstanding LP supply.
    pub const fn supply_lp(&self) -> Amount {
        self.supply_lp
    }

    /// Returns `true` if both reserves are strictly positive.
    #[must_use]
    pub fn has_liquidity(&self) -> bool {
        !self.reserve_native.is_zero() && !self.reserve_foreign.is_zero()
    }

    /// Returns the spot price, foreign-per-native at `PRECISION` scale.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PoolNotInitialized`] if the pool is not live.
    pub fn spot_price(&self) -> Result<Amount> {
        if !self.has_liquidity() {
            return Err(EngineError::PoolNotInitialized);
        }
        mul_div(
            self.reserve_foreign,
            Amount::new(PRECISION),
            self.reserve_native,
            Rounding::Down,
        )
    }

    /// Quotes the native output for a foreign input. Returns zero when
    /// the input is zero or the pool is not live.
    pub fn quote_native_out(&self, foreign_in: Amount) -> Amount {
        self.quote(foreign_in, self.reserve_foreign, self.reserve_native)
    }

    /// Quotes the foreign output for a native input. Returns zero when
    /// the input is zero or the pool is not live.
    pub fn quote_foreign_out(&self, native_in: Amount) -> Amount {
        self.quote(native_in, self.reserve_native, self.reserve_foreign)
    }

    /// Fee-adjusted constant-product quote. Zero on any degenerate input.
    fn quote(&self, amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Amount {
        if amount_in.is_zero() || !self.has_liquidity() {
            return Amount::ZERO;
        }
        let ppm = Amount::new(u128::from(PPM));
        let after_fee = Amount::new(u128::from(self.fee_ppm.complement().get()));
        let Some(in_after_fee) = amount_in.checked_mul(&after_fee) else {
            return Amount::ZERO;
        };
        let Some(scaled_reserve) = reserve_in.checked_mul(&ppm) else {
            return Amount::ZERO;
        };
        let Some(denominator) = scaled_reserve.checked_add(&in_after_fee) else {
            return Amount::ZERO;
        };
        mul_div(in_after_fee, reserve_out, denominator, Rounding::Down).unwrap_or(Amount::ZERO)
    }

    /// Deposits liquidity.
    ///
    /// On an empty pool this is the bootstrap deposit: both amounts are
    /// consumed in full and the LP supply is seeded with
    /// `sqrt(native_in * foreign_in)`. On a live pool the deposit is
    /// proportional: LP is minted at the smaller of the two input/reserve
    /// ratios and the unconsumed residuals are reported back.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidAmount`] if either input is zero.
    /// - [`EngineError::InsufficientLiquidity`] if the deposit is too
    ///   small to mint a single LP unit.
    pub fn add_liquidity(&mut self, native_in: Amount, foreign_in: Amount) -> Result<LiquidityOutcome> {
        if native_in.is_zero() {
            return Err(EngineError::InvalidAmount("native amount must be positive"));
        }
        if foreign_in.is_zero() {
            return Err(EngineError::InvalidAmount("foreign amount must be positive"));
        }

        if self.supply_lp.is_zero() {
            let lp_minted = sqrt_product(native_in, foreign_in)?;
            if lp_minted.is_zero() {
                return Err(EngineError::InsufficientLiquidity);
            }
            self.reserve_native = native_in;
            self.reserve_foreign = foreign_in;
            self.supply_lp = lp_minted;
            return Ok(LiquidityOutcome::new(
                lp_minted,
                native_in,
                foreign_in,
                Amount::ZERO,
                Amount::ZERO,
            ));
        }

        let lp_from_native = mul_div(native_in, self.supply_lp, self.reserve_native, Rounding::Down)?;
        let lp_from_foreign =
            mul_div(foreign_in, self.supply_lp, self.reserve_foreign, Rounding::Down)?;
        let lp_minted = lp_from_native.min(lp_from_foreign);
        if lp_minted.is_zero() {
            return Err(EngineError::InsufficientLiquidity);
        }

        let native_used = mul_div(self.reserve_native, lp_minted, self.supply_lp, Rounding::Down)?;
        let foreign_used = mul_div(self.reserve_foreign, lp_minted, self.supply_lp, Rounding::Down)?;

        let new_reserve_native = self.reserve_native.safe_add(&native_used)?;
        let new_reserve_foreign = self.reserve_foreign.safe_add(&foreign_used)?;
        let new_supply_lp = self.supply_lp.safe_add(&lp_minted)?;
        let native_rest = native_in.safe_sub(&native_used)?;
        let foreign_rest = foreign_in.safe_sub(&foreign_used)?;

        self.reserve_native = new_reserve_native;
        self.reserve_foreign = new_reserve_foreign;
        self.supply_lp = new_supply_lp;

        Ok(LiquidityOutcome::new(
            lp_minted,
            native_used,
            foreign_used,
            native_rest,
            foreign_rest,
        ))
    }

    /// Swaps foreign units into native units.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidAmount`] if the input is zero.
    /// - [`EngineError::PoolNotInitialized`] if the pool is not live.
    /// - [`EngineError::SlippageExceeded`] if the output is below
    ///   `min_native_out`.
    /// - [`EngineError::InsufficientLiquidity`] if the output would be
    ///   zero or exceed the native reserve.
    pub fn swap_foreign_to_native(
        &mut self,
        foreign_in: Amount,
        min_native_out: Amount,
    ) -> Result<SwapOutcome> {
        if foreign_in.is_zero() {
            return Err(EngineError::InvalidAmount("swap amount must be positive"));
        }
        if !self.has_liquidity() {
            return Err(EngineError::PoolNotInitialized);
        }

        let price_before = self.spot_price()?;
        let native_out = self.quote_native_out(foreign_in);
        if native_out < min_native_out {
            return Err(EngineError::SlippageExceeded);
        }
        if native_out.is_zero() {
            return Err(EngineError::InsufficientLiquidity);
        }
        if native_out >= self.reserve_native {
            return Err(EngineError::InsufficientLiquidity);
        }

        let new_reserve_foreign = self.reserve_foreign.safe_add(&foreign_in)?;
        let new_reserve_native = self.reserve_native.safe_sub(&native_out)?;
        self.reserve_foreign = new_reserve_foreign;
        self.reserve_native = new_reserve_native;

        let price_after = self.spot_price()?;
        let price_impact_ppm = Self::price_impact(price_before, price_after)?;
        Ok(SwapOutcome::new(
            foreign_in,
            native_out,
            price_before,
            price_after,
            price_impact_ppm,
        ))
    }

    /// Swaps native units into foreign units.
    ///
    /// # Errors
    ///
    /// Mirrors [`swap_foreign_to_native`](Self::swap_foreign_to_native)
    /// with the reserves exchanged.
    pub fn swap_native_to_foreign(
        &mut self,
        native_in: Amount,
        min_foreign_out: Amount,
    ) -> Result<SwapOutcome> {
        if native_in.is_zero() {
            return Err(EngineError::InvalidAmount("swap amount must be positive"));
        }
        if !self.has_liquidity() {
            return Err(EngineError::PoolNotInitialized);
        }

        let price_before = self.spot_price()?;
        let foreign_out = self.quote_foreign_out(native_in);
        if foreign_out < min_foreign_out {
            return Err(EngineError::SlippageExceeded);
        }
        if foreign_out.is_zero() {
            return Err(EngineError::InsufficientLiquidity);
        }
        if foreign_out >= self.reserve_foreign {
            return Err(EngineError::InsufficientLiquidity);
        }

        let new_reserve_native = self.reserve_native.safe_add(&native_in)?;
        let new_reserve_foreign = self.reserve_foreign.safe_sub(&foreign_out)?;
        self.reserve_native = new_reserve_native;
        self.reserve_foreign = new_reserve_foreign;

        let price_after = self.spot_price()?;
        let price_impact_ppm = Self::price_impact(price_before, price_after)?;
        Ok(SwapOutcome::new(
            native_in,
            foreign_out,
            price_before,
            price_after,
            price_impact_ppm,
        ))
    }

    /// `|after - before| * PPM / before`, zero when `before` is zero.
    fn price_impact(before: Amount, after: Amount) -> Result<Amount> {
        if before.is_zero() {
            return Ok(Amount::ZERO);
        }
        let diff = before.max(after).safe_sub(&before.min(after))?;
        mul_div(diff, Amount::new(u128::from(PPM)), before, Rounding::Down)
    }
}
