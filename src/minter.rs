//! Unidirectional bonding-curve minter.
//!
//! The curve prices native supply linearly: the spot price at supply
//! `s` is `price_initial + slope_ppm * s / PPM`. A mint for a foreign
//! payment `f` issues the largest quantity whose cumulative cost along
//! the curve does not exceed `f`, found by solving the integer
//! quadratic
//!
//! ```text
//! slope * d^2 + 2 * (price_initial * PPM + slope * s) * d - 2 * f * PPM * PRECISION = 0
//! ```
//!
//! for `d` with an exact 512-bit discriminant. The curve is
//! unidirectional: supply leaves only through
//! [`UtbcMinter::burn_native`], never by swapping back along the curve.
//!
//! Issued supply is distributed by fixed shares among the buyer, the
//! POL manager, the treasury, and the team; the team share carries the
//! rounding remainder so the four parts always sum to the total.

use primitive_types::U256;

use crate::config::ShareConfig;
use crate::domain::{
    Amount, BurnOutcome, MintOutcome, MintQuote, Ppm, Rounding, PPM, PRECISION,
};
use crate::error::{EngineError, Result};
use crate::math::big::{narrow, widen};
use crate::math::{isqrt, mul_div, CheckedArithmetic};
use crate::pol::PolManager;
use crate::pools::XykPool;

/// Linear bonding-curve issuer of the native token.
///
/// Holds the immutable curve parameters and distribution shares, the
/// outstanding supply, and the cumulative treasury/team accumulators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtbcMinter {
    price_initial: Amount,
    slope_ppm: Ppm,
    shares: ShareConfig,
    supply: Amount,
    treasury: Amount,
    team: Amount,
}

impl UtbcMinter {
    /// Creates a minter at zero supply.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfiguration`] if `price_initial` is zero.
    /// - [`EngineError::InvalidShares`] if the shares do not sum to PPM.
    pub fn new(price_initial: Amount, slope_ppm: Ppm, shares: ShareConfig) -> Result<Self> {
        if price_initial.is_zero() {
            return Err(EngineError::InvalidConfiguration(
                "initial price must be positive",
            ));
        }
        shares.validate()?;
        Ok(Self {
            price_initial,
            slope_ppm,
            shares,
            supply: Amount::ZERO,
            treasury: Amount::ZERO,
            team: Amount::ZERO,
        })
    }

    /// Returns the curve price at zero supply.
    pub const fn price_initial(&self) -> Amount {
        self.price_initial
    }

    /// Returns the curve slope coefficient.
    pub const fn slope_ppm(&self) -> Ppm {
        self.slope_ppm
    }

    /// Returns the distribution shares.
    pub const fn shares(&self) -> ShareConfig {
        self.shares
    }

    /// Returns the outstanding native supply.
    pub const fn supply(&self) -> Amount {
        self.supply
    }

    /// Returns the cumulative treasury allocation.
    pub const fn treasury(&self) -> Amount {
        self.treasury
    }

    /// Returns the cumulative team allocation.
    pub const fn team(&self) -> Amount {
        self.team
    }

    /// Returns the curve spot price at the current supply.
    pub fn spot_price(&self) -> Amount {
        let slope_term = mul_div(
            self.supply,
            Amount::new(u128::from(self.slope_ppm.get())),
            Amount::new(u128::from(PPM)),
            Rounding::Down,
        )
        .unwrap_or(Amount::ZERO);
        self.price_initial.saturating_add(&slope_term)
    }

    /// Computes the quantity the curve issues for a foreign payment.
    ///
    /// Returns zero for a zero payment or when the solve yields no
    /// positive quantity.
    pub fn calculate_mint(&self, foreign_in: Amount) -> Amount {
        if foreign_in.is_zero() {
            return Amount::ZERO;
        }
        if self.slope_ppm.is_zero() {
            // Flat curve: d = f * PRECISION / price_initial.
            return mul_div(
                foreign_in,
                Amount::new(PRECISION),
                self.price_initial,
                Rounding::Down,
            )
            .unwrap_or(Amount::ZERO);
        }
        self.solve_curve(foreign_in).unwrap_or(Amount::ZERO)
    }

    /// Solves the mint quadratic. `None` on any overflow outside the
    /// supported parameter envelope, which callers treat as a zero
    /// quote.
    fn solve_curve(&self, foreign_in: Amount) -> Option<Amount> {
        let slope = U256::from(self.slope_ppm.get());
        let ppm = U256::from(PPM);
        let two = U256::from(2u64);

        // b = 2 * (price_initial * PPM + slope * supply)
        let price_term = self.price_initial.get().checked_mul(ppm)?;
        let slope_term = slope.checked_mul(self.supply.get())?;
        let b = price_term.checked_add(slope_term)?.checked_mul(two)?;

        // |c| = 2 * f * PPM * PRECISION; c itself is negative, its sign
        // folds into the discriminant addition below.
        let c_abs = foreign_in
            .get()
            .checked_mul(ppm)?
            .checked_mul(U256::from(PRECISION))?
            .checked_mul(two)?;

        // disc = b^2 + 4 * slope * |c|, kept in 512 bits.
        let b_squared = widen(b).checked_mul(widen(b))?;
        let four_a_c = widen(slope.checked_mul(U256::from(4u64))?).checked_mul(widen(c_abs))?;
        let disc = b_squared.checked_add(four_a_c)?;

        let root = narrow(isqrt(disc)).ok()?;
        if root <= b {
            return Some(Amount::ZERO);
        }
        let delta = (root - b) / slope.checked_mul(two)?;
        Some(Amount::from_raw(delta))
    }

    /// Returns the full mint quote for a foreign payment, or `None`
    /// when the curve would issue nothing.
    pub fn mint_quote(&self, foreign_in: Amount) -> Option<MintQuote> {
        let minted = self.calculate_mint(foreign_in);
        if minted.is_zero() {
            return None;
        }
        self.quote_for(minted).ok()
    }

    /// Splits `minted` into the four distribution shares. The team
    /// share carries the remainder, so the parts sum to `minted`
    /// exactly.
    fn quote_for(&self, minted: Amount) -> Result<MintQuote> {
        let user = self.shares.user_ppm.apply(minted, Rounding::Down)?;
        let pol = self.shares.pol_ppm.apply(minted, Rounding::Down)?;
        let treasury = self.shares.treasury_ppm.apply(minted, Rounding::Down)?;
        let team = minted
            .safe_sub(&user)?
            .safe_sub(&pol)?
            .safe_sub(&treasury)?;
        Ok(MintQuote::new(minted, user, pol, treasury, team))
    }

    /// Executes a mint for a foreign payment.
    ///
    /// Issues the curve quantity, credits the treasury and team
    /// accumulators, and hands the POL share together with the **full**
    /// foreign payment to the POL manager. All fallible arithmetic runs
    /// before any state is written.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAmount`] when the payment mints
    /// nothing.
    pub fn mint_native(
        &mut self,
        pol: &mut PolManager,
        pool: &mut XykPool,
        foreign_in: Amount,
    ) -> Result<MintOutcome> {
        let minted = self.calculate_mint(foreign_in);
        if minted.is_zero() {
            return Err(EngineError::InvalidAmount("payment too small to mint"));
        }
        let quote = self.quote_for(minted)?;
        let price_before = self.spot_price();
        let new_supply = self.supply.safe_add(&minted)?;

        self.supply = new_supply;
        self.treasury = self.treasury.saturating_add(&quote.treasury());
        self.team = self.team.saturating_add(&quote.team());
        let price_after = self.spot_price();

        let pol_outcome = pol.add_liquidity(pool, quote.pol(), foreign_in);

        Ok(MintOutcome::new(
            foreign_in,
            minted,
            quote.user(),
            quote.pol(),
            quote.treasury(),
            quote.team(),
            price_before,
            price_after,
            pol_outcome,
        ))
    }

    /// Removes `amount` from the outstanding supply.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidAmount`] if `amount` is zero.
    /// - [`EngineError::SupplyExhausted`] if `amount` exceeds the supply.
    pub fn burn_native(&mut self, amount: Amount) -> Result<BurnOutcome> {
        if amount.is_zero() {
            return Err(EngineError::InvalidAmount("burn amount must be positive"));
        }
        if amount > self.supply {
            return Err(EngineError::SupplyExhausted);
        }
        let supply_before = self.supply;
        self.supply = supply_before.safe_sub(&amount)?;
        Ok(BurnOutcome::new(amount, supply_before, self.supply))
    }
}
