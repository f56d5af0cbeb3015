//! Engine configuration.

use super::ShareConfig;
use crate::domain::{Amount, Ppm, PRECISION};
use crate::error::{EngineError, Result};

/// Immutable parameters for a full engine: curve pricing, fee rates,
/// router thresholds, and distribution shares.
///
/// [`EngineConfig::default`] supplies the standard parameter set;
/// partial configurations are written with struct-update syntax:
///
/// ```
/// use utbc_engine::config::EngineConfig;
/// use utbc_engine::domain::Ppm;
///
/// let config = EngineConfig {
///     slope_ppm: Ppm::new(100_000),
///     ..EngineConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
///
/// # Validation
///
/// - `price_initial` must be positive.
/// - Both fee fractions must be below 100%.
/// - The distribution shares must sum to one million ppm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    /// Curve spot price at zero supply, `PRECISION`-scaled.
    pub price_initial: Amount,
    /// Linear slope coefficient of the curve, `PPM`-scaled.
    pub slope_ppm: Ppm,
    /// Proportional pool fee deducted from swap inputs.
    pub fee_xyk_ppm: Ppm,
    /// Proportional router fee deducted from trade inputs.
    pub fee_router_ppm: Ppm,
    /// Smallest foreign amount the router accepts for a trade; also the
    /// fee manager's swap threshold.
    pub min_swap_foreign: Amount,
    /// Smallest foreign amount accepted while the pool is not yet live.
    pub min_initial_foreign: Amount,
    /// Mint distribution shares.
    pub shares: ShareConfig,
}

impl EngineConfig {
    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfiguration`] if `price_initial` is zero.
    /// - [`EngineError::InvalidFee`] if either fee is not below 100%.
    /// - [`EngineError::InvalidShares`] if the shares do not sum to PPM.
    pub fn validate(&self) -> Result<()> {
        if self.price_initial.is_zero() {
            return Err(EngineError::InvalidConfiguration(
                "initial price must be positive",
            ));
        }
        if !self.fee_xyk_ppm.is_fraction() {
            return Err(EngineError::InvalidFee("pool fee must be below 100%"));
        }
        if !self.fee_router_ppm.is_fraction() {
            return Err(EngineError::InvalidFee("router fee must be below 100%"));
        }
        self.shares.validate()
    }
}

impl Default for EngineConfig {
    /// The standard parameter set: 0.001 token initial price, slope of
    /// 1000 ppm, 0.3% pool fee, 0.2% router fee, 0.01 token trade
    /// minimum, and a 100 token floor for the very first mint.
    fn default() -> Self {
        Self {
            price_initial: Amount::new(PRECISION / 1_000),
            slope_ppm: Ppm::new(1_000),
            fee_xyk_ppm: Ppm::new(3_000),
            fee_router_ppm: Ppm::new(2_000),
            min_swap_foreign: Amount::new(PRECISION / 100),
            min_initial_foreign: Amount::from_tokens(100),
            shares: ShareConfig::default(),
        }
    }
}
