//! Mint distribution shares.

use crate::domain::{Ppm, PPM};
use crate::error::{EngineError, Result};

/// Distribution of freshly minted supply among the four recipients.
///
/// The four shares must sum to exactly [`PPM`]; distribution assigns
/// the floor of each of the first three shares and hands the remainder
/// to the team, so no unit is ever lost.
///
/// # Examples
///
/// ```
/// use utbc_engine::config::ShareConfig;
///
/// let shares = ShareConfig::default();
/// assert!(shares.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShareConfig {
    /// Share delivered to the buyer.
    pub user_ppm: Ppm,
    /// Share handed to the protocol-owned-liquidity manager.
    pub pol_ppm: Ppm,
    /// Share credited to the treasury accumulator.
    pub treasury_ppm: Ppm,
    /// Share credited to the team accumulator (carries the remainder).
    pub team_ppm: Ppm,
}

impl ShareConfig {
    /// Creates a validated share set.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShares`] if the shares do not sum
    /// to [`PPM`].
    pub fn new(user_ppm: Ppm, pol_ppm: Ppm, treasury_ppm: Ppm, team_ppm: Ppm) -> Result<Self> {
        let config = Self {
            user_ppm,
            pol_ppm,
            treasury_ppm,
            team_ppm,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates that the four shares sum to exactly [`PPM`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShares`] otherwise.
    pub fn validate(&self) -> Result<()> {
        let sum = u64::from(self.user_ppm.get())
            + u64::from(self.pol_ppm.get())
            + u64::from(self.treasury_ppm.get())
            + u64::from(self.team_ppm.get());
        if sum != u64::from(PPM) {
            return Err(EngineError::InvalidShares(
                "distribution shares must sum to one million ppm",
            ));
        }
        Ok(())
    }
}

impl Default for ShareConfig {
    /// One third to the user, one third to POL, two ninths to the
    /// treasury, and the remaining 111 112 ppm to the team.
    fn default() -> Self {
        Self {
            user_ppm: Ppm::new(PPM / 3),
            pol_ppm: Ppm::new(PPM / 3),
            treasury_ppm: Ppm::new(2 * PPM / 9),
            team_ppm: Ppm::new(PPM - PPM / 3 - PPM / 3 - 2 * PPM / 9),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shares_sum_to_ppm() {
        let shares = ShareConfig::default();
        assert!(shares.validate().is_ok());
        assert_eq!(shares.user_ppm, Ppm::new(333_333));
        assert_eq!(shares.pol_ppm, Ppm::new(333_333));
        assert_eq!(shares.treasury_ppm, Ppm::new(222_222));
        assert_eq!(shares.team_ppm, Ppm::new(111_112));
    }

    #[test]
    fn new_accepts_exact_sum() {
        let r = ShareConfig::new(
            Ppm::new(250_000),
            Ppm::new(250_000),
            Ppm::new(250_000),
            Ppm::new(250_000),
        );
        assert!(r.is_ok());
    }

    #[test]
    fn new_rejects_short_sum() {
        let r = ShareConfig::new(
            Ppm::new(250_000),
            Ppm::new(250_000),
            Ppm::new(250_000),
            Ppm::new(249_999),
        );
        assert!(matches!(r, Err(EngineError::InvalidShares(_))));
    }

    #[test]
    fn new_rejects_excess_sum() {
        let r = ShareConfig::new(
            Ppm::new(500_000),
            Ppm::new(500_000),
            Ppm::new(1),
            Ppm::ZERO,
        );
        assert!(matches!(r, Err(EngineError::InvalidShares(_))));
    }

    #[test]
    fn zero_pol_share_is_allowed() {
        let r = ShareConfig::new(
            Ppm::new(500_000),
            Ppm::ZERO,
            Ppm::new(250_000),
            Ppm::new(250_000),
        );
        assert!(r.is_ok());
    }
}
