//! Parts-per-million representation for fractions and slope coefficients.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::Result;
use crate::math::mul_div;

/// The value that represents 100% (one million parts per million).
pub const PPM: u32 = 1_000_000;

/// A fraction or linear coefficient expressed in parts per million
/// (1 ppm = 0.0001%, 1 000 000 ppm = 100%).
///
/// Fee fractions and distribution shares must stay below or sum to
/// [`PPM`]; use [`is_fraction`](Self::is_fraction) to check. Slope
/// coefficients are also carried as `Ppm` and may exceed it.
///
/// # Examples
///
/// ```
/// use utbc_engine::domain::Ppm;
///
/// let fee = Ppm::new(3_000); // 0.3%
/// assert_eq!(fee.get(), 3_000);
/// assert!(fee.is_fraction());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ppm(u32);

impl Ppm {
    /// Zero parts per million (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in parts per million.
    pub const ONE: Self = Self(PPM);

    /// Creates a new `Ppm` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the value is a proper fraction (`< PPM`),
    /// as required of fee rates.
    #[must_use]
    pub const fn is_fraction(&self) -> bool {
        self.0 < PPM
    }

    /// Returns `PPM - self`, saturating at zero for values above 100%.
    #[must_use]
    pub const fn complement(&self) -> Self {
        Self(PPM.saturating_sub(self.0))
    }

    /// Computes `amount * (self / PPM)` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`](crate::error::EngineError::Overflow)
    /// if the widened result does not fit the amount range.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(
            amount,
            Amount::new(u128::from(self.0)),
            Amount::new(u128::from(PPM)),
            rounding,
        )
    }
}

impl fmt::Display for Ppm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ppm", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Ppm::new(3_000).get(), 3_000);
    }

    #[test]
    fn constants() {
        assert_eq!(Ppm::ZERO.get(), 0);
        assert_eq!(Ppm::ONE.get(), 1_000_000);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Ppm::default(), Ppm::ZERO);
    }

    #[test]
    fn is_fraction_in_range() {
        assert!(Ppm::ZERO.is_fraction());
        assert!(Ppm::new(999_999).is_fraction());
    }

    #[test]
    fn is_fraction_out_of_range() {
        assert!(!Ppm::ONE.is_fraction());
        assert!(!Ppm::new(10_000_000).is_fraction());
    }

    #[test]
    fn complement_of_fee() {
        assert_eq!(Ppm::new(3_000).complement(), Ppm::new(997_000));
    }

    #[test]
    fn complement_saturates() {
        assert_eq!(Ppm::new(2_000_000).complement(), Ppm::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Ppm::new(30)), "30ppm");
    }

    #[test]
    fn ordering() {
        assert!(Ppm::new(1) < Ppm::new(5));
    }

    // -- apply --------------------------------------------------------------

    #[test]
    fn apply_round_down() {
        // 3000ppm of 1_000_000 = 3_000
        let Ok(result) = Ppm::new(3_000).apply(Amount::new(1_000_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(3_000));
    }

    #[test]
    fn apply_round_up_remainder() {
        // 3000ppm of 1 = 0.003 rounded up = 1
        let Ok(result) = Ppm::new(3_000).apply(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(1));
    }

    #[test]
    fn apply_round_down_remainder() {
        // 3000ppm of 1 = 0.003 rounded down = 0
        let Ok(result) = Ppm::new(3_000).apply(Amount::new(1), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::ZERO);
    }

    #[test]
    fn apply_zero_amount() {
        let Ok(result) = Ppm::new(3_000).apply(Amount::ZERO, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::ZERO);
    }

    #[test]
    fn apply_zero_ppm() {
        let Ok(result) = Ppm::ZERO.apply(Amount::new(1_000_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::ZERO);
    }

    #[test]
    fn apply_100_percent_is_identity() {
        let Ok(result) = Ppm::ONE.apply(Amount::new(12_345), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(12_345));
    }

    #[test]
    fn apply_slope_above_one() {
        // Slope coefficients may exceed 100%: 10^7 ppm of 100 = 1_000.
        let Ok(result) = Ppm::new(10_000_000).apply(Amount::new(100), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(1_000));
    }

    #[test]
    fn copy_semantics() {
        let a = Ppm::new(30);
        let b = a;
        assert_eq!(a, b);
    }
}
