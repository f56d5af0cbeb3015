//! Outcome of a pool swap.

use core::fmt;

use super::Amount;

/// The outcome of a constant-product swap: amounts exchanged, spot price
/// before and after, and the relative price impact.
///
/// Prices are foreign-per-native at `PRECISION` scale; the impact is
/// `|price_after - price_before| * PPM / price_before` (zero when the
/// price before was zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    amount_in: Amount,
    amount_out: Amount,
    price_before: Amount,
    price_after: Amount,
    price_impact_ppm: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome`.
    pub(crate) const fn new(
        amount_in: Amount,
        amount_out: Amount,
        price_before: Amount,
        price_after: Amount,
        price_impact_ppm: Amount,
    ) -> Self {
        Self {
            amount_in,
            amount_out,
            price_before,
            price_after,
            price_impact_ppm,
        }
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the spot price before the swap.
    pub const fn price_before(&self) -> Amount {
        self.price_before
    }

    /// Returns the spot price after the swap.
    pub const fn price_after(&self) -> Amount {
        self.price_after
    }

    /// Returns the relative price impact in parts per million.
    pub const fn price_impact_ppm(&self) -> Amount {
        self.price_impact_ppm
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {} -> {} (impact {}ppm)",
            self.amount_in, self.amount_out, self.price_impact_ppm
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> SwapOutcome {
        SwapOutcome::new(
            Amount::new(1_000),
            Amount::new(990),
            Amount::new(2_000),
            Amount::new(2_004),
            Amount::new(2_000),
        )
    }

    #[test]
    fn accessors() {
        let o = outcome();
        assert_eq!(o.amount_in(), Amount::new(1_000));
        assert_eq!(o.amount_out(), Amount::new(990));
        assert_eq!(o.price_before(), Amount::new(2_000));
        assert_eq!(o.price_after(), Amount::new(2_004));
        assert_eq!(o.price_impact_ppm(), Amount::new(2_000));
    }

    #[test]
    fn display_mentions_amounts() {
        let s = format!("{}", outcome());
        assert!(s.contains("1000"));
        assert!(s.contains("990"));
    }
}
