//! Outcome of a liquidity deposit.

use super::Amount;

/// The outcome of an `add_liquidity` call: LP units minted, the portion
/// of each input actually consumed at the pool ratio, and the residuals
/// returned to the caller.
///
/// A bootstrap deposit consumes both inputs in full; a proportional
/// top-up may leave residuals on the side that exceeded the pool ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityOutcome {
    lp_minted: Amount,
    native_used: Amount,
    foreign_used: Amount,
    native_rest: Amount,
    foreign_rest: Amount,
}

impl LiquidityOutcome {
    pub(crate) const fn new(
        lp_minted: Amount,
        native_used: Amount,
        foreign_used: Amount,
        native_rest: Amount,
        foreign_rest: Amount,
    ) -> Self {
        Self {
            lp_minted,
            native_used,
            foreign_used,
            native_rest,
            foreign_rest,
        }
    }

    /// Returns the LP units minted for this deposit.
    pub const fn lp_minted(&self) -> Amount {
        self.lp_minted
    }

    /// Returns the native amount consumed by the pool.
    pub const fn native_used(&self) -> Amount {
        self.native_used
    }

    /// Returns the foreign amount consumed by the pool.
    pub const fn foreign_used(&self) -> Amount {
        self.foreign_used
    }

    /// Returns the native residual not consumed at the pool ratio.
    pub const fn native_rest(&self) -> Amount {
        self.native_rest
    }

    /// Returns the foreign residual not consumed at the pool ratio.
    pub const fn foreign_rest(&self) -> Amount {
        self.foreign_rest
    }
}
