//! Router fee buffering, conversion, and burn.
//!
//! Foreign fees accumulate until they cross the swap threshold, are
//! then converted to native through the pool, and the whole native
//! buffer is burned against the curve. Native fees burn immediately.
//! Every downstream failure is absorbed: the buffers are the recovery
//! mechanism and are retried on the next qualifying fee.

use tracing::debug;

use crate::domain::Amount;
use crate::minter::UtbcMinter;
use crate::pools::XykPool;

/// Fee buffer and burn ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeManager {
    min_swap_foreign: Amount,
    buffer_native: Amount,
    buffer_foreign: Amount,
    total_native_burned: Amount,
    total_foreign_swapped: Amount,
    fees_native: Amount,
    fees_foreign: Amount,
}

impl FeeManager {
    /// Creates an empty manager with the given foreign-swap threshold.
    #[must_use]
    pub fn new(min_swap_foreign: Amount) -> Self {
        Self {
            min_swap_foreign,
            buffer_native: Amount::ZERO,
            buffer_foreign: Amount::ZERO,
            total_native_burned: Amount::ZERO,
            total_foreign_swapped: Amount::ZERO,
            fees_native: Amount::ZERO,
            fees_foreign: Amount::ZERO,
        }
    }

    /// Returns the foreign-swap threshold.
    pub const fn min_swap_foreign(&self) -> Amount {
        self.min_swap_foreign
    }

    /// Returns the native fee balance awaiting a burn.
    pub const fn buffer_native(&self) -> Amount {
        self.buffer_native
    }

    /// Returns the foreign fee balance awaiting conversion.
    pub const fn buffer_foreign(&self) -> Amount {
        self.buffer_foreign
    }

    /// Returns the cumulative native supply burned.
    pub const fn total_native_burned(&self) -> Amount {
        self.total_native_burned
    }

    /// Returns the cumulative foreign amount converted to native.
    pub const fn total_foreign_swapped(&self) -> Amount {
        self.total_foreign_swapped
    }

    /// Returns the cumulative native fees ever received.
    pub const fn fees_native(&self) -> Amount {
        self.fees_native
    }

    /// Returns the cumulative foreign fees ever received.
    pub const fn fees_foreign(&self) -> Amount {
        self.fees_foreign
    }

    /// Receives a native fee and attempts to burn the whole native
    /// buffer. No-op for a zero amount; burn failures leave the buffer
    /// for the next attempt.
    pub fn receive_fee_native(&mut self, minter: &mut UtbcMinter, amount: Amount) {
        if amount.is_zero() {
            return;
        }
        self.fees_native = self.fees_native.saturating_add(&amount);
        self.buffer_native = self.buffer_native.saturating_add(&amount);
        self.try_burn(minter);
    }

    /// Receives a foreign fee. Once the foreign buffer reaches the
    /// threshold and the pool is live, the buffer is swapped to native
    /// and a burn of the native buffer is attempted. No-op for a zero
    /// amount; any failure leaves the relevant buffer intact.
    pub fn receive_fee_foreign(
        &mut self,
        pool: &mut XykPool,
        minter: &mut UtbcMinter,
        amount: Amount,
    ) {
        if amount.is_zero() {
            return;
        }
        self.fees_foreign = self.fees_foreign.saturating_add(&amount);
        self.buffer_foreign = self.buffer_foreign.saturating_add(&amount);

        if self.buffer_foreign < self.min_swap_foreign || !pool.has_liquidity() {
            return;
        }
        match pool.swap_foreign_to_native(self.buffer_foreign, Amount::ZERO) {
            Ok(swap) => {
                self.total_foreign_swapped =
                    self.total_foreign_swapped.saturating_add(&self.buffer_foreign);
                self.buffer_foreign = Amount::ZERO;
                self.buffer_native = self.buffer_native.saturating_add(&swap.amount_out());
                self.try_burn(minter);
            }
            Err(err) => {
                debug!(%err, "fee swap deferred");
            }
        }
    }

    fn try_burn(&mut self, minter: &mut UtbcMinter) {
        if self.buffer_native.is_zero() {
            return;
        }
        match minter.burn_native(self.buffer_native) {
            Ok(_) => {
                self.total_native_burned =
                    self.total_native_burned.saturating_add(&self.buffer_native);
                self.buffer_native = Amount::ZERO;
            }
            Err(err) => {
                debug!(%err, "fee burn deferred");
            }
        }
    }
}
