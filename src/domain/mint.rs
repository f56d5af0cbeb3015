//! Quotes and outcomes for bonding-curve mint and burn operations.

use super::{Amount, PolOutcome};

/// A pure mint quote: the total quantity the curve would issue for a
/// foreign payment, split into the four distribution shares.
///
/// The shares always sum to `minted` exactly; the team share carries
/// the division remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MintQuote {
    minted: Amount,
    user: Amount,
    pol: Amount,
    treasury: Amount,
    team: Amount,
}

impl MintQuote {
    pub(crate) const fn new(
        minted: Amount,
        user: Amount,
        pol: Amount,
        treasury: Amount,
        team: Amount,
    ) -> Self {
        Self {
            minted,
            user,
            pol,
            treasury,
            team,
        }
    }

    /// Returns the total quantity the curve would issue.
    pub const fn minted(&self) -> Amount {
        self.minted
    }

    /// Returns the user share.
    pub const fn user(&self) -> Amount {
        self.user
    }

    /// Returns the protocol-owned-liquidity share.
    pub const fn pol(&self) -> Amount {
        self.pol
    }

    /// Returns the treasury share.
    pub const fn treasury(&self) -> Amount {
        self.treasury
    }

    /// Returns the team share (carries the remainder).
    pub const fn team(&self) -> Amount {
        self.team
    }
}

/// The outcome of an executed mint: payment, issuance, distribution,
/// curve prices around the operation, and the POL sub-report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MintOutcome {
    foreign_in: Amount,
    total_native: Amount,
    user_native: Amount,
    pol_native: Amount,
    treasury_native: Amount,
    team_native: Amount,
    price_before: Amount,
    price_after: Amount,
    pol: PolOutcome,
}

impl MintOutcome {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        foreign_in: Amount,
        total_native: Amount,
        user_native: Amount,
        pol_native: Amount,
        treasury_native: Amount,
        team_native: Amount,
        price_before: Amount,
        price_after: Amount,
        pol: PolOutcome,
    ) -> Self {
        Self {
            foreign_in,
            total_native,
            user_native,
            pol_native,
            treasury_native,
            team_native,
            price_before,
            price_after,
            pol,
        }
    }

    /// Returns the foreign payment that drove the mint.
    pub const fn foreign_in(&self) -> Amount {
        self.foreign_in
    }

    /// Returns the total native quantity issued.
    pub const fn total_native(&self) -> Amount {
        self.total_native
    }

    /// Returns the native quantity delivered to the user.
    pub const fn user_native(&self) -> Amount {
        self.user_native
    }

    /// Returns the native quantity handed to the POL manager.
    pub const fn pol_native(&self) -> Amount {
        self.pol_native
    }

    /// Returns the native quantity credited to the treasury.
    pub const fn treasury_native(&self) -> Amount {
        self.treasury_native
    }

    /// Returns the native quantity credited to the team.
    pub const fn team_native(&self) -> Amount {
        self.team_native
    }

    /// Returns the curve spot price before the mint.
    pub const fn price_before(&self) -> Amount {
        self.price_before
    }

    /// Returns the curve spot price after the mint.
    pub const fn price_after(&self) -> Amount {
        self.price_after
    }

    /// Returns the POL sub-report for this mint.
    pub const fn pol(&self) -> PolOutcome {
        self.pol
    }
}

/// The outcome of a burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BurnOutcome {
    native_burned: Amount,
    supply_before: Amount,
    supply_after: Amount,
}

impl BurnOutcome {
    pub(crate) const fn new(
        native_burned: Amount,
        supply_before: Amount,
        supply_after: Amount,
    ) -> Self {
        Self {
            native_burned,
            supply_before,
            supply_after,
        }
    }

    /// Returns the quantity removed from supply.
    pub const fn native_burned(&self) -> Amount {
        self.native_burned
    }

    /// Returns the supply before the burn.
    pub const fn supply_before(&self) -> Amount {
        self.supply_before
    }

    /// Returns the supply after the burn.
    pub const fn supply_after(&self) -> Amount {
        self.supply_after
    }
}
