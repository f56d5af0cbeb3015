//! Route selection and the router's trade report.

use core::fmt;

use super::{Amount, MintOutcome, SwapOutcome};

/// The execution branch a trade was routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Bonding-curve mint branch.
    Utbc,
    /// Constant-product pool branch.
    Xyk,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utbc => write!(f, "utbc"),
            Self::Xyk => write!(f, "xyk"),
        }
    }
}

/// Branch-specific detail attached to a [`RouteOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteDetail {
    /// The mint report, including the POL sub-report.
    Mint(MintOutcome),
    /// The pool swap report, including the price impact.
    Swap(SwapOutcome),
}

/// The full report of one router trade: the chosen route, gross input,
/// router fee, user-facing output, prices around the executed branch,
/// and the branch detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteOutcome {
    route: Route,
    amount_in: Amount,
    router_fee: Amount,
    amount_out: Amount,
    price_before: Amount,
    price_after: Amount,
    detail: RouteDetail,
}

impl RouteOutcome {
    /// Builds the report for a trade executed through the mint branch.
    pub(crate) const fn minted(amount_in: Amount, router_fee: Amount, mint: MintOutcome) -> Self {
        Self {
            route: Route::Utbc,
            amount_in,
            router_fee,
            amount_out: mint.user_native(),
            price_before: mint.price_before(),
            price_after: mint.price_after(),
            detail: RouteDetail::Mint(mint),
        }
    }

    /// Builds the report for a trade executed through the pool branch.
    pub(crate) const fn swapped(amount_in: Amount, router_fee: Amount, swap: SwapOutcome) -> Self {
        Self {
            route: Route::Xyk,
            amount_in,
            router_fee,
            amount_out: swap.amount_out(),
            price_before: swap.price_before(),
            price_after: swap.price_after(),
            detail: RouteDetail::Swap(swap),
        }
    }

    /// Returns the chosen route.
    pub const fn route(&self) -> Route {
        self.route
    }

    /// Returns the gross input amount (before the router fee).
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the router fee deducted from the input.
    pub const fn router_fee(&self) -> Amount {
        self.router_fee
    }

    /// Returns the user-facing output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the relevant spot price before the executed branch.
    pub const fn price_before(&self) -> Amount {
        self.price_before
    }

    /// Returns the relevant spot price after the executed branch.
    pub const fn price_after(&self) -> Amount {
        self.price_after
    }

    /// Returns the branch-specific detail.
    pub const fn detail(&self) -> &RouteDetail {
        &self.detail
    }
}
