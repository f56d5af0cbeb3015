//! Pool implementations.
//!
//! The engine carries a single pool family: the fee-adjusted
//! constant-product [`XykPool`] that backs both the router's swap
//! branch and the protocol-owned-liquidity position.

mod xyk;

pub use xyk::XykPool;
