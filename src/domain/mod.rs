//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the core value types that model the token
//! economy: monetary amounts, parts-per-million fractions, rounding
//! directions, and the report structs returned by every operation.
//! All types use newtypes or validated constructors to enforce
//! invariants.

mod amount;
mod liquidity;
mod mint;
mod pol;
mod ppm;
mod rounding;
mod route;
mod swap;

pub use amount::{Amount, PRECISION};
pub use liquidity::LiquidityOutcome;
pub use mint::{BurnOutcome, MintOutcome, MintQuote};
pub use pol::PolOutcome;
pub use ppm::{Ppm, PPM};
pub use rounding::Rounding;
pub use route::{Route, RouteDetail, RouteOutcome};
pub use swap::SwapOutcome;
