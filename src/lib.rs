//! # UTBC Engine
//!
//! Deterministic, integer-exact engine for a composite token economy
//! built from three coupled subsystems:
//!
//! - a **unidirectional bonding-curve minter** that issues the native
//!   token against a foreign reserve token along a quadratic cost
//!   integral and distributes fresh supply by fixed shares;
//! - a **constant-product pool** holding native/foreign reserves with
//!   LP accounting;
//! - a **protocol-owned-liquidity manager** that converts the minter's
//!   POL allocation and the buyer's full foreign payment into permanent
//!   LP through a two-step zap, carrying residuals in buffers.
//!
//! A **smart router** front-ends all trades, comparing the curve mint
//! against the pool swap and executing whichever delivers more native
//! to the user, and a **fee manager** buffers router fees, converts
//! foreign fees past a threshold, and burns the proceeds.
//!
//! Every quantity is an unsigned integer (`PRECISION = 10^12` for
//! amounts, `PPM = 10^6` for fractions) and every formula runs through
//! exact 256/512-bit arithmetic, so identical inputs produce
//! bit-identical outputs on every platform.
//!
//! # Quick Start
//!
//! ```rust
//! use utbc_engine::config::EngineConfig;
//! use utbc_engine::domain::{Amount, Route};
//! use utbc_engine::engine::Engine;
//!
//! // 1. Build an engine from the standard parameter set.
//! let mut engine = Engine::new(EngineConfig::default()).expect("valid config");
//!
//! // 2. The first buy mints through the curve and bootstraps the pool
//! //    with the protocol-owned-liquidity allocation.
//! let bought = engine
//!     .swap_foreign_to_native(Amount::from_tokens(10_000), Amount::ZERO)
//!     .expect("trade");
//! assert_eq!(bought.route(), Route::Utbc);
//! assert!(engine.pool().has_liquidity());
//! assert!(engine.pol().balance_lp() > Amount::ZERO);
//!
//! // 3. Later trades route through whichever branch pays more.
//! let again = engine
//!     .swap_foreign_to_native(Amount::from_tokens(1_000), Amount::ZERO)
//!     .expect("trade");
//! assert!(!again.amount_out().is_zero());
//!
//! // 4. Sales always go through the pool: the curve is unidirectional.
//! let sold = engine
//!     .swap_native_to_foreign(again.amount_out(), Amount::ZERO)
//!     .expect("sale");
//! assert_eq!(sold.route(), Route::Xyk);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  SmartRouter  │  validates, quotes both branches, executes the better
//! └───┬───────┬──┘
//!     │       │ fees
//!     │       ▼
//!     │  ┌────────────┐
//!     │  │ FeeManager  │  buffers fees, swaps past threshold, burns
//!     │  └───┬────┬───┘
//!     ▼      │    │
//! ┌────────────┐ │
//! │ UtbcMinter  │◄┘ burn
//! └───┬────────┘
//!     │ pol share + full payment
//!     ▼
//! ┌────────────┐      ┌─────────┐
//! │ PolManager  │────► │ XykPool │  reserves, LP, swaps
//! └────────────┘      └─────────┘
//! ```
//!
//! Construction is strictly acyclic: the router sits on top, the POL
//! manager talks directly to the pool for its swap leg, and the fee
//! manager talks directly to the pool and the minter. No component ever
//! calls back into the router.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Ppm`](domain::Ppm), operation reports |
//! | [`config`] | [`EngineConfig`](config::EngineConfig) and [`ShareConfig`](config::ShareConfig) |
//! | [`math`]   | Exact wide arithmetic: [`mul_div`](math::mul_div), [`isqrt`](math::isqrt) |
//! | [`pools`]  | The constant-product [`XykPool`](pools::XykPool) |
//! | [`minter`] | The bonding-curve [`UtbcMinter`](minter::UtbcMinter) |
//! | [`pol`]    | The [`PolManager`](pol::PolManager) zap and buffers |
//! | [`fees`]   | The [`FeeManager`](fees::FeeManager) buffer/swap/burn cycle |
//! | [`router`] | The [`SmartRouter`](router::SmartRouter) route selection |
//! | [`engine`] | [`Engine`](engine::Engine) construction and entry points |
//! | [`error`]  | [`EngineError`](error::EngineError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fees;
pub mod math;
pub mod minter;
pub mod pol;
pub mod pools;
pub mod prelude;
pub mod router;

#[cfg(test)]
mod proptest_properties;
