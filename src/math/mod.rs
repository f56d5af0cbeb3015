//! Arithmetic utilities for curve and pool calculations.
//!
//! This module provides the exact wide-integer primitives of
//! [`big`] (`mul_div`, `isqrt`, `sqrt_product`) and the
//! [`CheckedArithmetic`] trait for overflow-safe operations on domain
//! types. All division takes an explicit `Rounding` direction; there is
//! no floating point anywhere.

pub(crate) mod big;
mod checked;

pub use big::{isqrt, mul_div, sqrt_product};
pub use checked::CheckedArithmetic;
