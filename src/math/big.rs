//! Exact wide-integer arithmetic for curve and pool formulas.
//!
//! Monetary values are 256-bit; every product of two such values runs
//! through a 512-bit intermediate so no formula ever loses precision.
//! Narrowing back to 256 bits is explicit and checked.

use primitive_types::{U256, U512};

use crate::domain::{Amount, Rounding};
use crate::error::{EngineError, Result};

/// Widens a 256-bit value into the 512-bit intermediate domain.
pub(crate) fn widen(value: U256) -> U512 {
    let U256(limbs) = value;
    U512([limbs[0], limbs[1], limbs[2], limbs[3], 0, 0, 0, 0])
}

/// Narrows a 512-bit intermediate back to 256 bits.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if any high limb is set.
pub(crate) fn narrow(value: U512) -> Result<U256> {
    let U512(limbs) = value;
    if limbs[4] != 0 || limbs[5] != 0 || limbs[6] != 0 || limbs[7] != 0 {
        return Err(EngineError::Overflow("value exceeds 256 bits"));
    }
    Ok(U256([limbs[0], limbs[1], limbs[2], limbs[3]]))
}

/// Computes `a * b / c` with an exact 512-bit intermediate product and
/// explicit rounding.
///
/// # Errors
///
/// - [`EngineError::DivisionByZero`] if `c` is zero.
/// - [`EngineError::Overflow`] if the quotient does not fit 256 bits.
pub fn mul_div(a: Amount, b: Amount, c: Amount, rounding: Rounding) -> Result<Amount> {
    if c.is_zero() {
        return Err(EngineError::DivisionByZero);
    }
    let product = widen(a.get())
        .checked_mul(widen(b.get()))
        .ok_or(EngineError::Overflow("mul_div product"))?;
    let divisor = widen(c.get());
    let quotient = product / divisor;
    let quotient = match rounding {
        Rounding::Down => quotient,
        Rounding::Up => {
            if (product % divisor).is_zero() {
                quotient
            } else {
                quotient + U512::one()
            }
        }
    };
    narrow(quotient).map(Amount::from_raw)
}

/// Returns `floor(sqrt(n))` by Newton iteration.
///
/// Starting from `x = n` the sequence `x <- (x + n/x) / 2` decreases
/// monotonically once it passes the root, so the loop exits at the
/// floor of the square root.
pub fn isqrt(n: U512) -> U512 {
    if n.is_zero() {
        return n;
    }
    let mut x = n;
    // ceil(x / 2)
    let mut y = (x >> 1usize) + (x & U512::one());
    while y < x {
        x = y;
        y = (x + n / x) >> 1usize;
    }
    x
}

/// Computes `floor(sqrt(a * b))` through an exact 512-bit product.
///
/// The result of the root always fits 256 bits.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] only if the internal widening
/// fails, which cannot happen for amount inputs.
pub fn sqrt_product(a: Amount, b: Amount) -> Result<Amount> {
    let product = widen(a.get())
        .checked_mul(widen(b.get()))
        .ok_or(EngineError::Overflow("sqrt_product"))?;
    narrow(isqrt(product)).map(Amount::from_raw)
}
