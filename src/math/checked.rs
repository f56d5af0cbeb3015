//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic that
//! returns [`Result<Self, EngineError>`](crate::error::EngineError)
//! instead of panicking on overflow, underflow, or division by zero.

use crate::domain::{Amount, Rounding};
use crate::error::EngineError;

/// Fallible arithmetic for domain wrapper types.
///
/// Every method returns `Result<Self, EngineError>` with a specific
/// error variant so callers can distinguish overflow from underflow
/// from division by zero.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - Implementations must delegate to the inner type's checked
///   operations.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, EngineError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, EngineError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self) -> Result<Self, EngineError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, EngineError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, EngineError> {
        self.checked_add(other)
            .ok_or(EngineError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, EngineError> {
        self.checked_sub(other)
            .ok_or(EngineError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, EngineError> {
        self.checked_mul(other)
            .ok_or(EngineError::Overflow("amount multiplication overflow"))
    }

    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, EngineError> {
        super::big::mul_div(*self, Amount::new(1), *other, rounding)
    }
}
