//! Unified error types for the engine.
//!
//! All fallible operations across the crate return [`EngineError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! # Error Code Ranges
//!
//! | Range | Category | Description |
//! |-------|----------|-------------|
//! | 1000-1999 | Validation | Invalid inputs or parameters |
//! | 2000-2999 | State | Pool, curve, or supply state violations |
//! | 3000-3999 | Arithmetic | Overflow, underflow, division by zero |
//! | 4000-4999 | Routing | Thresholds, slippage, route selection |

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, EngineError>;

// ---------------------------------------------------------------------------
// EngineError
// ---------------------------------------------------------------------------

/// Unified error enum for the engine.
///
/// Every fallible operation in the crate returns `Result<T, EngineError>`.
/// Variants are grouped by numeric error-code ranges so that callers can
/// pattern-match on categories or inspect individual codes for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    // ----- 1000-1999: Validation errors ------------------------------------
    /// An invalid quantity or amount was provided (code 1000).
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A fee fraction is out of the valid range (code 1001).
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A distribution share set is invalid (code 1002).
    #[error("invalid shares: {0}")]
    InvalidShares(&'static str),

    /// An engine configuration is invalid (code 1003).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    // ----- 2000-2999: State errors -----------------------------------------
    /// The pool holds no liquidity yet (code 2000).
    #[error("pool not initialized")]
    PoolNotInitialized,

    /// Reserves cannot satisfy the requested operation (code 2001).
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A burn was requested for more than the outstanding supply (code 2002).
    #[error("burn exceeds outstanding supply")]
    SupplyExhausted,

    // ----- 3000-3999: Arithmetic errors ------------------------------------
    /// An arithmetic operation overflowed (code 3000).
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// An arithmetic operation underflowed (code 3001).
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero was attempted (code 3002).
    #[error("division by zero")]
    DivisionByZero,

    // ----- 4000-4999: Routing errors ---------------------------------------
    /// An input is below a configured minimum threshold (code 4000).
    #[error("below minimum: {0}")]
    BelowMinimum(&'static str),

    /// The computed output is below the caller-supplied minimum (code 4001).
    #[error("slippage exceeded")]
    SlippageExceeded,

    /// Neither route can satisfy the request (code 4002).
    #[error("no route available")]
    NoRoute,
}

impl EngineError {
    /// Returns the numeric error code for this variant.
    ///
    /// Codes are organized into ranges:
    /// - 1000-1999 for validation errors
    /// - 2000-2999 for state errors
    /// - 3000-3999 for arithmetic errors
    /// - 4000-4999 for routing errors
    #[must_use]
    pub const fn error_code(&self) -> u16 {
        match self {
            // Validation (1000-1999)
            Self::InvalidAmount(_) => 1000,
            Self::InvalidFee(_) => 1001,
            Self::InvalidShares(_) => 1002,
            Self::InvalidConfiguration(_) => 1003,

            // State (2000-2999)
            Self::PoolNotInitialized => 2000,
            Self::InsufficientLiquidity => 2001,
            Self::SupplyExhausted => 2002,

            // Arithmetic (3000-3999)
            Self::Overflow(_) => 3000,
            Self::Underflow(_) => 3001,
            Self::DivisionByZero => 3002,

            // Routing (4000-4999)
            Self::BelowMinimum(_) => 4000,
            Self::SlippageExceeded => 4001,
            Self::NoRoute => 4002,
        }
    }

    /// Returns `true` if this is a validation error (1000-1999).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        self.error_code() >= 1000 && self.error_code() < 2000
    }

    /// Returns `true` if this is a state error (2000-2999).
    #[must_use]
    pub const fn is_state(&self) -> bool {
        self.error_code() >= 2000 && self.error_code() < 3000
    }

    /// Returns `true` if this is an arithmetic error (3000-3999).
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        self.error_code() >= 3000 && self.error_code() < 4000
    }

    /// Returns `true` if this is a routing error (4000-4999).
    #[must_use]
    pub const fn is_routing(&self) -> bool {
        self.error_code() >= 4000 && self.error_code() < 5000
    }
}
