//! Convenience re-exports for common types.
//!
//! The prelude provides a single import to bring all commonly used
//! items into scope:
//!
//! ```rust
//! use utbc_engine::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    Amount, BurnOutcome, LiquidityOutcome, MintOutcome, MintQuote, PolOutcome, Ppm, Route,
    RouteDetail, RouteOutcome, Rounding, SwapOutcome, PPM, PRECISION,
};

// Re-export math utilities
pub use crate::math::{isqrt, mul_div, sqrt_product, CheckedArithmetic};

// Re-export configuration
pub use crate::config::{EngineConfig, ShareConfig};

// Re-export error types
pub use crate::error::{EngineError, Result};

// Re-export components
pub use crate::engine::Engine;
pub use crate::fees::FeeManager;
pub use crate::minter::UtbcMinter;
pub use crate::pol::PolManager;
pub use crate::pools::XykPool;
pub use crate::router::SmartRouter;
