//! Declarative engine configuration.
//!
//! [`EngineConfig`] is the single immutable blueprint from which
//! [`Engine::new`](crate::engine::Engine::new) wires all five
//! components; [`ShareConfig`] describes the mint distribution.
//! Both validate on construction and are never mutated afterwards.

mod engine;
mod shares;

pub use engine::EngineConfig;
pub use shares::ShareConfig;
