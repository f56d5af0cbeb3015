//! Engine construction and the external operation surface.

use crate::config::EngineConfig;
use crate::domain::{Amount, BurnOutcome, MintOutcome, RouteOutcome};
use crate::error::Result;
use crate::fees::FeeManager;
use crate::minter::UtbcMinter;
use crate::pol::PolManager;
use crate::pools::XykPool;
use crate::router::SmartRouter;

/// The assembled token economy: pool, minter, POL manager, fee manager,
/// and router, wired in dependency order from one validated
/// [`EngineConfig`].
///
/// Every operation takes `&mut self`, which serialises the whole engine
/// per call; a single trade traverses several components and that
/// traversal is the unit of consistency. For shared-memory deployments,
/// wrap the engine in a mutex that brackets entire calls.
///
/// # Example
///
/// ```
/// use utbc_engine::config::EngineConfig;
/// use utbc_engine::domain::{Amount, Route};
/// use utbc_engine::engine::Engine;
///
/// let mut engine = Engine::new(EngineConfig::default()).expect("valid config");
/// let out = engine
///     .swap_foreign_to_native(Amount::from_tokens(10_000), Amount::ZERO)
///     .expect("first trade");
///
/// // The very first trade can only mint: the pool has no liquidity yet.
/// assert_eq!(out.route(), Route::Utbc);
/// assert!(engine.pool().has_liquidity());
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    pool: XykPool,
    minter: UtbcMinter,
    pol: PolManager,
    fees: FeeManager,
    router: SmartRouter,
}

impl Engine {
    /// Builds an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Propagates every validation error of
    /// [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let pool = XykPool::new(config.fee_xyk_ppm)?;
        let pol = PolManager::new();
        let minter = UtbcMinter::new(config.price_initial, config.slope_ppm, config.shares)?;
        let fees = FeeManager::new(config.min_swap_foreign);
        let router = SmartRouter::new(
            config.fee_router_ppm,
            config.min_swap_foreign,
            config.min_initial_foreign,
        )?;
        Ok(Self {
            pool,
            minter,
            pol,
            fees,
            router,
        })
    }

    /// Routes a foreign payment into native tokens.
    ///
    /// # Errors
    ///
    /// See [`SmartRouter::swap_foreign_to_native`].
    pub fn swap_foreign_to_native(
        &mut self,
        foreign_in: Amount,
        min_native_out: Amount,
    ) -> Result<RouteOutcome> {
        self.router.swap_foreign_to_native(
            &mut self.pool,
            &mut self.minter,
            &mut self.pol,
            &mut self.fees,
            foreign_in,
            min_native_out,
        )
    }

    /// Routes a native sale into foreign tokens.
    ///
    /// # Errors
    ///
    /// See [`SmartRouter::swap_native_to_foreign`].
    pub fn swap_native_to_foreign(
        &mut self,
        native_in: Amount,
        min_foreign_out: Amount,
    ) -> Result<RouteOutcome> {
        self.router.swap_native_to_foreign(
            &mut self.pool,
            &mut self.minter,
            &mut self.fees,
            native_in,
            min_foreign_out,
        )
    }

    /// Mints directly against the curve, bypassing the router fee and
    /// route comparison. Internal path; external trades should use
    /// [`swap_foreign_to_native`](Self::swap_foreign_to_native).
    ///
    /// # Errors
    ///
    /// See [`UtbcMinter::mint_native`].
    pub fn mint_native(&mut self, foreign_in: Amount) -> Result<MintOutcome> {
        self.minter
            .mint_native(&mut self.pol, &mut self.pool, foreign_in)
    }

    /// Burns native supply directly.
    ///
    /// # Errors
    ///
    /// See [`UtbcMinter::burn_native`].
    pub fn burn_native(&mut self, amount: Amount) -> Result<BurnOutcome> {
        self.minter.burn_native(amount)
    }

    /// Forwards a foreign fee to the fee manager.
    pub fn receive_fee_foreign(&mut self, amount: Amount) {
        self.fees
            .receive_fee_foreign(&mut self.pool, &mut self.minter, amount);
    }

    /// Forwards a native fee to the fee manager.
    pub fn receive_fee_native(&mut self, amount: Amount) {
        self.fees.receive_fee_native(&mut self.minter, amount);
    }

    /// Returns the pool.
    pub const fn pool(&self) -> &XykPool {
        &self.pool
    }

    /// Returns the pool mutably, for direct pool-level operations.
    pub fn pool_mut(&mut self) -> &mut XykPool {
        &mut self.pool
    }

    /// Returns the minter.
    pub const fn minter(&self) -> &UtbcMinter {
        &self.minter
    }

    /// Returns the POL manager.
    pub const fn pol(&self) -> &PolManager {
        &self.pol
    }

    /// Returns the fee manager.
    pub const fn fee_manager(&self) -> &FeeManager {
        &self.fees
    }

    /// Returns the router.
    pub const fn router(&self) -> &SmartRouter {
        &self.router
    }
}
