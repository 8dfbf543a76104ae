use normal::{
    constants::{MAX_ASSETS, MAX_BPS},
    error::{ErrorCode, NormalResult},
    math::index::{calculate_divisor, calculate_index_price},
    types::index::{IndexAsset, Rounding},
    validate,
};
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::basket::{active_weight_sum, find_asset, validate_asset, validate_basket};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexStatus {
    /// Created by the constructor, no basket and no divisor yet
    Uninitialized,
    /// Basket and divisor are set. Never reverts.
    Initialized,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Index {
    pub status: IndexStatus,
    /// Published basket, in insertion order
    pub assets: Vec<IndexAsset>,
    /// Staged basket while a rebalance is open
    pub pending_assets: Option<Vec<IndexAsset>>,
    /// market cap * PRICE_PRECISION / index price
    pub divisor: u128,
    /// Last known aggregate value of the basket
    /// precision: PRICE_PRECISION
    pub total_market_cap: u128,
    /// How the divisor is rounded when it does not divide evenly
    pub rounding: Rounding,
    pub initialized_ts: u64,
    pub last_rebase_ts: u64,
}

impl Index {
    pub fn new(env: &Env, rounding: Rounding) -> Self {
        Index {
            status: IndexStatus::Uninitialized,
            assets: Vec::new(env),
            pending_assets: None,
            divisor: 0,
            total_market_cap: 0,
            rounding,
            initialized_ts: 0,
            last_rebase_ts: 0,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.status == IndexStatus::Initialized
    }

    pub fn is_rebalancing(&self) -> bool {
        self.pending_assets.is_some()
    }

    fn require_initialized(&self, env: &Env) -> NormalResult {
        validate!(env, self.is_initialized(), ErrorCode::NotInitialized)
    }

    fn require_not_rebalancing(&self, env: &Env) -> NormalResult {
        validate!(env, !self.is_rebalancing(), ErrorCode::RebalanceInProgress)
    }

    // ################################################################
    //                            DIVISOR
    // ################################################################

    /// Seeds the basket and the divisor. Only legal once.
    pub fn initialize(
        &mut self,
        env: &Env,
        assets: Vec<IndexAsset>,
        total_market_cap: u128,
        index_price: u128,
        now: u64,
    ) -> NormalResult {
        validate!(
            env,
            self.status == IndexStatus::Uninitialized,
            ErrorCode::AlreadyInitialized,
            "Index: initializing the index twice is not allowed"
        )?;
        validate_basket(env, &assets)?;
        let divisor = calculate_divisor(env, total_market_cap, index_price, self.rounding)?;

        self.assets = assets;
        self.divisor = divisor;
        self.total_market_cap = total_market_cap;
        self.status = IndexStatus::Initialized;
        self.initialized_ts = now;
        self.last_rebase_ts = now;

        Ok(())
    }

    /// Recomputes the divisor so that `total_market_cap` is quoted at
    /// `index_price`.
    pub fn rebase(
        &mut self,
        env: &Env,
        total_market_cap: u128,
        index_price: u128,
        now: u64,
    ) -> NormalResult {
        self.require_initialized(env)?;
        self.require_not_rebalancing(env)?;
        validate_basket(env, &self.assets)?;

        let divisor = calculate_divisor(env, total_market_cap, index_price, self.rounding)?;

        self.divisor = divisor;
        self.total_market_cap = total_market_cap;
        self.last_rebase_ts = now;

        Ok(())
    }

    pub fn current_index_price(&self, env: &Env, observed_market_cap: u128) -> NormalResult<u128> {
        self.require_initialized(env)?;
        calculate_index_price(env, observed_market_cap, self.divisor)
    }

    /// Price at the last recorded market cap.
    pub fn price(&self, env: &Env) -> NormalResult<u128> {
        self.current_index_price(env, self.total_market_cap)
    }

    // ################################################################
    //                            BASKET
    // ################################################################

    pub fn set_assets(&mut self, env: &Env, assets: Vec<IndexAsset>) -> NormalResult {
        self.require_initialized(env)?;
        self.require_not_rebalancing(env)?;
        validate_basket(env, &assets)?;

        self.assets = assets;

        Ok(())
    }

    pub fn active_weight_sum(&self, env: &Env) -> NormalResult<u32> {
        active_weight_sum(env, &self.assets)
    }

    // ################################################################
    //                           REBALANCE
    // ################################################################

    /// Opens a rebalance window over a staged copy of the published basket.
    pub fn begin_rebalance(&mut self, env: &Env) -> NormalResult {
        self.require_initialized(env)?;
        self.require_not_rebalancing(env)?;

        self.pending_assets = Some(self.assets.clone());

        Ok(())
    }

    fn pending_mut(&mut self, env: &Env) -> NormalResult<&mut Vec<IndexAsset>> {
        self.require_initialized(env)?;
        validate!(
            env,
            self.is_rebalancing(),
            ErrorCode::NoRebalanceInProgress
        )?;
        self.pending_assets
            .as_mut()
            .ok_or(ErrorCode::NoRebalanceInProgress)
    }

    /// Flips the `active` flag of the staged entry for `token`.
    /// Returns `false` when the entry was already in the requested state.
    pub fn set_asset_status(
        &mut self,
        env: &Env,
        token: &Address,
        active: bool,
    ) -> NormalResult<bool> {
        let pending = self.pending_mut(env)?;
        let position = find_asset(pending, token).ok_or(ErrorCode::AssetNotFound)?;

        let mut asset = pending.get_unchecked(position);
        if asset.active == active {
            return Ok(false);
        }
        asset.active = active;
        pending.set(position, asset);

        Ok(true)
    }

    pub fn update_weight(
        &mut self,
        env: &Env,
        token: &Address,
        weight_bps: u32,
    ) -> NormalResult {
        let pending = self.pending_mut(env)?;
        validate!(
            env,
            weight_bps <= MAX_BPS,
            ErrorCode::InvalidWeight,
            "Index: weight {} bps is out of range",
            weight_bps
        )?;
        let position = find_asset(pending, token).ok_or(ErrorCode::AssetNotFound)?;

        let mut asset = pending.get_unchecked(position);
        asset.weight_bps = weight_bps;
        pending.set(position, asset);

        Ok(())
    }

    pub fn add_asset(&mut self, env: &Env, asset: IndexAsset) -> NormalResult {
        let pending = self.pending_mut(env)?;
        validate!(
            env,
            pending.len() < MAX_ASSETS,
            ErrorCode::TooManyAssets
        )?;
        validate_asset(env, &asset)?;

        pending.push_back(asset);

        Ok(())
    }

    /// Publishes the staged basket and rebases the divisor in one step. On
    /// failure the window stays open and nothing is published.
    pub fn commit_rebalance(
        &mut self,
        env: &Env,
        total_market_cap: u128,
        index_price: u128,
        now: u64,
    ) -> NormalResult {
        let pending = self.pending_mut(env)?.clone();
        validate_basket(env, &pending)?;
        let divisor = calculate_divisor(env, total_market_cap, index_price, self.rounding)?;

        self.assets = pending;
        self.pending_assets = None;
        self.divisor = divisor;
        self.total_market_cap = total_market_cap;
        self.last_rebase_ts = now;

        Ok(())
    }

    pub fn cancel_rebalance(&mut self, env: &Env) -> NormalResult {
        self.pending_mut(env)?;
        self.pending_assets = None;

        Ok(())
    }
}
