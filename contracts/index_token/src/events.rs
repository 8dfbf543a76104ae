use normal::types::index::IndexAsset;
use soroban_sdk::{Address, Env, Symbol, Vec};

pub struct IndexTokenEvents {}

impl IndexTokenEvents {
    /// Emitted when the basket and divisor are seeded
    ///
    /// - topics - `["initialize_index", admin: Address]`
    /// - data - `[assets: Vec<IndexAsset>, total_market_cap: u128, index_price: u128, divisor: u128]`
    pub fn initialize_index(
        env: &Env,
        admin: Address,
        assets: Vec<IndexAsset>,
        total_market_cap: u128,
        index_price: u128,
        divisor: u128,
    ) {
        let topics = (Symbol::new(env, "initialize_index"), admin);
        env.events()
            .publish(topics, (assets, total_market_cap, index_price, divisor));
    }

    /// Emitted when the published basket is replaced outright
    ///
    /// - topics - `["set_assets", admin: Address]`
    /// - data - `assets: Vec<IndexAsset>`
    pub fn set_assets(env: &Env, admin: Address, assets: Vec<IndexAsset>) {
        let topics = (Symbol::new(env, "set_assets"), admin);
        env.events().publish(topics, assets);
    }

    /// Emitted when the divisor is recomputed outside a rebalance
    ///
    /// - topics - `["rebase", admin: Address]`
    /// - data - `[total_market_cap: u128, index_price: u128, divisor: u128]`
    pub fn rebase(
        env: &Env,
        admin: Address,
        total_market_cap: u128,
        index_price: u128,
        divisor: u128,
    ) {
        let topics = (Symbol::new(env, "rebase"), admin);
        env.events()
            .publish(topics, (total_market_cap, index_price, divisor));
    }

    /// Emitted when a rebalance window opens
    ///
    /// - topics - `["begin_rebalance", admin: Address]`
    /// - data - ()
    pub fn begin_rebalance(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "begin_rebalance"), admin);
        env.events().publish(topics, ());
    }

    /// Emitted when a staged asset is activated or deactivated
    ///
    /// - topics - `["asset_status", token: Address]`
    /// - data - `active: bool`
    pub fn asset_status(env: &Env, token: Address, active: bool) {
        let topics = (Symbol::new(env, "asset_status"), token);
        env.events().publish(topics, active);
    }

    /// Emitted when a staged asset is reweighted
    ///
    /// - topics - `["update_weight", token: Address]`
    /// - data - `weight_bps: u32`
    pub fn update_weight(env: &Env, token: Address, weight_bps: u32) {
        let topics = (Symbol::new(env, "update_weight"), token);
        env.events().publish(topics, weight_bps);
    }

    /// Emitted when an asset is added to the staged basket
    ///
    /// - topics - `["add_asset", token: Address]`
    /// - data - `[weight_bps: u32, active: bool]`
    pub fn add_asset(env: &Env, asset: IndexAsset) {
        let topics = (Symbol::new(env, "add_asset"), asset.token);
        env.events().publish(topics, (asset.weight_bps, asset.active));
    }

    /// Emitted when a staged basket is published
    ///
    /// - topics - `["commit_rebalance", admin: Address]`
    /// - data - `[assets: Vec<IndexAsset>, total_market_cap: u128, index_price: u128, divisor: u128]`
    pub fn commit_rebalance(
        env: &Env,
        admin: Address,
        assets: Vec<IndexAsset>,
        total_market_cap: u128,
        index_price: u128,
        divisor: u128,
    ) {
        let topics = (Symbol::new(env, "commit_rebalance"), admin);
        env.events()
            .publish(topics, (assets, total_market_cap, index_price, divisor));
    }

    /// Emitted when a staged basket is discarded
    ///
    /// - topics - `["cancel_rebalance", admin: Address]`
    /// - data - ()
    pub fn cancel_rebalance(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "cancel_rebalance"), admin);
        env.events().publish(topics, ());
    }
}
