use normal::{error::ErrorCode, types::index::IndexAsset};
use soroban_sdk::{Address, Env, Vec};

use crate::index::{Index, IndexStatus};

pub trait IndexTokenTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize_index(
        env: Env,
        assets: Vec<IndexAsset>,
        total_market_cap: u128,
        index_price: u128,
    ) -> Result<(), ErrorCode>;

    fn set_assets(env: Env, assets: Vec<IndexAsset>) -> Result<(), ErrorCode>;

    fn rebase(env: Env, total_market_cap: u128, index_price: u128) -> Result<(), ErrorCode>;

    // ################################################################
    //                           REBALANCE
    // ################################################################

    fn begin_rebalance(env: Env) -> Result<(), ErrorCode>;

    fn activate(env: Env, token: Address) -> Result<(), ErrorCode>;

    fn deactivate(env: Env, token: Address) -> Result<(), ErrorCode>;

    fn update_weight(env: Env, token: Address, weight_bps: u32) -> Result<(), ErrorCode>;

    fn add_asset(env: Env, asset: IndexAsset) -> Result<(), ErrorCode>;

    fn commit_rebalance(
        env: Env,
        total_market_cap: u128,
        index_price: u128,
    ) -> Result<(), ErrorCode>;

    fn cancel_rebalance(env: Env) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn current_index_price(env: Env, observed_market_cap: u128) -> Result<u128, ErrorCode>;

    fn query_price(env: Env) -> Result<u128, ErrorCode>;

    fn query_index(env: Env) -> Index;

    fn assets(env: Env) -> Vec<IndexAsset>;

    fn pending_assets(env: Env) -> Option<Vec<IndexAsset>>;

    fn divisor(env: Env) -> u128;

    fn total_market_cap(env: Env) -> u128;

    fn state(env: Env) -> IndexStatus;

    fn is_rebalancing(env: Env) -> bool;

    fn active_weight_sum(env: Env) -> Result<u32, ErrorCode>;
}
