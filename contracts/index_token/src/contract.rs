use normal::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
    types::index::{IndexAsset, Rounding},
};
use soroban_sdk::token::{self, Interface as _};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, String, Vec,
};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

use crate::admin::{read_administrator, write_administrator};
use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{read_balance, receive_balance, spend_balance};
use crate::events::IndexTokenEvents;
use crate::index::{Index, IndexStatus};
use crate::index_token::IndexTokenTrait;
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use crate::storage::{get_index, save_index};

fn check_nonnegative_amount(env: &Env, amount: i128) {
    if amount < 0 {
        log!(env, "negative amount is not allowed: {}", amount);
        panic_with_error!(env, ErrorCode::NegativeAmount);
    }
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn require_admin(env: &Env) -> Address {
    let admin = read_administrator(env);
    admin.require_auth();
    bump_instance(env);
    admin
}

fn set_asset_status(env: &Env, token: Address, active: bool) -> Result<(), ErrorCode> {
    require_admin(env);

    let mut index = get_index(env);
    if index.set_asset_status(env, &token, active)? {
        save_index(env, &index);
        IndexTokenEvents::asset_status(env, token, active);
    }

    Ok(())
}

contractmeta!(
    key = "Description",
    val = "Token tracking a weighted basket of assets through a divisor-normalized index price"
);

#[contract]
pub struct IndexToken;

#[contractimpl]
impl IndexToken {
    pub fn __constructor(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        rounding: Rounding,
    ) {
        if decimal > 18 {
            log!(&env, "Index Token: decimal must not be greater than 18");
            panic_with_error!(&env, ErrorCode::InvalidDecimal);
        }
        write_administrator(&env, &admin);
        write_metadata(
            &env,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        save_index(&env, &Index::new(&env, rounding));
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        check_nonnegative_amount(&env, amount);
        let admin = require_admin(&env);

        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().mint(admin, to, amount);
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = require_admin(&env);

        write_administrator(&env, &new_admin);
        TokenUtils::new(&env).events().set_admin(admin, new_admin);
    }

    pub fn admin(env: Env) -> Address {
        read_administrator(&env)
    }
}

#[contractimpl]
impl IndexTokenTrait for IndexToken {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize_index(
        env: Env,
        assets: Vec<IndexAsset>,
        total_market_cap: u128,
        index_price: u128,
    ) -> Result<(), ErrorCode> {
        let admin = require_admin(&env);

        let mut index = get_index(&env);
        index.initialize(
            &env,
            assets,
            total_market_cap,
            index_price,
            env.ledger().timestamp(),
        )?;
        save_index(&env, &index);

        IndexTokenEvents::initialize_index(
            &env,
            admin,
            index.assets,
            total_market_cap,
            index_price,
            index.divisor,
        );

        Ok(())
    }

    fn set_assets(env: Env, assets: Vec<IndexAsset>) -> Result<(), ErrorCode> {
        let admin = require_admin(&env);

        let mut index = get_index(&env);
        index.set_assets(&env, assets)?;
        save_index(&env, &index);

        IndexTokenEvents::set_assets(&env, admin, index.assets);

        Ok(())
    }

    fn rebase(env: Env, total_market_cap: u128, index_price: u128) -> Result<(), ErrorCode> {
        let admin = require_admin(&env);

        let mut index = get_index(&env);
        index.rebase(&env, total_market_cap, index_price, env.ledger().timestamp())?;
        save_index(&env, &index);

        IndexTokenEvents::rebase(&env, admin, total_market_cap, index_price, index.divisor);

        Ok(())
    }

    // ################################################################
    //                           REBALANCE
    // ################################################################

    fn begin_rebalance(env: Env) -> Result<(), ErrorCode> {
        let admin = require_admin(&env);

        let mut index = get_index(&env);
        index.begin_rebalance(&env)?;
        save_index(&env, &index);

        IndexTokenEvents::begin_rebalance(&env, admin);

        Ok(())
    }

    fn activate(env: Env, token: Address) -> Result<(), ErrorCode> {
        set_asset_status(&env, token, true)
    }

    fn deactivate(env: Env, token: Address) -> Result<(), ErrorCode> {
        set_asset_status(&env, token, false)
    }

    fn update_weight(env: Env, token: Address, weight_bps: u32) -> Result<(), ErrorCode> {
        require_admin(&env);

        let mut index = get_index(&env);
        index.update_weight(&env, &token, weight_bps)?;
        save_index(&env, &index);

        IndexTokenEvents::update_weight(&env, token, weight_bps);

        Ok(())
    }

    fn add_asset(env: Env, asset: IndexAsset) -> Result<(), ErrorCode> {
        require_admin(&env);

        let mut index = get_index(&env);
        index.add_asset(&env, asset.clone())?;
        save_index(&env, &index);

        IndexTokenEvents::add_asset(&env, asset);

        Ok(())
    }

    fn commit_rebalance(
        env: Env,
        total_market_cap: u128,
        index_price: u128,
    ) -> Result<(), ErrorCode> {
        let admin = require_admin(&env);

        let mut index = get_index(&env);
        index.commit_rebalance(
            &env,
            total_market_cap,
            index_price,
            env.ledger().timestamp(),
        )?;
        save_index(&env, &index);

        IndexTokenEvents::commit_rebalance(
            &env,
            admin,
            index.assets,
            total_market_cap,
            index_price,
            index.divisor,
        );

        Ok(())
    }

    fn cancel_rebalance(env: Env) -> Result<(), ErrorCode> {
        let admin = require_admin(&env);

        let mut index = get_index(&env);
        index.cancel_rebalance(&env)?;
        save_index(&env, &index);

        IndexTokenEvents::cancel_rebalance(&env, admin);

        Ok(())
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn current_index_price(env: Env, observed_market_cap: u128) -> Result<u128, ErrorCode> {
        get_index(&env).current_index_price(&env, observed_market_cap)
    }

    fn query_price(env: Env) -> Result<u128, ErrorCode> {
        get_index(&env).price(&env)
    }

    fn query_index(env: Env) -> Index {
        get_index(&env)
    }

    fn assets(env: Env) -> Vec<IndexAsset> {
        get_index(&env).assets
    }

    fn pending_assets(env: Env) -> Option<Vec<IndexAsset>> {
        get_index(&env).pending_assets
    }

    fn divisor(env: Env) -> u128 {
        get_index(&env).divisor
    }

    fn total_market_cap(env: Env) -> u128 {
        get_index(&env).total_market_cap
    }

    fn state(env: Env) -> IndexStatus {
        get_index(&env).status
    }

    fn is_rebalancing(env: Env) -> bool {
        get_index(&env).is_rebalancing()
    }

    fn active_weight_sum(env: Env) -> Result<u32, ErrorCode> {
        get_index(&env).active_weight_sum(&env)
    }
}

#[contractimpl]
impl token::Interface for IndexToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        bump_instance(&env);
        read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);
        bump_instance(&env);

        write_allowance(&env, from.clone(), spender.clone(), amount, expiration_ledger);
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        bump_instance(&env);
        read_balance(&env, id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);
        bump_instance(&env);

        spend_balance(&env, from.clone(), amount);
        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&env, amount);
        bump_instance(&env);

        spend_allowance(&env, from.clone(), spender, amount);
        spend_balance(&env, from.clone(), amount);
        receive_balance(&env, to.clone(), amount);
        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&env, amount);
        bump_instance(&env);

        spend_balance(&env, from.clone(), amount);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&env, amount);
        bump_instance(&env);

        spend_allowance(&env, from.clone(), spender, amount);
        spend_balance(&env, from.clone(), amount);
        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        read_decimal(&env)
    }

    fn name(env: Env) -> String {
        read_name(&env)
    }

    fn symbol(env: Env) -> String {
        read_symbol(&env)
    }
}
