use normal::types::index::Rounding;
use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

use super::setup::deploy_index_token_contract;

#[test]
fn metadata_is_set_by_constructor() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let index_token = deploy_index_token_contract(&env, &admin, Rounding::Floor);

    assert_eq!(index_token.decimals(), 7);
    assert_eq!(index_token.name(), String::from_str(&env, "Normal Index"));
    assert_eq!(index_token.symbol(), String::from_str(&env, "NIDX"));
}

#[test]
fn mint_and_transfer() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let index_token = deploy_index_token_contract(&env, &admin, Rounding::Floor);

    index_token.mint(&user1, &1_000);
    assert_eq!(index_token.balance(&user1), 1_000);

    index_token.transfer(&user1, &user2, &600);
    assert_eq!(index_token.balance(&user1), 400);
    assert_eq!(index_token.balance(&user2), 600);
}

#[test]
fn approve_and_transfer_from() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let user3 = Address::generate(&env);
    let index_token = deploy_index_token_contract(&env, &admin, Rounding::Floor);

    index_token.mint(&user1, &1_000);
    index_token.approve(&user1, &user2, &500, &200);
    assert_eq!(index_token.allowance(&user1, &user2), 500);

    index_token.transfer_from(&user2, &user1, &user3, &400);
    assert_eq!(index_token.allowance(&user1, &user2), 100);
    assert_eq!(index_token.balance(&user1), 600);
    assert_eq!(index_token.balance(&user3), 400);
}

#[test]
fn burn_and_burn_from() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let index_token = deploy_index_token_contract(&env, &admin, Rounding::Floor);

    index_token.mint(&user1, &1_000);
    index_token.burn(&user1, &300);
    assert_eq!(index_token.balance(&user1), 700);

    index_token.approve(&user1, &user2, &200, &200);
    index_token.burn_from(&user2, &user1, &200);
    assert_eq!(index_token.balance(&user1), 500);
    assert_eq!(index_token.allowance(&user1, &user2), 0);
}

#[test]
fn set_admin_hands_over_control() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let new_admin = Address::generate(&env);
    let index_token = deploy_index_token_contract(&env, &admin, Rounding::Floor);

    index_token.set_admin(&new_admin);

    assert_eq!(index_token.admin(), new_admin);
}

#[test]
#[should_panic]
fn transfer_more_than_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let index_token = deploy_index_token_contract(&env, &admin, Rounding::Floor);

    index_token.mint(&user1, &100);
    index_token.transfer(&user1, &user2, &101);
}

#[test]
#[should_panic]
fn transfer_from_more_than_allowance() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let user1 = Address::generate(&env);
    let user2 = Address::generate(&env);
    let index_token = deploy_index_token_contract(&env, &admin, Rounding::Floor);

    index_token.mint(&user1, &1_000);
    index_token.approve(&user1, &user2, &100, &200);
    index_token.transfer_from(&user2, &user1, &user2, &101);
}

#[test]
#[should_panic]
fn negative_amount_is_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let user1 = Address::generate(&env);
    let index_token = deploy_index_token_contract(&env, &admin, Rounding::Floor);

    index_token.mint(&user1, &-1);
}

#[test]
#[should_panic]
fn decimal_above_eighteen_is_rejected() {
    let env = Env::default();
    let admin = Address::generate(&env);

    env.register(
        crate::contract::IndexToken,
        (
            admin,
            19_u32,
            String::from_str(&env, "Normal Index"),
            String::from_str(&env, "NIDX"),
            Rounding::Floor,
        ),
    );
}
