use normal::{
    constants::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
};
use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage::DataKey;

pub fn read_balance(env: &Env, addr: Address) -> i128 {
    let key = DataKey::Balance(addr);
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: Address, amount: i128) {
    let key = DataKey::Balance(addr);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: Address, amount: i128) {
    let balance = read_balance(env, addr.clone());
    let updated = balance
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, ErrorCode::ArithmeticOverflow));
    write_balance(env, addr, updated);
}

pub fn spend_balance(env: &Env, addr: Address, amount: i128) {
    let balance = read_balance(env, addr.clone());
    if balance < amount {
        panic_with_error!(env, ErrorCode::InsufficientBalance);
    }
    write_balance(env, addr, balance - amount);
}
