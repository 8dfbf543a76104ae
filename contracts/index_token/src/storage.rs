use normal::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    error::ErrorCode,
};
use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};

use crate::index::Index;

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Index,
    Admin,
    Balance(Address),
    Allowance(AllowanceDataKey),
}

// ################################################################
//                             INDEX
// ################################################################

pub fn get_index(env: &Env) -> Index {
    let key = DataKey::Index;
    let index = env.storage().persistent().get(&key).unwrap_or_else(|| {
        log!(env, "Index: Index not set");
        panic_with_error!(env, ErrorCode::NotInitialized)
    });
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    index
}

pub fn save_index(env: &Env, index: &Index) {
    let key = DataKey::Index;
    env.storage().persistent().set(&key, index);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
