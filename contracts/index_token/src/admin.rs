use normal::error::ErrorCode;
use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::storage::DataKey;

pub fn read_administrator(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| {
            log!(env, "Index Token: admin not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        })
}

pub fn write_administrator(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

#[cfg(test)]
mod test {
    use normal::types::index::Rounding;
    use soroban_sdk::{testutils::Address as _, Address, Env};

    use super::read_administrator;
    use crate::storage::DataKey;
    use crate::tests::setup::deploy_index_token_contract;

    #[test]
    #[should_panic(expected = "Error(Contract, #2)")]
    fn missing_admin_reads_as_not_initialized() {
        let env = Env::default();
        let admin = Address::generate(&env);
        let index_token = deploy_index_token_contract(&env, &admin, Rounding::Floor);

        env.as_contract(&index_token.address, || {
            env.storage().instance().remove(&DataKey::Admin);
            read_administrator(&env);
        });
    }
}
