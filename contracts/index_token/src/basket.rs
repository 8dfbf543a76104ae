use normal::{
    constants::{MAX_ASSETS, MAX_BPS},
    error::{ErrorCode, NormalResult},
    math::safe_math::SafeMath,
    types::index::IndexAsset,
    validate,
};
use soroban_sdk::{Address, Env, Vec};

/// Checks a complete basket before it is published.
///
/// Checks run in order and the first failure wins: emptiness, size, every
/// entry on its own, duplicate active tokens, then the active weight sum.
pub fn validate_basket(env: &Env, assets: &Vec<IndexAsset>) -> NormalResult {
    validate!(env, !assets.is_empty(), ErrorCode::EmptyBasket)?;
    validate!(
        env,
        assets.len() <= MAX_ASSETS,
        ErrorCode::TooManyAssets,
        "Basket: {} assets exceed the limit of {}",
        assets.len(),
        MAX_ASSETS
    )?;

    for asset in assets.iter() {
        validate_asset(env, &asset)?;
    }

    validate_unique(env, assets)?;

    let weight_sum = active_weight_sum(env, assets)?;
    validate!(
        env,
        weight_sum == MAX_BPS,
        ErrorCode::WeightSumMismatch,
        "Basket: active weights sum to {} bps, expected {}",
        weight_sum,
        MAX_BPS
    )?;

    Ok(())
}

pub fn validate_asset(env: &Env, asset: &IndexAsset) -> NormalResult {
    validate!(
        env,
        asset.weight_bps <= MAX_BPS,
        ErrorCode::InvalidWeight,
        "Basket: weight {} bps is out of range",
        asset.weight_bps
    )?;

    Ok(())
}

fn validate_unique(env: &Env, assets: &Vec<IndexAsset>) -> NormalResult {
    let len = assets.len();
    for i in 0..len {
        let asset = assets.get_unchecked(i);
        if !asset.active {
            continue;
        }
        for j in (i + 1)..len {
            let other = assets.get_unchecked(j);
            validate!(
                env,
                !(other.active && other.token == asset.token),
                ErrorCode::DuplicateAsset,
                "Basket: {} is listed as active more than once",
                asset.token
            )?;
        }
    }

    Ok(())
}

pub fn active_weight_sum(env: &Env, assets: &Vec<IndexAsset>) -> NormalResult<u32> {
    let mut sum = 0_u32;
    for asset in assets.iter().filter(|asset| asset.active) {
        sum = sum.safe_add(asset.weight_bps, env)?;
    }
    Ok(sum)
}

/// Position of the entry for `token`. An active entry wins over inactive
/// history entries for the same token.
pub fn find_asset(assets: &Vec<IndexAsset>, token: &Address) -> Option<u32> {
    let mut first_match = None;
    for (i, asset) in assets.iter().enumerate() {
        if asset.token != *token {
            continue;
        }
        if asset.active {
            return Some(i as u32);
        }
        if first_match.is_none() {
            first_match = Some(i as u32);
        }
    }
    first_match
}

#[cfg(test)]
mod test {
    use normal::{error::ErrorCode, types::index::IndexAsset};
    use soroban_sdk::{testutils::Address as _, vec, Address, Env};

    use super::{active_weight_sum, find_asset, validate_basket};

    fn asset(token: &Address, weight_bps: u32, active: bool) -> IndexAsset {
        IndexAsset {
            token: token.clone(),
            weight_bps,
            active,
        }
    }

    #[test]
    fn accepts_balanced_basket() {
        let env = Env::default();
        let (btc, eth) = (Address::generate(&env), Address::generate(&env));

        let assets = vec![&env, asset(&btc, 6_000, true), asset(&eth, 4_000, true)];

        assert_eq!(validate_basket(&env, &assets), Ok(()));
        assert_eq!(active_weight_sum(&env, &assets), Ok(10_000));
    }

    #[test]
    fn inactive_entries_carry_no_weight() {
        let env = Env::default();
        let (btc, eth) = (Address::generate(&env), Address::generate(&env));

        let assets = vec![
            &env,
            asset(&btc, 10_000, true),
            asset(&eth, 2_500, false),
            asset(&btc, 10_000, false),
        ];

        assert_eq!(validate_basket(&env, &assets), Ok(()));
        assert_eq!(active_weight_sum(&env, &assets), Ok(10_000));
    }

    #[test]
    fn rejects_weight_sum_off_by_one() {
        let env = Env::default();
        let (btc, eth) = (Address::generate(&env), Address::generate(&env));

        let short = vec![&env, asset(&btc, 5_000, true), asset(&eth, 4_999, true)];
        let long = vec![&env, asset(&btc, 5_000, true), asset(&eth, 5_001, true)];

        assert_eq!(
            validate_basket(&env, &short),
            Err(ErrorCode::WeightSumMismatch)
        );
        assert_eq!(
            validate_basket(&env, &long),
            Err(ErrorCode::WeightSumMismatch)
        );
    }

    #[test]
    fn rejects_duplicate_active_token() {
        let env = Env::default();
        let btc = Address::generate(&env);

        let assets = vec![&env, asset(&btc, 5_000, true), asset(&btc, 5_000, true)];

        assert_eq!(
            validate_basket(&env, &assets),
            Err(ErrorCode::DuplicateAsset)
        );
    }

    #[test]
    fn rejects_empty_and_oversized_baskets() {
        let env = Env::default();

        assert_eq!(
            validate_basket(&env, &vec![&env]),
            Err(ErrorCode::EmptyBasket)
        );

        let mut assets = vec![&env];
        for _ in 0..33 {
            assets.push_back(asset(&Address::generate(&env), 0, false));
        }
        assert_eq!(
            validate_basket(&env, &assets),
            Err(ErrorCode::TooManyAssets)
        );
    }

    #[test]
    fn rejects_overweight_entry_even_when_inactive() {
        let env = Env::default();
        let (btc, eth) = (Address::generate(&env), Address::generate(&env));

        let overweight = vec![&env, asset(&btc, 10_000, true), asset(&eth, 10_001, false)];
        assert_eq!(
            validate_basket(&env, &overweight),
            Err(ErrorCode::InvalidWeight)
        );
    }

    #[test]
    fn find_prefers_active_entry() {
        let env = Env::default();
        let (btc, eth, sol) = (
            Address::generate(&env),
            Address::generate(&env),
            Address::generate(&env),
        );

        let assets = vec![
            &env,
            asset(&btc, 0, false),
            asset(&eth, 5_000, true),
            asset(&btc, 5_000, true),
        ];

        assert_eq!(find_asset(&assets, &btc), Some(2));
        assert_eq!(find_asset(&assets, &eth), Some(1));
        assert_eq!(find_asset(&assets, &sol), None);
    }
}
