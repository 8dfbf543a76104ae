//! Fixed-point math behind the index divisor.
//!
//! All scalars are unsigned integers at `PRICE_PRECISION` (10^18). Products
//! are formed in 256 bits so `market_cap * PRICE_PRECISION` never wraps; the
//! quotient must fit back into `u128`.

use soroban_sdk::{log, Env};

use crate::constants::PRICE_PRECISION;
use crate::error::{ErrorCode, NormalResult};
use crate::math::bn::U256;
use crate::math::ceil_div::CheckedCeilDiv;
use crate::types::index::Rounding;

/// Computes `value * PRICE_PRECISION / denominator` with the requested rounding.
pub fn mul_div_precision(
    env: &Env,
    value: u128,
    denominator: u128,
    rounding: Rounding,
) -> NormalResult<u128> {
    if denominator == 0 {
        log!(env, "Math error: division by zero at line {}", line!());
        return Err(ErrorCode::ArithmeticOverflow);
    }

    let numerator = U256::from(value)
        .checked_mul(U256::from(PRICE_PRECISION))
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    let denominator = U256::from(denominator);

    let quotient = match rounding {
        Rounding::Floor => numerator.checked_div(denominator),
        Rounding::Ceil => numerator.checked_ceil_div(denominator),
        Rounding::Nearest => {
            let half = denominator / U256::from(2_u128);
            numerator
                .checked_add(half)
                .and_then(|n| n.checked_div(denominator))
        }
    }
    .ok_or(ErrorCode::ArithmeticOverflow)?;

    quotient.try_to_u128().map_err(|e| {
        log!(env, "Math error: {} * 10^18 / {} exceeds u128", value, denominator.as_u128());
        e
    })
}

/// `divisor = market_cap * PRICE_PRECISION / index_price`
///
/// A divisor of zero would leave the index price undefined, so inputs that
/// round it away are rejected as an invalid price.
pub fn calculate_divisor(
    env: &Env,
    market_cap: u128,
    index_price: u128,
    rounding: Rounding,
) -> NormalResult<u128> {
    if market_cap == 0 {
        log!(env, "Divisor: market cap must be positive");
        return Err(ErrorCode::InvalidMarketCap);
    }
    if index_price == 0 {
        log!(env, "Divisor: index price must be positive");
        return Err(ErrorCode::InvalidIndexPrice);
    }

    let divisor = mul_div_precision(env, market_cap, index_price, rounding)?;
    if divisor == 0 {
        log!(
            env,
            "Divisor: index price {} is too large for market cap {}",
            index_price,
            market_cap
        );
        return Err(ErrorCode::InvalidIndexPrice);
    }

    Ok(divisor)
}

/// `index_price = market_cap * PRICE_PRECISION / divisor`, truncated.
pub fn calculate_index_price(env: &Env, market_cap: u128, divisor: u128) -> NormalResult<u128> {
    if divisor == 0 {
        log!(env, "Divisor: stored divisor is zero");
        return Err(ErrorCode::DivisorCorrupted);
    }

    mul_div_precision(env, market_cap, divisor, Rounding::Floor)
}
