//! Big number types

#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

use uint::construct_uint;

use crate::error::{ErrorCode, NormalResult};

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

impl U256 {
    /// Convert u256 to u128
    pub fn try_to_u128(self) -> NormalResult<u128> {
        if self > U256::from(u128::MAX) {
            return Err(ErrorCode::ArithmeticOverflow);
        }
        Ok(self.as_u128())
    }
}
