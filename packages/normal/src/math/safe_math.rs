use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, NormalResult};

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> NormalResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> NormalResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::ArithmeticOverflow)
                    }
                }
            }
        }
    };
}

checked_impl!(u32);
