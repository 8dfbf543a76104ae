use soroban_sdk::contracterror;

pub type NormalResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    // Lifecycle
    AlreadyInitialized = 1,
    NotInitialized = 2,
    RebalanceInProgress = 3,
    NoRebalanceInProgress = 4,

    // Basket
    EmptyBasket = 10,
    TooManyAssets = 11,
    /// Kept for code stability. Soroban `Address` values are always
    /// well-formed, so no basket check raises it.
    MalformedIdentity = 12,
    InvalidWeight = 13,
    DuplicateAsset = 14,
    WeightSumMismatch = 15,
    AssetNotFound = 16,

    // Divisor
    InvalidMarketCap = 20,
    InvalidIndexPrice = 21,
    DivisorCorrupted = 22,
    ArithmeticOverflow = 23,

    // Token
    InvalidDecimal = 30,
    NegativeAmount = 31,
    InsufficientBalance = 32,
    InsufficientAllowance = 33,
    InvalidExpiration = 34,
}
