use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexAsset {
    /// Address of the underlying asset contract
    pub token: Address,
    /// The portfolio allocation of the asset, in basis points
    pub weight_bps: u32,
    /// Inactive assets stay in the basket for audit but carry no weight
    pub active: bool,
}

/// Direction in which the divisor is rounded when it does not divide evenly.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
    /// Truncate toward zero (plain integer division)
    Floor,
    /// Round up whenever there is a remainder
    Ceil,
    /// Round half up
    Nearest,
}
