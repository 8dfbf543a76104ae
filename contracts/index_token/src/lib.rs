#![no_std]

#[cfg(test)]
extern crate std;

mod admin;
mod allowance;
mod balance;
mod basket;
mod contract;
mod events;
mod index;
mod index_token;
mod metadata;
mod storage;


pub use crate::contract::{IndexToken, IndexTokenClient};
pub use crate::index::{Index, IndexStatus};
