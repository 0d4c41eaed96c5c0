mod access;
pub mod contract;
mod error;
mod mint;
pub mod msg;
pub mod query;
pub mod state;
pub mod sudo;
mod supply;
mod treasury;

pub use crate::error::ContractError;
