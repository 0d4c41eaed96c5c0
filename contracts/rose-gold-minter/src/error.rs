use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("Unauthorized: caller is not the admin")]
    Unauthorized {},

    #[error("Minting Paused")]
    Paused {},

    #[error("{reason}")]
    MintClosed { reason: String },

    #[error("You are not on the allow list")]
    NotAllowListed {},

    #[error("Insufficient payment, got: {got}, expected at least {expected}")]
    InsufficientPayment { got: Uint128, expected: Uint128 },

    #[error("Supply exhausted, max supply {max_supply} reached")]
    SupplyExhausted { max_supply: u64 },

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Max supply must be greater than zero")]
    InvalidMaxSupply {},

    #[error("Invalid reply ID")]
    InvalidReplyID {},

    #[error("Reply error")]
    ReplyOnSuccess {},
}

impl ContractError {
    pub fn public_mint_closed() -> Self {
        ContractError::MintClosed {
            reason: "Public Mint Closed".to_string(),
        }
    }

    pub fn allow_list_mint_closed() -> Self {
        ContractError::MintClosed {
            reason: "Allow List Mint Closed".to_string(),
        }
    }
}
