use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("not authorized: only {role} can perform this action")]
    NotAuthorized { role: String },

    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("not found: {subject}")]
    NftNotFound { subject: String },

    #[error("token {token_id} already minted")]
    AlreadyMinted { token_id: u64 },

    #[error("insufficient funds: requested {requested}, pool holds {available}")]
    InsufficientFunds {
        requested: Uint128,
        available: Uint128,
    },

    #[error("transfer failed: ownership record for token {token_id} is inconsistent")]
    TransferFailed { token_id: u64 },

    #[error("reward distribution failed for {player}")]
    RewardDistributionFailed { player: String },

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}

impl ContractError {
    /// Stable numeric code for host-level propagation. Codes are part of
    /// the public API and must not be renumbered.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::Std(_) => 1,
            ContractError::NotAuthorized { .. } => 100,
            ContractError::InvalidParameters { .. } => 101,
            ContractError::NftNotFound { .. } => 102,
            ContractError::AlreadyMinted { .. } => 103,
            ContractError::InsufficientFunds { .. } => 104,
            ContractError::TransferFailed { .. } => 105,
            ContractError::RewardDistributionFailed { .. } => 106,
            ContractError::UnexpectedFunds => 107,
        }
    }
}
