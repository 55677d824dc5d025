use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::TokenMetadata;

#[cw_serde]
pub struct InstantiateMsg {
    /// Base URL used to build token URIs; contract default when omitted
    pub base_token_uri: Option<String>,
    /// Accept arbitrary short rarity strings instead of the fixed set
    pub relaxed_rarity: bool,
    /// Reward units accrued per score point; defaults to 10.
    /// Fixed after instantiation — there is no update entry point.
    pub reward_rate: Option<Uint128>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a new collectible to the admin (admin only)
    Mint {
        name: String,
        description: String,
        rarity: String,
        game_type: String,
    },
    /// Custodial transfer: `from` must be the current holder. The sender
    /// is not required to equal `from`.
    Transfer {
        token_id: u64,
        from: String,
        to: String,
    },
    /// Credit score points to a player and accrue pending reward (admin only)
    RecordScore { player: String, score_delta: u64 },
    /// Pay out a player's accrued reward from the pool (admin only).
    /// Accounting only — no funds leave the contract.
    Distribute { player: String },
    /// Credit the shared reward pool (admin only). Accounting only.
    Deposit { amount: Uint128 },
    /// Hand the admin role to another identity (admin only, single step)
    TransferOwnership { new_admin: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(crate::state::Config)]
    Config {},
    /// Get a token's metadata, if it was ever minted
    #[returns(MetadataResponse)]
    Metadata { token_id: u64 },
    /// Get the current holder of a token
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    /// Get the deterministic URI for a token id
    #[returns(TokenUriResponse)]
    TokenUri { token_id: u64 },
    /// Get the last issued token id
    #[returns(LastIssuedIdResponse)]
    LastIssuedId {},
    /// Get the shared reward pool balance
    #[returns(PoolBalanceResponse)]
    PoolBalance {},
    /// Get a player's score ledger entry (zero defaults if none exists)
    #[returns(PlayerScoreResponse)]
    PlayerScore { player: String },
}

#[cw_serde]
pub struct MetadataResponse {
    pub metadata: Option<TokenMetadata>,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Option<String>,
}

#[cw_serde]
pub struct TokenUriResponse {
    pub token_uri: Option<String>,
}

#[cw_serde]
pub struct LastIssuedIdResponse {
    pub last_issued_id: u64,
}

#[cw_serde]
pub struct PoolBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct PlayerScoreResponse {
    pub total_score: u64,
    pub pending_reward: Uint128,
    pub last_updated: u64,
}

#[cw_serde]
pub struct MigrateMsg {}
