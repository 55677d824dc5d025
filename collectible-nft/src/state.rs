use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    /// Sole identity authorized to mint, record scores, distribute rewards,
    /// deposit to the pool, and hand over this role
    pub admin: Addr,
    /// Reward units accrued per score point; fixed after instantiation
    pub reward_rate: Uint128,
    /// Base URL from which token URIs are derived
    pub base_token_uri: String,
    /// When true, rarity accepts any non-empty string up to 20 chars
    /// instead of the fixed common/rare/epic/legendary set
    pub relaxed_rarity: bool,
}

/// Descriptive record for a collectible, written once at mint and never
/// mutated afterward
#[cw_serde]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub rarity: String,
    pub game_type: String,
    /// Block height at mint — the chain's monotonic counter standing in
    /// for wall-clock time
    pub minted_at: u64,
}

/// Per-player cumulative score and accrued-but-undistributed reward
#[cw_serde]
pub struct ScoreRecord {
    pub total_score: u64,
    pub last_updated: u64,
    pub pending_reward: Uint128,
}

impl ScoreRecord {
    /// Zero-default record created lazily on a player's first score entry
    pub fn empty() -> Self {
        Self {
            total_score: 0,
            last_updated: 0,
            pending_reward: Uint128::zero(),
        }
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Last issued token id; ids are assigned sequentially from 1, no reuse
pub const TOKEN_COUNT: Item<u64> = Item::new("token_count");

/// token_id -> current holder. At most one holder per id.
pub const TOKEN_OWNERS: Map<u64, Addr> = Map::new("token_owners");

/// token_id -> metadata, written exactly once at mint
pub const TOKEN_METADATA: Map<u64, TokenMetadata> = Map::new("token_metadata");

/// player -> score ledger entry
pub const SCORES: Map<&Addr, ScoreRecord> = Map::new("scores");

/// Shared balance available to satisfy reward distributions. Never negative.
pub const REWARD_POOL: Item<Uint128> = Item::new("reward_pool");
