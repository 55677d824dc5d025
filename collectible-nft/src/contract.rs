use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::helpers::{
    assert_admin, reject_funds, validate_addr, validate_metadata, validate_principal,
};
use crate::interface::{RegistryView, TokenInterface};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:collectible-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pool balance credited at instantiation
const INITIAL_POOL_BALANCE: u128 = 1_000_000;
/// Default reward units accrued per score point
const DEFAULT_REWARD_RATE: u128 = 10;
/// Per-call ceiling on recorded score
const MAX_SCORE_DELTA: u64 = 10_000;
/// Per-call ceiling on pool deposits
const MAX_DEPOSIT: u128 = 1_000_000_000;
const DEFAULT_BASE_TOKEN_URI: &str = "https://api.collectibles.example/metadata";

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let reward_rate = msg.reward_rate.unwrap_or(Uint128::new(DEFAULT_REWARD_RATE));
    if reward_rate.is_zero() {
        return Err(ContractError::InvalidParameters {
            reason: "reward rate must be positive".to_string(),
        });
    }

    // The deploying identity becomes the admin; no re-initialization path
    let config = Config {
        admin: info.sender,
        reward_rate,
        base_token_uri: msg
            .base_token_uri
            .unwrap_or_else(|| DEFAULT_BASE_TOKEN_URI.to_string()),
        relaxed_rarity: msg.relaxed_rarity,
    };
    CONFIG.save(deps.storage, &config)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;
    REWARD_POOL.save(deps.storage, &Uint128::new(INITIAL_POOL_BALANCE))?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("admin", config.admin.as_str())
        .add_attribute("reward_rate", config.reward_rate.to_string()))
}

// ─── Execute dispatch ───────────────────────────────────────────────────────

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint {
            name,
            description,
            rarity,
            game_type,
        } => execute_mint(deps, env, info, name, description, rarity, game_type),
        ExecuteMsg::Transfer { token_id, from, to } => {
            execute_transfer(deps, env, info, token_id, from, to)
        }
        ExecuteMsg::RecordScore {
            player,
            score_delta,
        } => execute_record_score(deps, env, info, player, score_delta),
        ExecuteMsg::Distribute { player } => execute_distribute(deps, env, info, player),
        ExecuteMsg::Deposit { amount } => execute_deposit(deps, env, info, amount),
        ExecuteMsg::TransferOwnership { new_admin } => {
            execute_transfer_ownership(deps, env, info, new_admin)
        }
    }
}

// ─── Execute: Minting ───────────────────────────────────────────────────────

pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
    description: String,
    rarity: String,
    game_type: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    validate_metadata(
        &name,
        &description,
        &rarity,
        &game_type,
        config.relaxed_rarity,
    )?;

    let token_id = TOKEN_COUNT.load(deps.storage)? + 1;
    // Unreachable under monotonic issuance; guards the uniqueness invariant
    if TOKEN_OWNERS.has(deps.storage, token_id) {
        return Err(ContractError::AlreadyMinted { token_id });
    }

    let metadata = TokenMetadata {
        name: name.clone(),
        description,
        rarity: rarity.clone(),
        game_type,
        minted_at: env.block.height,
    };

    // The minter becomes the initial holder
    TOKEN_OWNERS.save(deps.storage, token_id, &info.sender)?;
    TOKEN_METADATA.save(deps.storage, token_id, &metadata)?;
    TOKEN_COUNT.save(deps.storage, &token_id)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("holder", info.sender.as_str())
        .add_attribute("name", name)
        .add_attribute("rarity", rarity))
}

// ─── Execute: Transfer ──────────────────────────────────────────────────────

/// Custodial transfer: authorization rests on `from` matching the current
/// holder; the sender is deliberately not checked against `from`.
pub fn execute_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: u64,
    from: String,
    to: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let from = validate_addr(deps.as_ref(), &from)?;
    let to = validate_principal(deps.as_ref(), &info.sender, &to)?;
    if from == to {
        return Err(ContractError::InvalidParameters {
            reason: "recipient must differ from the current holder".to_string(),
        });
    }

    let holder = TOKEN_OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| ContractError::NftNotFound {
            subject: format!("token {token_id}"),
        })?;
    if holder != from {
        return Err(ContractError::NotAuthorized {
            role: "current holder".to_string(),
        });
    }

    TOKEN_OWNERS.save(deps.storage, token_id, &to)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("from", from.as_str())
        .add_attribute("to", to.as_str()))
}

// ─── Execute: Score Ledger ──────────────────────────────────────────────────

pub fn execute_record_score(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    player: String,
    score_delta: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    if score_delta == 0 || score_delta > MAX_SCORE_DELTA {
        return Err(ContractError::InvalidParameters {
            reason: format!("score delta must be between 1 and {MAX_SCORE_DELTA}"),
        });
    }

    let player = validate_addr(deps.as_ref(), &player)?;
    let config = CONFIG.load(deps.storage)?;

    let mut record = SCORES
        .may_load(deps.storage, &player)?
        .unwrap_or_else(ScoreRecord::empty);

    record.total_score = record
        .total_score
        .checked_add(score_delta)
        .ok_or_else(|| ContractError::InvalidParameters {
            reason: "total score overflow".to_string(),
        })?;
    let accrued = Uint128::from(score_delta)
        .checked_mul(config.reward_rate)
        .map_err(StdError::from)?;
    record.pending_reward = record
        .pending_reward
        .checked_add(accrued)
        .map_err(StdError::from)?;
    record.last_updated = env.block.height;

    SCORES.save(deps.storage, &player, &record)?;

    Ok(Response::new()
        .add_attribute("action", "record_score")
        .add_attribute("player", player.as_str())
        .add_attribute("score_delta", score_delta.to_string())
        .add_attribute("total_score", record.total_score.to_string())
        .add_attribute("pending_reward", record.pending_reward.to_string()))
}

// ─── Execute: Reward Pool ───────────────────────────────────────────────────

/// Accounting-only payout: records that `reward` units left the pool and
/// belong to the player. Conveying actual value is an external concern.
pub fn execute_distribute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    player: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    let player = validate_addr(deps.as_ref(), &player)?;
    let mut record = SCORES
        .may_load(deps.storage, &player)?
        .ok_or_else(|| ContractError::NftNotFound {
            subject: format!("score ledger for {player}"),
        })?;

    let reward = record.pending_reward;
    let pool = REWARD_POOL.load(deps.storage)?;
    if reward.is_zero() || pool < reward {
        return Err(ContractError::InsufficientFunds {
            requested: reward,
            available: pool,
        });
    }

    let remaining = pool
        .checked_sub(reward)
        .map_err(|_| ContractError::RewardDistributionFailed {
            player: player.to_string(),
        })?;
    REWARD_POOL.save(deps.storage, &remaining)?;

    // Total score is preserved across distributions
    record.pending_reward = Uint128::zero();
    SCORES.save(deps.storage, &player, &record)?;

    Ok(Response::new()
        .add_attribute("action", "distribute")
        .add_attribute("player", player.as_str())
        .add_attribute("reward", reward.to_string())
        .add_attribute("pool_balance", remaining.to_string()))
}

pub fn execute_deposit(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    if amount.is_zero() || amount > Uint128::new(MAX_DEPOSIT) {
        return Err(ContractError::InvalidParameters {
            reason: format!("deposit must be between 1 and {MAX_DEPOSIT}"),
        });
    }

    let pool = REWARD_POOL.load(deps.storage)?;
    let balance = pool.checked_add(amount).map_err(StdError::from)?;
    REWARD_POOL.save(deps.storage, &balance)?;

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("amount", amount.to_string())
        .add_attribute("pool_balance", balance.to_string()))
}

// ─── Execute: Admin ─────────────────────────────────────────────────────────

pub fn execute_transfer_ownership(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    let new_admin = validate_principal(deps.as_ref(), &info.sender, &new_admin)?;

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.admin = new_admin.clone();
        Ok(c)
    })?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("new_admin", new_admin.as_str()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::Metadata { token_id } => query_metadata(deps, token_id),
        QueryMsg::OwnerOf { token_id } => query_owner_of(deps, token_id),
        QueryMsg::TokenUri { token_id } => query_token_uri(deps, token_id),
        QueryMsg::LastIssuedId {} => query_last_issued_id(deps),
        QueryMsg::PoolBalance {} => query_pool_balance(deps),
        QueryMsg::PlayerScore { player } => query_player_score(deps, player),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&CONFIG.load(deps.storage)?)
}

pub fn query_metadata(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let metadata = TOKEN_METADATA.may_load(deps.storage, token_id)?;
    to_json_binary(&MetadataResponse { metadata })
}

pub fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let owner = RegistryView::new(deps)
        .owner_of(token_id)?
        .map(|a| a.to_string());
    to_json_binary(&OwnerOfResponse { owner })
}

pub fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let token_uri = RegistryView::new(deps).token_uri(token_id)?;
    to_json_binary(&TokenUriResponse { token_uri })
}

pub fn query_last_issued_id(deps: Deps) -> StdResult<Binary> {
    let last_issued_id = RegistryView::new(deps).last_issued_id()?;
    to_json_binary(&LastIssuedIdResponse { last_issued_id })
}

pub fn query_pool_balance(deps: Deps) -> StdResult<Binary> {
    let balance = REWARD_POOL.load(deps.storage)?;
    to_json_binary(&PoolBalanceResponse { balance })
}

pub fn query_player_score(deps: Deps, player: String) -> StdResult<Binary> {
    let player = deps.api.addr_validate(&player)?;
    let record = SCORES
        .may_load(deps.storage, &player)?
        .unwrap_or_else(ScoreRecord::empty);
    to_json_binary(&PlayerScoreResponse {
        total_score: record.total_score,
        pending_reward: record.pending_reward,
        last_updated: record.last_updated,
    })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
