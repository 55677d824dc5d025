use cosmwasm_std::{Addr, Deps, MessageInfo};

use crate::error::ContractError;
use crate::state::CONFIG;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_GAME_TYPE_LEN: usize = 50;
/// Ceiling on free-form rarity strings in relaxed mode
pub const MAX_RARITY_LEN: usize = 20;
pub const RARITIES: [&str; 4] = ["common", "rare", "epic", "legendary"];

pub fn assert_admin(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.admin {
        return Err(ContractError::NotAuthorized {
            role: "admin".to_string(),
        });
    }
    Ok(())
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

/// Non-empty, length-capped text field check
pub fn validate_text_field(
    field: &str,
    value: &str,
    max_len: usize,
) -> Result<(), ContractError> {
    if value.is_empty() {
        return Err(ContractError::InvalidParameters {
            reason: format!("{field} must not be empty"),
        });
    }
    if value.chars().count() > max_len {
        return Err(ContractError::InvalidParameters {
            reason: format!("{field} exceeds {max_len} characters"),
        });
    }
    Ok(())
}

pub fn validate_rarity(rarity: &str, relaxed: bool) -> Result<(), ContractError> {
    if relaxed {
        return validate_text_field("rarity", rarity, MAX_RARITY_LEN);
    }
    if !RARITIES.contains(&rarity) {
        return Err(ContractError::InvalidParameters {
            reason: format!("unknown rarity: {rarity}"),
        });
    }
    Ok(())
}

pub fn validate_metadata(
    name: &str,
    description: &str,
    rarity: &str,
    game_type: &str,
    relaxed_rarity: bool,
) -> Result<(), ContractError> {
    validate_text_field("name", name, MAX_NAME_LEN)?;
    validate_text_field("description", description, MAX_DESCRIPTION_LEN)?;
    validate_rarity(rarity, relaxed_rarity)?;
    validate_text_field("game_type", game_type, MAX_GAME_TYPE_LEN)?;
    Ok(())
}

/// Address well-formedness check, surfaced as InvalidParameters rather
/// than a bare Std error
pub fn validate_addr(deps: Deps, candidate: &str) -> Result<Addr, ContractError> {
    deps.api
        .addr_validate(candidate)
        .map_err(|_| ContractError::InvalidParameters {
            reason: format!("malformed address: {candidate}"),
        })
}

/// Principal-sanity check applied to transfer recipients and proposed
/// admins: well-formed and distinct from the invoking identity.
pub fn validate_principal(
    deps: Deps,
    sender: &Addr,
    candidate: &str,
) -> Result<Addr, ContractError> {
    let addr = validate_addr(deps, candidate)?;
    if addr == *sender {
        return Err(ContractError::InvalidParameters {
            reason: "recipient must differ from the invoking identity".to_string(),
        });
    }
    Ok(addr)
}
