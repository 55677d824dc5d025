use cosmwasm_std::{Addr, Deps, StdResult};

use crate::state::{CONFIG, TOKEN_COUNT, TOKEN_OWNERS};

/// Read capability a token registry exposes to the host. Conformance is
/// structural: the query handlers route through this trait, and the test
/// harness exercises it through a generic bound.
pub trait TokenInterface {
    /// Highest token id issued so far; 0 before the first mint.
    fn last_issued_id(&self) -> StdResult<u64>;
    /// Deterministic URI for a token id, defined for every id whether or
    /// not it was ever minted.
    fn token_uri(&self, token_id: u64) -> StdResult<Option<String>>;
    /// Current holder, or None if the id was never minted.
    fn owner_of(&self, token_id: u64) -> StdResult<Option<Addr>>;
}

/// Storage-backed registry view used by the query handlers
pub struct RegistryView<'a> {
    deps: Deps<'a>,
}

impl<'a> RegistryView<'a> {
    pub fn new(deps: Deps<'a>) -> Self {
        Self { deps }
    }
}

impl TokenInterface for RegistryView<'_> {
    fn last_issued_id(&self) -> StdResult<u64> {
        TOKEN_COUNT.load(self.deps.storage)
    }

    fn token_uri(&self, token_id: u64) -> StdResult<Option<String>> {
        let config = CONFIG.load(self.deps.storage)?;
        Ok(Some(format!("{}/{}", config.base_token_uri, token_id)))
    }

    fn owner_of(&self, token_id: u64) -> StdResult<Option<Addr>> {
        TOKEN_OWNERS.may_load(self.deps.storage, token_id)
    }
}
