pub use crate::error::ContractError;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::Empty;
use cw721_base::Extension;
use semver::Version;
use sg_std::StargazeMsgWrapper;

mod error;

#[cfg(test)]
pub mod unit_tests;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:rose-gold-collection";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// RoseGold tokens carry no on-chain metadata
pub type RoseGoldCollection<'a> =
    cw721_base::Cw721Contract<'a, Extension, StargazeMsgWrapper, Empty, Empty>;
pub type InstantiateMsg = cw721_base::InstantiateMsg;
pub type ExecuteMsg = cw721_base::ExecuteMsg<Extension, Empty>;
pub type QueryMsg = cw721_base::QueryMsg<Empty>;
pub type MintMsg = cw721_base::MintMsg<Extension>;

pub mod entry {
    use super::*;

    use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, StdError, StdResult};
    use cw2::set_contract_version;
    use sg_std::Response;

    #[cfg_attr(not(feature = "library"), entry_point)]
    pub fn instantiate(
        mut deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: InstantiateMsg,
    ) -> Result<Response, ContractError> {
        if msg.name.trim().is_empty() || msg.symbol.trim().is_empty() {
            return Err(ContractError::InvalidCollectionInfo {});
        }

        let res = RoseGoldCollection::default().instantiate(
            deps.branch(),
            env.clone(),
            info,
            msg,
        )?;

        // the base contract records its own version, migrations are checked against ours
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

        Ok(res
            .add_attribute("action", "instantiate")
            .add_attribute("rose_gold_collection_addr", env.contract.address.to_string()))
    }

    /// Minting is restricted to the minter set at instantiation, which is the
    /// RoseGold minter contract. Everything else is plain cw721.
    #[cfg_attr(not(feature = "library"), entry_point)]
    pub fn execute(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, ContractError> {
        RoseGoldCollection::default()
            .execute(deps, env, info, msg)
            .map_err(|e| e.into())
    }

    #[cfg_attr(not(feature = "library"), entry_point)]
    pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
        RoseGoldCollection::default().query(deps, env, msg)
    }

    #[cfg_attr(not(feature = "library"), entry_point)]
    pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
        let current_version = cw2::get_contract_version(deps.storage)?;
        if current_version.contract != CONTRACT_NAME {
            return Err(StdError::generic_err("Cannot upgrade to a different contract").into());
        }
        let version: Version = current_version
            .version
            .parse()
            .map_err(|_| StdError::generic_err("Invalid contract version"))?;
        let new_version: Version = CONTRACT_VERSION
            .parse()
            .map_err(|_| StdError::generic_err("Invalid contract version"))?;

        if version > new_version {
            return Err(
                StdError::generic_err("Cannot upgrade to a previous contract version").into(),
            );
        }
        if version == new_version {
            return Ok(Response::new());
        }

        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
        Ok(Response::new().add_attribute("action", "migrate"))
    }
}
