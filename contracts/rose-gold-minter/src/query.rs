#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Addr, Binary, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;
use cw_utils::maybe_addr;

use crate::access::is_on_allow_list;
use crate::contract::{COLLECTION_NAME, COLLECTION_SYMBOL};
use crate::msg::{AllowListMembersResponse, CollectionResponse, QueryMsg, SupplyResponse};
use crate::state::{
    ADMIN, ALLOW_LIST, ALLOW_LIST_COUNT, COLLECTION, CONFIG, MINT_WINDOWS, PAUSED, SUDO_PARAMS,
    TOTAL_MINTED,
};
use crate::treasury::query_treasury;

// Query limits
const DEFAULT_QUERY_LIMIT: u32 = 10;
const MAX_QUERY_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    let api = deps.api;

    match msg {
        QueryMsg::Admin {} => to_binary(&ADMIN.query_admin(deps)?),
        QueryMsg::Collection {} => to_binary(&query_collection(deps)?),
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Params {} => to_binary(&SUDO_PARAMS.load(deps.storage)?),
        QueryMsg::AllowList { address } => to_binary(&is_on_allow_list(
            deps.storage,
            &api.addr_validate(&address)?,
        )),
        QueryMsg::AllowListMembers { start_after, limit } => {
            to_binary(&query_allow_list_members(deps, start_after, limit)?)
        }
        QueryMsg::AllowListCount {} => to_binary(&ALLOW_LIST_COUNT.load(deps.storage)?),
        QueryMsg::MintWindows {} => to_binary(&MINT_WINDOWS.load(deps.storage)?),
        QueryMsg::IsPublicMintOpen {} => {
            to_binary(&MINT_WINDOWS.load(deps.storage)?.public_mint_open)
        }
        QueryMsg::IsAllowListMintOpen {} => {
            to_binary(&MINT_WINDOWS.load(deps.storage)?.allow_list_mint_open)
        }
        QueryMsg::Paused {} => to_binary(&PAUSED.load(deps.storage)?),
        QueryMsg::TotalMinted {} => to_binary(&TOTAL_MINTED.load(deps.storage)?),
        QueryMsg::Supply {} => to_binary(&query_supply(deps)?),
        QueryMsg::Treasury {} => to_binary(&query_treasury(deps, env)?),
    }
}

fn query_collection(deps: Deps) -> StdResult<CollectionResponse> {
    let collection = COLLECTION.load(deps.storage)?;
    Ok(CollectionResponse {
        collection: collection.to_string(),
        name: COLLECTION_NAME.to_string(),
        symbol: COLLECTION_SYMBOL.to_string(),
    })
}

fn query_supply(deps: Deps) -> StdResult<SupplyResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(SupplyResponse {
        total_minted: TOTAL_MINTED.load(deps.storage)?,
        max_supply: config.max_supply,
    })
}

pub fn query_allow_list_members(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AllowListMembersResponse> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start_after = maybe_addr(deps.api, start_after)?;
    let start = start_after.as_ref().map(Bound::exclusive);

    let members = ALLOW_LIST
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<Addr>>>()?;

    Ok(AllowListMembersResponse { members })
}
