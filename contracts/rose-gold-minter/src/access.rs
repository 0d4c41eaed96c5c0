use cosmwasm_std::{Addr, Deps, DepsMut, Event, MessageInfo, StdError, StdResult, Storage};
use cw_utils::nonpayable;
use sg_std::Response;

use crate::error::ContractError;
use crate::state::{ADMIN, ALLOW_LIST, ALLOW_LIST_COUNT};

/// Every privileged handler runs this before touching state
pub fn only_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    if !ADMIN.is_admin(deps, &info.sender)? {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

pub fn is_on_allow_list(storage: &dyn Storage, address: &Addr) -> bool {
    ALLOW_LIST.has(storage, address)
}

/// Adds members that are not already present and returns the new member count.
/// Existing members are left untouched.
pub fn add_to_allow_list(storage: &mut dyn Storage, mut members: Vec<Addr>) -> StdResult<u64> {
    let mut count = ALLOW_LIST_COUNT.load(storage)?;

    // dedupe
    members.sort_unstable();
    members.dedup();

    for member in members.iter() {
        if !ALLOW_LIST.has(storage, member) {
            ALLOW_LIST.save(storage, member, &true)?;
            count += 1;
        }
    }

    ALLOW_LIST_COUNT.save(storage, &count)?;
    Ok(count)
}

pub fn execute_add_address_to_allow_list(
    deps: DepsMut,
    info: MessageInfo,
    address: Addr,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    nonpayable(&info)?;

    let count = add_to_allow_list(deps.storage, vec![address.clone()])?;

    let event = Event::new("add_address_to_allow_list")
        .add_attribute("address", address)
        .add_attribute("new-count", count.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

/// Marks every address as a member. This is a union with the current list,
/// previous members stay on it.
pub fn execute_set_allow_list(
    deps: DepsMut,
    info: MessageInfo,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    nonpayable(&info)?;

    let members = addresses
        .iter()
        .map(|address| deps.api.addr_validate(address))
        .collect::<Result<Vec<Addr>, StdError>>()?;
    let count = add_to_allow_list(deps.storage, members)?;

    let event = Event::new("set_allow_list")
        .add_attribute("addresses", addresses.len().to_string())
        .add_attribute("new-count", count.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}
