#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{DepsMut, Env, Event, Uint128};
use sg_std::Response;

use crate::{
    msg::SudoMsg,
    state::{SudoParams, SUDO_PARAMS},
    ContractError,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn sudo(deps: DepsMut, _env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::UpdateParams {
            public_mint_price,
            allow_list_mint_price,
        } => sudo_update_params(deps, public_mint_price, allow_list_mint_price),
    }
}

/// Only governance can change the mint prices
pub fn sudo_update_params(
    deps: DepsMut,
    public_mint_price: Uint128,
    allow_list_mint_price: Uint128,
) -> Result<Response, ContractError> {
    SUDO_PARAMS.save(
        deps.storage,
        &SudoParams {
            public_mint_price,
            allow_list_mint_price,
        },
    )?;

    let event = Event::new("update_params")
        .add_attribute("public_mint_price", public_mint_price.to_string())
        .add_attribute("allow_list_mint_price", allow_list_mint_price.to_string());
    Ok(Response::new().add_event(event))
}
