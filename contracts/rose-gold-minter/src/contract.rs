#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, to_binary, Addr, DepsMut, Env, Event, MessageInfo, Reply, StdError, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw_utils::{nonpayable, parse_reply_instantiate_data};
use rose_gold_collection::InstantiateMsg as CollectionInstantiateMsg;
use semver::Version;
use sg_std::{Response, SubMsg};

use crate::access::{
    add_to_allow_list, execute_add_address_to_allow_list, execute_set_allow_list, only_admin,
};
use crate::error::ContractError;
use crate::mint::{execute_allow_list_mint, execute_public_mint};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg};
use crate::state::{
    Config, MintWindows, SudoParams, ADMIN, ALLOW_LIST_COUNT, COLLECTION, CONFIG, MINT_WINDOWS,
    PAUSED, SUDO_PARAMS, TOTAL_COLLECTED, TOTAL_MINTED,
};
use crate::treasury::{execute_withdraw, reply_withdraw, WITHDRAW_REPLY_ID};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:rose-gold-minter";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COLLECTION_NAME: &str = "RoseGold";
pub const COLLECTION_SYMBOL: &str = "RG";

const INIT_COLLECTION_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.max_supply == Some(0) {
        return Err(ContractError::InvalidMaxSupply {});
    }

    ADMIN.set(deps.branch(), Some(info.sender.clone()))?;

    CONFIG.save(
        deps.storage,
        &Config {
            collection_code_id: msg.collection_code_id,
            max_supply: msg.max_supply,
        },
    )?;
    SUDO_PARAMS.save(
        deps.storage,
        &SudoParams {
            public_mint_price: msg.public_mint_price,
            allow_list_mint_price: msg.allow_list_mint_price,
        },
    )?;
    MINT_WINDOWS.save(deps.storage, &msg.mint_windows.unwrap_or_default())?;
    PAUSED.save(deps.storage, &false)?;
    TOTAL_MINTED.save(deps.storage, &0u64)?;
    TOTAL_COLLECTED.save(deps.storage, &Uint128::zero())?;

    ALLOW_LIST_COUNT.save(deps.storage, &0u64)?;
    let members = msg
        .allow_list
        .iter()
        .map(|address| deps.api.addr_validate(address))
        .collect::<Result<Vec<Addr>, StdError>>()?;
    let count = add_to_allow_list(deps.storage, members)?;

    // the minter is the only account allowed to mint on the collection
    let wasm_msg = WasmMsg::Instantiate {
        code_id: msg.collection_code_id,
        msg: to_binary(&CollectionInstantiateMsg {
            name: COLLECTION_NAME.to_string(),
            symbol: COLLECTION_SYMBOL.to_string(),
            minter: env.contract.address.to_string(),
        })?,
        funds: vec![],
        admin: Some(info.sender.to_string()),
        label: "RoseGold Collection".to_string(),
    };
    let submsg = SubMsg::reply_on_success(wasm_msg, INIT_COLLECTION_REPLY_ID);

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("allow_list_count", count.to_string())
        .add_submessage(submsg)
        .add_attribute("admin", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INIT_COLLECTION_REPLY_ID => reply_init_collection(deps, msg),
        WITHDRAW_REPLY_ID => reply_withdraw(msg),
        _ => Err(ContractError::InvalidReplyID {}),
    }
}

fn reply_init_collection(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let reply = parse_reply_instantiate_data(msg);
    match reply {
        Ok(res) => {
            let collection_address = deps.api.addr_validate(&res.contract_address)?;
            COLLECTION.save(deps.storage, &collection_address)?;

            Ok(Response::default()
                .add_attribute("action", "init_collection_reply")
                .add_attribute("collection", collection_address))
        }
        Err(_) => Err(ContractError::ReplyOnSuccess {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;

    match msg {
        ExecuteMsg::PublicMint {} => execute_public_mint(deps, info),
        ExecuteMsg::AllowListMint {} => execute_allow_list_mint(deps, info),
        ExecuteMsg::AddAddressToAllowList { address } => {
            execute_add_address_to_allow_list(deps, info, api.addr_validate(&address)?)
        }
        ExecuteMsg::SetAllowList { addresses } => execute_set_allow_list(deps, info, addresses),
        ExecuteMsg::EditMintWindows {
            public_mint_open,
            allow_list_mint_open,
        } => execute_edit_mint_windows(
            deps,
            info,
            MintWindows {
                public_mint_open,
                allow_list_mint_open,
            },
        ),
        ExecuteMsg::Pause {} => execute_pause(deps, info, true),
        ExecuteMsg::Unpause {} => execute_pause(deps, info, false),
        ExecuteMsg::Withdraw { recipient } => {
            execute_withdraw(deps, env, info, api.addr_validate(&recipient)?)
        }
    }
}

/// Overwrites both windows in one call
pub fn execute_edit_mint_windows(
    deps: DepsMut,
    info: MessageInfo,
    windows: MintWindows,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    nonpayable(&info)?;

    MINT_WINDOWS.save(deps.storage, &windows)?;

    let event = Event::new("edit_mint_windows")
        .add_attribute("public_mint_open", windows.public_mint_open.to_string())
        .add_attribute(
            "allow_list_mint_open",
            windows.allow_list_mint_open.to_string(),
        )
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_pause(
    deps: DepsMut,
    info: MessageInfo,
    pause: bool,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    nonpayable(&info)?;

    PAUSED.save(deps.storage, &pause)?;

    let event = Event::new("pause")
        .add_attribute("pause", pause.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let prev_contract_version = cw2::get_contract_version(deps.storage)?;

    ensure!(
        prev_contract_version.contract == CONTRACT_NAME,
        StdError::generic_err("Invalid contract name for migration")
    );

    let prev_version: Version = prev_contract_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    ensure!(
        prev_version < new_version,
        StdError::generic_err("Must upgrade contract version")
    );

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let event = Event::new("migrate")
        .add_attribute("from_name", prev_contract_version.contract)
        .add_attribute("from_version", prev_contract_version.version)
        .add_attribute("to_name", CONTRACT_NAME)
        .add_attribute("to_version", CONTRACT_VERSION);
    Ok(Response::new().add_event(event))
}
