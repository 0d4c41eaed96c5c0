use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
use cosmwasm_std::{from_binary, Empty};
use cw721::{ContractInfoResponse, NumTokensResponse, OwnerOfResponse};

use crate::entry::{execute, instantiate, migrate, query};
use crate::{ContractError, ExecuteMsg, InstantiateMsg, MintMsg, QueryMsg};

const MINTER: &str = "minter";
const IMPOSTER: &str = "imposter";
const COLLECTOR: &str = "collector";

fn init_msg() -> InstantiateMsg {
    InstantiateMsg {
        name: "RoseGold".to_string(),
        symbol: "RG".to_string(),
        minter: MINTER.to_string(),
    }
}

fn mint_msg(token_id: &str) -> ExecuteMsg {
    ExecuteMsg::Mint(MintMsg {
        token_id: token_id.to_string(),
        owner: COLLECTOR.to_string(),
        token_uri: None,
        extension: None,
    })
}

#[test]
fn init() {
    let mut deps = mock_dependencies();
    let info = mock_info(MINTER, &[]);

    instantiate(deps.as_mut(), mock_env(), info, init_msg()).unwrap();

    let res: ContractInfoResponse =
        from_binary(&query(deps.as_ref(), mock_env(), QueryMsg::ContractInfo {}).unwrap())
            .unwrap();
    assert_eq!(res.name, "RoseGold");
    assert_eq!(res.symbol, "RG");

    let version = cw2::get_contract_version(&deps.storage).unwrap();
    assert_eq!(version.contract, "crates.io:rose-gold-collection");
}

#[test]
fn init_requires_name_and_symbol() {
    let mut deps = mock_dependencies();
    let info = mock_info(MINTER, &[]);

    let mut msg = init_msg();
    msg.symbol = " ".to_string();
    let err = instantiate(deps.as_mut(), mock_env(), info, msg).unwrap_err();
    assert!(matches!(err, ContractError::InvalidCollectionInfo {}));
}

#[test]
fn only_minter_mints() {
    let mut deps = mock_dependencies();
    instantiate(deps.as_mut(), mock_env(), mock_info(MINTER, &[]), init_msg()).unwrap();

    let res = execute(
        deps.as_mut(),
        mock_env(),
        mock_info(IMPOSTER, &[]),
        mint_msg("0"),
    );
    assert!(res.is_err());

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(MINTER, &[]),
        mint_msg("0"),
    )
    .unwrap();

    let res: OwnerOfResponse = from_binary(
        &query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::OwnerOf {
                token_id: "0".to_string(),
                include_expired: None,
            },
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(res.owner, COLLECTOR.to_string());
}

#[test]
fn token_id_issued_once() {
    let mut deps = mock_dependencies();
    instantiate(deps.as_mut(), mock_env(), mock_info(MINTER, &[]), init_msg()).unwrap();

    execute(
        deps.as_mut(),
        mock_env(),
        mock_info(MINTER, &[]),
        mint_msg("7"),
    )
    .unwrap();
    let res = execute(
        deps.as_mut(),
        mock_env(),
        mock_info(MINTER, &[]),
        mint_msg("7"),
    );
    assert!(res.is_err());

    let res: NumTokensResponse =
        from_binary(&query(deps.as_ref(), mock_env(), QueryMsg::NumTokens {}).unwrap()).unwrap();
    assert_eq!(res.count, 1);
}

#[test]
fn migrate_checks_version() {
    let mut deps = mock_dependencies();
    instantiate(deps.as_mut(), mock_env(), mock_info(MINTER, &[]), init_msg()).unwrap();

    // same version is a no-op
    migrate(deps.as_mut(), mock_env(), Empty {}).unwrap();

    cw2::set_contract_version(&mut deps.storage, "crates.io:rose-gold-collection", "99.0.0")
        .unwrap();
    assert!(migrate(deps.as_mut(), mock_env(), Empty {}).is_err());

    cw2::set_contract_version(&mut deps.storage, "crates.io:cw721-base", "0.1.0").unwrap();
    assert!(migrate(deps.as_mut(), mock_env(), Empty {}).is_err());

    cw2::set_contract_version(&mut deps.storage, "crates.io:rose-gold-collection", "0.1.0")
        .unwrap();
    let res = migrate(deps.as_mut(), mock_env(), Empty {}).unwrap();
    assert_eq!(res.attributes[0].value, "migrate");
}
