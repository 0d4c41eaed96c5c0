use cosmwasm_std::{
    Addr, BankMsg, Deps, DepsMut, Env, Event, MessageInfo, Reply, StdResult, SubMsgResult,
};
use cw_utils::nonpayable;
use sg_std::{Response, SubMsg};

use crate::access::only_admin;
use crate::error::ContractError;
use crate::msg::TreasuryResponse;
use crate::state::TOTAL_COLLECTED;

pub const WITHDRAW_REPLY_ID: u64 = 2;

/// Sends the whole contract balance to `recipient`.
///
/// The balance is held by the bank module, and the transfer is dispatched
/// only after this handler has returned, so a nested call can never see funds
/// that are already on their way out. An empty treasury makes this a no-op.
/// A failed transfer is reported through `reply_withdraw` and reverts the call.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: Addr,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    nonpayable(&info)?;

    let balances = deps
        .querier
        .query_all_balances(env.contract.address.to_string())?;

    let event = Event::new("withdraw")
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("sender", info.sender);

    if balances.is_empty() {
        return Ok(Response::new().add_event(event.add_attribute("amount", "0")));
    }

    let event = event.add_attribute(
        "amount",
        balances
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(","),
    );

    let transfer = BankMsg::Send {
        to_address: recipient.to_string(),
        amount: balances,
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(transfer, WITHDRAW_REPLY_ID))
        .add_event(event))
}

pub fn reply_withdraw(msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Err(reason) => Err(ContractError::TransferFailed { reason }),
        // only dispatched with reply_on_error
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

pub fn query_treasury(deps: Deps, env: Env) -> StdResult<TreasuryResponse> {
    let balances = deps
        .querier
        .query_all_balances(env.contract.address.to_string())?;
    let total_collected = TOTAL_COLLECTED.load(deps.storage)?;

    Ok(TreasuryResponse {
        balances,
        total_collected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ADMIN;
    use cosmwasm_std::testing::{
        mock_dependencies_with_balance, mock_env, mock_info, MOCK_CONTRACT_ADDR,
    };
    use cosmwasm_std::{coins, CosmosMsg, ReplyOn, SubMsgResponse};
    use sg_std::NATIVE_DENOM;

    #[test]
    fn withdraw_sends_everything() {
        let mut deps = mock_dependencies_with_balance(&coins(2_000, NATIVE_DENOM));
        ADMIN
            .set(deps.as_mut(), Some(Addr::unchecked("admin")))
            .unwrap();

        let res = execute_withdraw(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            Addr::unchecked("recipient"),
        )
        .unwrap();

        assert_eq!(res.messages.len(), 1);
        assert_eq!(res.messages[0].id, WITHDRAW_REPLY_ID);
        assert_eq!(res.messages[0].reply_on, ReplyOn::Error);
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "recipient".to_string(),
                amount: coins(2_000, NATIVE_DENOM),
            })
        );
    }

    #[test]
    fn withdraw_empty_treasury_is_noop() {
        let mut deps = mock_dependencies_with_balance(&[]);
        ADMIN
            .set(deps.as_mut(), Some(Addr::unchecked("admin")))
            .unwrap();

        let res = execute_withdraw(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            Addr::unchecked("recipient"),
        )
        .unwrap();
        assert!(res.messages.is_empty());

        // attribute values must never be empty on chain
        for event in res.events.iter() {
            for attr in event.attributes.iter() {
                assert!(!attr.value.is_empty(), "empty value for {}", attr.key);
            }
        }
        let amount = res.events[0]
            .attributes
            .iter()
            .find(|attr| attr.key == "amount")
            .unwrap();
        assert_eq!(amount.value, "0");
    }

    #[test]
    fn withdraw_by_stranger() {
        let mut deps = mock_dependencies_with_balance(&coins(2_000, NATIVE_DENOM));
        ADMIN
            .set(deps.as_mut(), Some(Addr::unchecked("admin")))
            .unwrap();

        let err = execute_withdraw(
            deps.as_mut(),
            mock_env(),
            mock_info("stranger", &[]),
            Addr::unchecked("stranger"),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized {});

        let balance = deps
            .as_ref()
            .querier
            .query_balance(MOCK_CONTRACT_ADDR, NATIVE_DENOM)
            .unwrap();
        assert_eq!(balance.amount.u128(), 2_000);
    }

    #[test]
    fn failed_transfer() {
        let msg = Reply {
            id: WITHDRAW_REPLY_ID,
            result: SubMsgResult::Err("insufficient funds".to_string()),
        };
        let err = reply_withdraw(msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::TransferFailed {
                reason: "insufficient funds".to_string()
            }
        );

        let msg = Reply {
            id: WITHDRAW_REPLY_ID,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![],
                data: None,
            }),
        };
        assert!(reply_withdraw(msg).is_ok());
    }
}
