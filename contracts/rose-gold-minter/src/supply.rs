use cosmwasm_std::{StdError, Storage};

use crate::error::ContractError;
use crate::state::{CONFIG, TOTAL_MINTED};

/// Reserves the next token id and records the increment.
///
/// Ids are 0-based and sequential: the id handed out is the number of tokens
/// minted before this call, so an id is never issued twice. Fails with
/// `SupplyExhausted` once a configured max supply has been reached.
pub fn issue_next(storage: &mut dyn Storage) -> Result<u64, ContractError> {
    let config = CONFIG.load(storage)?;
    let minted = TOTAL_MINTED.load(storage)?;

    if let Some(max_supply) = config.max_supply {
        if minted >= max_supply {
            return Err(ContractError::SupplyExhausted { max_supply });
        }
    }

    let next = minted
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("token id overflow"))?;
    TOTAL_MINTED.save(storage, &next)?;

    Ok(minted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Config;
    use cosmwasm_std::testing::MockStorage;

    fn storage(max_supply: Option<u64>, minted: u64) -> MockStorage {
        let mut storage = MockStorage::new();
        CONFIG
            .save(
                &mut storage,
                &Config {
                    collection_code_id: 1,
                    max_supply,
                },
            )
            .unwrap();
        TOTAL_MINTED.save(&mut storage, &minted).unwrap();
        storage
    }

    #[test]
    fn issues_sequential_ids() {
        let mut storage = storage(Some(3), 0);

        assert_eq!(issue_next(&mut storage).unwrap(), 0);
        assert_eq!(issue_next(&mut storage).unwrap(), 1);
        assert_eq!(issue_next(&mut storage).unwrap(), 2);
        assert_eq!(TOTAL_MINTED.load(&storage).unwrap(), 3);
    }

    #[test]
    fn stops_at_max_supply() {
        let mut storage = storage(Some(2), 2);

        let err = issue_next(&mut storage).unwrap_err();
        assert_eq!(err, ContractError::SupplyExhausted { max_supply: 2 });
        assert_eq!(TOTAL_MINTED.load(&storage).unwrap(), 2);
    }

    #[test]
    fn unbounded_supply() {
        let mut storage = storage(None, 1_000_000);

        assert_eq!(issue_next(&mut storage).unwrap(), 1_000_000);
        assert_eq!(TOTAL_MINTED.load(&storage).unwrap(), 1_000_001);
    }

    #[test]
    fn overflow_is_an_error() {
        let mut storage = storage(None, u64::MAX);

        assert!(issue_next(&mut storage).is_err());
        assert_eq!(TOTAL_MINTED.load(&storage).unwrap(), u64::MAX);
    }
}
