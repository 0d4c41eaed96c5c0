use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Code id the collection was instantiated from
    pub collection_code_id: u64,
    /// Fixed at instantiation, `None` means supply is unbounded
    pub max_supply: Option<u64>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Prices are denominated in the native denom
#[cw_serde]
pub struct SudoParams {
    pub public_mint_price: Uint128,
    pub allow_list_mint_price: Uint128,
}

pub const SUDO_PARAMS: Item<SudoParams> = Item::new("params");

#[cw_serde]
pub struct MintWindows {
    pub public_mint_open: bool,
    pub allow_list_mint_open: bool,
}

impl Default for MintWindows {
    fn default() -> Self {
        Self {
            public_mint_open: true,
            allow_list_mint_open: true,
        }
    }
}

pub const MINT_WINDOWS: Item<MintWindows> = Item::new("mint-windows");

/// Emergency stop for both mint paths, independent of the windows
pub const PAUSED: Item<bool> = Item::new("paused");

pub const COLLECTION: Item<Addr> = Item::new("collection");

/// Set once at instantiation
pub const ADMIN: Admin = Admin::new("admin");

pub const ALLOW_LIST: Map<&Addr, bool> = Map::new("al");
pub const ALLOW_LIST_COUNT: Item<u64> = Item::new("al-count");

pub const TOTAL_MINTED: Item<u64> = Item::new("total-minted");

/// Lifetime mint proceeds, never decreased by withdrawals
pub const TOTAL_COLLECTED: Item<Uint128> = Item::new("total-collected");
