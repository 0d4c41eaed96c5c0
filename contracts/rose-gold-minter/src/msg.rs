use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint128};
use cw_controllers::AdminResponse;

use crate::state::{Config, MintWindows, SudoParams};

#[cw_serde]
pub struct InstantiateMsg {
    pub collection_code_id: u64,
    pub public_mint_price: Uint128,
    pub allow_list_mint_price: Uint128,
    /// Leave empty for an unbounded supply
    pub max_supply: Option<u64>,
    /// Defaults to both windows open
    pub mint_windows: Option<MintWindows>,
    pub allow_list: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint one token at the public price
    PublicMint {},
    /// Mint one token at the allow list price, sender must be on the allow list
    AllowListMint {},
    AddAddressToAllowList {
        address: String,
    },
    /// Adds every address to the allow list, existing members are kept
    SetAllowList {
        addresses: Vec<String>,
    },
    EditMintWindows {
        public_mint_open: bool,
        allow_list_mint_open: bool,
    },
    /// Stops both mint paths until `Unpause`
    Pause {},
    Unpause {},
    /// Send the entire contract balance to `recipient`
    Withdraw {
        recipient: String,
    },
}

#[cw_serde]
pub enum SudoMsg {
    UpdateParams {
        public_mint_price: Uint128,
        allow_list_mint_price: Uint128,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(AdminResponse)]
    Admin {},
    #[returns(CollectionResponse)]
    Collection {},
    #[returns(Config)]
    Config {},
    #[returns(SudoParams)]
    Params {},
    /// Whether `address` is on the allow list
    #[returns(bool)]
    AllowList { address: String },
    #[returns(AllowListMembersResponse)]
    AllowListMembers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(u64)]
    AllowListCount {},
    #[returns(MintWindows)]
    MintWindows {},
    #[returns(bool)]
    IsPublicMintOpen {},
    #[returns(bool)]
    IsAllowListMintOpen {},
    #[returns(bool)]
    Paused {},
    #[returns(u64)]
    TotalMinted {},
    #[returns(SupplyResponse)]
    Supply {},
    #[returns(TreasuryResponse)]
    Treasury {},
}

#[cw_serde]
pub struct CollectionResponse {
    pub collection: String,
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub struct AllowListMembersResponse {
    pub members: Vec<Addr>,
}

#[cw_serde]
pub struct SupplyResponse {
    pub total_minted: u64,
    pub max_supply: Option<u64>,
}

#[cw_serde]
pub struct TreasuryResponse {
    /// Current contract balance, all of it goes out on withdraw
    pub balances: Vec<Coin>,
    /// Mint proceeds received over the contract's lifetime
    pub total_collected: Uint128,
}
