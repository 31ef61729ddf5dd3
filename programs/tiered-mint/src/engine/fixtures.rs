//! Shared builders for engine tests.

use anchor_lang::prelude::Pubkey;

use crate::engine::partnerships::NewPartnership;
use crate::state::{AccessList, BuyerRecord, SaleConfig, SaleState};

pub const T0: i64 = 1_767_225_600; // 2026-01-01T00:00:00Z
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SEVENTY_TWO_HOURS: i64 = 72 * SECONDS_PER_HOUR;

pub fn sale(max_supply: u64) -> SaleState {
    let mut st = SaleState::default();
    st.initialize(
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        255,
        &SaleConfig {
            max_supply,
            ..SaleConfig::default()
        },
    )
    .unwrap();
    st
}

pub fn public_sale(max_supply: u64) -> SaleState {
    let mut st = sale(max_supply);
    st.schedule_sale(T0);
    st
}

pub fn presale(max_supply: u64) -> SaleState {
    let mut st = sale(max_supply);
    st.schedule_presale(T0, T0 + SEVENTY_TWO_HOURS);
    st
}

pub fn buyer() -> BuyerRecord {
    BuyerRecord {
        buyer: Pubkey::new_unique(),
        minted: 0,
        bump: 255,
    }
}

pub fn allow(records: &[&BuyerRecord]) -> AccessList {
    let mut list = AccessList::default();
    let wallets: Vec<Pubkey> = records.iter().map(|r| r.buyer).collect();
    list.grant(&wallets).unwrap();
    list
}

pub fn partnership(
    discount_percent: u8,
    discounted_supply: u64,
    free_supply: u64,
    reserved_until_ts: i64,
) -> NewPartnership {
    NewPartnership {
        partner: Pubkey::new_unique(),
        label: "Partner Guild".to_string(),
        discount_percent,
        discounted_supply,
        free_supply,
        reserved_until_ts,
    }
}
