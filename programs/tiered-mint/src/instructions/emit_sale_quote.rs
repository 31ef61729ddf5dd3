use anchor_lang::prelude::*;

use crate::constants::{ACCESS_LIST_SEED, BUYER_SEED, PARTNERSHIPS_SEED, SALE_STATE_SEED};
use crate::state::{AccessList, BuyerRecord, Partnerships, SaleState};

/// Publishes the sale as seen by `wallet` right now. Read-only.
pub fn emit_sale_quote(ctx: Context<EmitSaleQuote>, wallet: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let st = &ctx.accounts.sale_state;
    let partnerships = &ctx.accounts.partnerships;

    let minted = ctx
        .accounts
        .buyer_record
        .as_ref()
        .map(|r| r.minted)
        .unwrap_or(0);

    emit!(SaleQuote {
        wallet,
        now,
        presale_active: st.presale_is_active(now),
        sale_active: st.sale_is_active(now),
        unit_price: st.price(now),
        issued: st.issued,
        max_supply: st.max_supply,
        supply_left: st.supply_left(),
        standard_supply_left: st.standard_supply_left(partnerships, now),
        reserved_supply: partnerships.reserved_supply(now),
        has_presale_access: ctx.accounts.access_list.has_access(&wallet),
        minted,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitSaleQuote<'info> {
    #[account(seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        seeds = [PARTNERSHIPS_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub partnerships: Box<Account<'info, Partnerships>>,

    #[account(
        seeds = [ACCESS_LIST_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub access_list: Box<Account<'info, AccessList>>,

    /// Absent until the wallet's first `mint`.
    #[account(
        seeds = [BUYER_SEED, sale_state.key().as_ref(), wallet.as_ref()],
        bump = buyer_record.bump
    )]
    pub buyer_record: Option<Account<'info, BuyerRecord>>,
}

#[event]
pub struct SaleQuote {
    pub wallet: Pubkey,
    pub now: i64,
    pub presale_active: bool,
    pub sale_active: bool,
    pub unit_price: u64,
    pub issued: u64,
    pub max_supply: u64,
    pub supply_left: u64,
    pub standard_supply_left: u64,
    pub reserved_supply: u64,
    pub has_presale_access: bool,
    pub minted: u64,
}
