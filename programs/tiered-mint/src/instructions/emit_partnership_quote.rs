use anchor_lang::prelude::*;

use crate::constants::{PARTNERSHIPS_SEED, SALE_STATE_SEED};
use crate::error::SaleError;
use crate::state::{Partnerships, SaleState};

pub fn emit_partnership_quote(ctx: Context<EmitPartnershipQuote>, partner: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let st = &ctx.accounts.sale_state;
    let partnerships = &ctx.accounts.partnerships;

    let index = partnerships
        .position(&partner)
        .ok_or(SaleError::PartnershipDoesNotExist)?;
    let p = &partnerships.entries[index];

    // Out-of-range discounts are reported as unpriceable rather than failing the quote.
    let discounted_unit_price = p.discounted_unit_price(st.public_price).ok();

    emit!(PartnershipQuote {
        partner,
        index: index as u32,
        label: p.label.clone(),
        discount_percent: p.discount_percent,
        discounted_remaining: p.discounted_remaining,
        free_remaining: p.free_remaining,
        total_supply: p.total_supply(),
        reserved: p.is_reserved(now),
        reserved_until_ts: p.reserved_until_ts,
        discounted_unit_price,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitPartnershipQuote<'info> {
    #[account(seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        seeds = [PARTNERSHIPS_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub partnerships: Box<Account<'info, Partnerships>>,
}

#[event]
pub struct PartnershipQuote {
    pub partner: Pubkey,
    pub index: u32,
    pub label: String,
    pub discount_percent: u8,
    pub discounted_remaining: u64,
    pub free_remaining: u64,
    pub total_supply: u64,
    pub reserved: bool,
    pub reserved_until_ts: i64,
    pub discounted_unit_price: Option<u64>,
}
