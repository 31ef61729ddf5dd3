use anchor_lang::prelude::*;

use crate::constants::{PARTNERSHIPS_SEED, SALE_STATE_SEED};
use crate::engine::NewPartnership;
use crate::state::{Partnerships, SaleState};

pub fn create_partnership(
    ctx: Context<ManagePartnerships>,
    partner: Pubkey,
    label: String,
    discount_percent: u8,
    discounted_supply: u64,
    free_supply: u64,
    reserved_until_ts: i64,
) -> Result<()> {
    let st = &ctx.accounts.sale_state;
    st.require_admin(&ctx.accounts.admin.key())?;

    ctx.accounts.partnerships.create(NewPartnership {
        partner,
        label: label.clone(),
        discount_percent,
        discounted_supply,
        free_supply,
        reserved_until_ts,
    })?;

    emit!(PartnershipCreated {
        admin: st.admin,
        partner,
        label,
        discount_percent,
        discounted_supply,
        free_supply,
        reserved_until_ts,
        partners_count: ctx.accounts.partnerships.partners_count() as u32,
    });
    Ok(())
}

/// Shared by create and delete.
#[derive(Accounts)]
pub struct ManagePartnerships<'info> {
    #[account(seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        mut,
        seeds = [PARTNERSHIPS_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub partnerships: Box<Account<'info, Partnerships>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct PartnershipCreated {
    pub admin: Pubkey,
    pub partner: Pubkey,
    pub label: String,
    pub discount_percent: u8,
    pub discounted_supply: u64,
    pub free_supply: u64,
    pub reserved_until_ts: i64,
    pub partners_count: u32,
}
