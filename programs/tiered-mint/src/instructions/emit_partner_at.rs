use anchor_lang::prelude::*;

use crate::constants::{PARTNERSHIPS_SEED, SALE_STATE_SEED};
use crate::error::SaleError;
use crate::state::{Partnerships, SaleState};

/// Enumerates partners by creation order. Deletions shift later indexes down.
pub fn emit_partner_at(ctx: Context<EmitPartnerAt>, index: u32) -> Result<()> {
    let partnerships = &ctx.accounts.partnerships;
    let partner = partnerships
        .partner_at(index as usize)
        .ok_or(SaleError::PartnershipDoesNotExist)?;

    emit!(PartnerAtIndex {
        index,
        partner,
        partners_count: partnerships.partners_count() as u32,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitPartnerAt<'info> {
    #[account(seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        seeds = [PARTNERSHIPS_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub partnerships: Box<Account<'info, Partnerships>>,
}

#[event]
pub struct PartnerAtIndex {
    pub index: u32,
    pub partner: Pubkey,
    pub partners_count: u32,
}
