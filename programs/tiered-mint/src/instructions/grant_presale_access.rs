use anchor_lang::prelude::*;

use crate::constants::{ACCESS_LIST_SEED, SALE_STATE_SEED};
use crate::state::{AccessList, SaleState};

pub fn grant_presale_access(ctx: Context<UpdatePresaleAccess>, wallets: Vec<Pubkey>) -> Result<()> {
    let st = &ctx.accounts.sale_state;
    st.require_admin(&ctx.accounts.admin.key())?;

    let added = ctx.accounts.access_list.grant(&wallets)?;

    emit!(PresaleAccessGranted {
        admin: st.admin,
        requested: wallets.len() as u32,
        added,
        total: ctx.accounts.access_list.wallets.len() as u32,
    });
    Ok(())
}

/// Shared by grant and revoke.
#[derive(Accounts)]
pub struct UpdatePresaleAccess<'info> {
    #[account(seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        mut,
        seeds = [ACCESS_LIST_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub access_list: Box<Account<'info, AccessList>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct PresaleAccessGranted {
    pub admin: Pubkey,
    pub requested: u32,
    pub added: u32,
    pub total: u32,
}
