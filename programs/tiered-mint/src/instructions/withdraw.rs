use anchor_lang::prelude::*;

use crate::constants::{SALE_STATE_SEED, TREASURY_SEED};
use crate::state::SaleState;
use crate::utils::cpi;

/// Moves the whole treasury balance to the admin.
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let st = &ctx.accounts.sale_state;
    st.require_admin(&ctx.accounts.admin.key())?;

    let amount = cpi::drain_treasury(
        &ctx.accounts.system_program,
        &ctx.accounts.treasury,
        ctx.accounts.admin.to_account_info(),
        st.key(),
        ctx.bumps.treasury,
    )?;

    emit!(TreasuryWithdrawn {
        admin: st.admin,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TreasuryWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
}
