use anchor_lang::prelude::*;

use crate::constants::SALE_STATE_SEED;
use crate::state::SaleState;

pub fn schedule_sale(ctx: Context<ScheduleSale>, start_ts: i64) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    st.require_admin(&ctx.accounts.admin.key())?;
    st.schedule_sale(start_ts);

    emit!(SaleScheduled {
        admin: st.admin,
        start_ts,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ScheduleSale<'info> {
    #[account(mut, seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct SaleScheduled {
    pub admin: Pubkey,
    pub start_ts: i64,
}
