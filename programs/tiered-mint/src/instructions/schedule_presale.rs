use anchor_lang::prelude::*;

use crate::constants::SALE_STATE_SEED;
use crate::state::SaleState;

/// Sets the presale window `[start_ts, end_ts)`. No ordering is enforced
/// against the public sale; passing 0 as start unschedules it.
pub fn schedule_presale(ctx: Context<SchedulePresale>, start_ts: i64, end_ts: i64) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    st.require_admin(&ctx.accounts.admin.key())?;
    st.schedule_presale(start_ts, end_ts);

    emit!(PresaleScheduled {
        admin: st.admin,
        start_ts,
        end_ts,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SchedulePresale<'info> {
    #[account(mut, seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct PresaleScheduled {
    pub admin: Pubkey,
    pub start_ts: i64,
    pub end_ts: i64,
}
