use anchor_lang::prelude::*;

use crate::constants::SALE_STATE_SEED;
use crate::state::SaleState;

pub fn set_base_uri(ctx: Context<SetBaseUri>, base_uri: String) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    st.require_admin(&ctx.accounts.admin.key())?;
    st.set_base_uri(base_uri)?;

    emit!(BaseUriSet {
        admin: st.admin,
        base_uri: st.base_uri.clone(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetBaseUri<'info> {
    #[account(mut, seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct BaseUriSet {
    pub admin: Pubkey,
    pub base_uri: String,
}
