use anchor_lang::prelude::*;

use super::UpdatePresaleAccess;

pub fn revoke_presale_access(
    ctx: Context<UpdatePresaleAccess>,
    wallets: Vec<Pubkey>,
) -> Result<()> {
    let st = &ctx.accounts.sale_state;
    st.require_admin(&ctx.accounts.admin.key())?;

    let removed = ctx.accounts.access_list.revoke(&wallets);

    emit!(PresaleAccessRevoked {
        admin: st.admin,
        requested: wallets.len() as u32,
        removed,
        total: ctx.accounts.access_list.wallets.len() as u32,
    });
    Ok(())
}

#[event]
pub struct PresaleAccessRevoked {
    pub admin: Pubkey,
    pub requested: u32,
    pub removed: u32,
    pub total: u32,
}
