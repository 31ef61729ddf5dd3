use anchor_lang::prelude::*;

use super::ManagePartnerships;

pub fn delete_partnership(ctx: Context<ManagePartnerships>, partner: Pubkey) -> Result<()> {
    let st = &ctx.accounts.sale_state;
    st.require_admin(&ctx.accounts.admin.key())?;

    let removed = ctx.accounts.partnerships.delete(&partner)?;

    emit!(PartnershipDeleted {
        admin: st.admin,
        partner,
        discounted_remaining: removed.discounted_remaining,
        free_remaining: removed.free_remaining,
        partners_count: ctx.accounts.partnerships.partners_count() as u32,
    });
    Ok(())
}

#[event]
pub struct PartnershipDeleted {
    pub admin: Pubkey,
    pub partner: Pubkey,
    /// Allocation released back to the general pool.
    pub discounted_remaining: u64,
    pub free_remaining: u64,
    pub partners_count: u32,
}
