use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{PARTNERSHIPS_SEED, SALE_STATE_SEED};
use crate::engine::admission;
use crate::error::SaleError;
use crate::state::{Partnerships, SaleState};
use crate::utils::cpi;

/// Admin issuance without payment, into any token account of the item mint.
pub fn reserve(ctx: Context<Reserve>, quantity: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .sale_state
        .require_admin(&ctx.accounts.admin.key())?;

    let issuance = admission::admit_reserve(
        &mut ctx.accounts.sale_state,
        &ctx.accounts.partnerships,
        quantity,
        now,
    )?;

    cpi::issue_items(
        &ctx.accounts.token_program,
        &ctx.accounts.item_mint,
        &ctx.accounts.recipient_token_account,
        ctx.accounts.sale_state.to_account_info(),
        ctx.accounts.sale_state.bump,
        quantity,
    )?;

    emit!(ItemsReserved {
        admin: ctx.accounts.sale_state.admin,
        recipient: ctx.accounts.recipient_token_account.owner,
        quantity,
        first_item_id: issuance.first_item_id,
        last_item_id: issuance.last_item_id(),
        issued: ctx.accounts.sale_state.issued,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Reserve<'info> {
    #[account(mut, seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        seeds = [PARTNERSHIPS_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub partnerships: Box<Account<'info, Partnerships>>,

    #[account(mut, address = sale_state.item_mint @ SaleError::InvalidItemMint)]
    pub item_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = recipient_token_account.mint == item_mint.key() @ SaleError::InvalidTokenAccount,
    )]
    pub recipient_token_account: Box<Account<'info, TokenAccount>>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ItemsReserved {
    pub admin: Pubkey,
    pub recipient: Pubkey,
    pub quantity: u64,
    pub first_item_id: u64,
    pub last_item_id: u64,
    pub issued: u64,
}
