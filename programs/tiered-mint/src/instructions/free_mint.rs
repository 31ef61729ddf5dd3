use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{PARTNERSHIPS_SEED, SALE_STATE_SEED};
use crate::engine::admission;
use crate::error::SaleError;
use crate::state::{Partnerships, SaleState};
use crate::utils::cpi;

/// A partner claims part of its free allocation.
pub fn free_mint(ctx: Context<FreeMint>, quantity: u64) -> Result<()> {
    let partner = ctx.accounts.partner.key();

    let issuance = admission::admit_free_mint(
        &mut ctx.accounts.sale_state,
        &mut ctx.accounts.partnerships,
        &partner,
        quantity,
    )?;

    cpi::issue_items(
        &ctx.accounts.token_program,
        &ctx.accounts.item_mint,
        &ctx.accounts.partner_token_account,
        ctx.accounts.sale_state.to_account_info(),
        ctx.accounts.sale_state.bump,
        quantity,
    )?;

    let remaining = ctx
        .accounts
        .partnerships
        .get(&partner)
        .map(|p| p.free_remaining)
        .unwrap_or_default();
    emit!(PartnerItemsMinted {
        partner,
        kind: PartnerMintKind::Free,
        quantity,
        first_item_id: issuance.first_item_id,
        last_item_id: issuance.last_item_id(),
        unit_price: 0,
        paid: 0,
        remaining,
        issued: ctx.accounts.sale_state.issued,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FreeMint<'info> {
    #[account(mut, seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        mut,
        seeds = [PARTNERSHIPS_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub partnerships: Box<Account<'info, Partnerships>>,

    #[account(mut, address = sale_state.item_mint @ SaleError::InvalidItemMint)]
    pub item_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = partner,
        associated_token::mint = item_mint,
        associated_token::authority = partner
    )]
    pub partner_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub partner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartnerMintKind {
    Free,
    Discounted,
}

/// Emitted by both partner paths; `remaining` is the counter the call drew from.
#[event]
pub struct PartnerItemsMinted {
    pub partner: Pubkey,
    pub kind: PartnerMintKind,
    pub quantity: u64,
    pub first_item_id: u64,
    pub last_item_id: u64,
    pub unit_price: u64,
    pub paid: u64,
    pub remaining: u64,
    pub issued: u64,
}
