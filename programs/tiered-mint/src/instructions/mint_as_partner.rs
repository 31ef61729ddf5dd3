use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use super::{PartnerItemsMinted, PartnerMintKind};
use crate::constants::{PARTNERSHIPS_SEED, SALE_STATE_SEED, TREASURY_SEED};
use crate::engine::admission;
use crate::error::SaleError;
use crate::state::{Partnerships, SaleState};
use crate::utils::cpi;

/// A partner buys from its discounted allocation during the public sale.
pub fn mint_as_partner(ctx: Context<MintAsPartner>, quantity: u64, payment: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let partner = ctx.accounts.partner.key();

    let issuance = admission::admit_partner_mint(
        &mut ctx.accounts.sale_state,
        &mut ctx.accounts.partnerships,
        &partner,
        quantity,
        payment,
        now,
    )?;

    cpi::collect_payment(
        &ctx.accounts.system_program,
        &ctx.accounts.partner,
        &ctx.accounts.treasury,
        payment,
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
        .map(|p| p.discounted_remaining)
        .unwrap_or_default();
    emit!(PartnerItemsMinted {
        partner,
        kind: PartnerMintKind::Discounted,
        quantity,
        first_item_id: issuance.first_item_id,
        last_item_id: issuance.last_item_id(),
        unit_price: issuance.unit_price,
        paid: payment,
        remaining,
        issued: ctx.accounts.sale_state.issued,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintAsPartner<'info> {
    #[account(mut, seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        mut,
        seeds = [PARTNERSHIPS_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub partnerships: Box<Account<'info, Partnerships>>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub treasury: SystemAccount<'info>,

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
