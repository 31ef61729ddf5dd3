use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ACCESS_LIST_SEED, BUYER_SEED, PARTNERSHIPS_SEED, SALE_STATE_SEED, TREASURY_SEED};
use crate::engine::admission;
use crate::engine::SaleTier;
use crate::error::SaleError;
use crate::state::{AccessList, BuyerRecord, Partnerships, SaleState};
use crate::utils::cpi;

/// Standard issuance. `payment` lamports move from the buyer to the
/// treasury in full once the request is admitted.
pub fn mint(ctx: Context<MintItems>, quantity: u64, payment: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let buyer_key = ctx.accounts.buyer.key();

    let record = &mut ctx.accounts.buyer_record;
    if record.buyer == Pubkey::default() {
        record.buyer = buyer_key;
        record.bump = ctx.bumps.buyer_record;
    }

    let admitted = admission::admit_mint(
        &mut ctx.accounts.sale_state,
        &ctx.accounts.partnerships,
        &ctx.accounts.access_list,
        &mut ctx.accounts.buyer_record,
        quantity,
        payment,
        now,
    )?;

    cpi::collect_payment(
        &ctx.accounts.system_program,
        &ctx.accounts.buyer,
        &ctx.accounts.treasury,
        payment,
    )?;
    cpi::issue_items(
        &ctx.accounts.token_program,
        &ctx.accounts.item_mint,
        &ctx.accounts.buyer_token_account,
        ctx.accounts.sale_state.to_account_info(),
        ctx.accounts.sale_state.bump,
        quantity,
    )?;

    emit!(ItemsMinted {
        buyer: buyer_key,
        presale: admitted.tier == SaleTier::Presale,
        quantity,
        first_item_id: admitted.issuance.first_item_id,
        last_item_id: admitted.issuance.last_item_id(),
        unit_price: admitted.issuance.unit_price,
        paid: payment,
        minted_by_buyer: ctx.accounts.buyer_record.minted,
        issued: ctx.accounts.sale_state.issued,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintItems<'info> {
    #[account(mut, seeds = [SALE_STATE_SEED], bump = sale_state.bump)]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        seeds = [PARTNERSHIPS_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub partnerships: Box<Account<'info, Partnerships>>,

    #[account(
        seeds = [ACCESS_LIST_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub access_list: Box<Account<'info, AccessList>>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + BuyerRecord::INIT_SPACE,
        seeds = [BUYER_SEED, sale_state.key().as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub buyer_record: Box<Account<'info, BuyerRecord>>,

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
        payer = buyer,
        associated_token::mint = item_mint,
        associated_token::authority = buyer
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct ItemsMinted {
    pub buyer: Pubkey,
    pub presale: bool,
    pub quantity: u64,
    pub first_item_id: u64,
    pub last_item_id: u64,
    pub unit_price: u64,
    pub paid: u64,
    pub minted_by_buyer: u64,
    pub issued: u64,
}
