use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::{
    ACCESS_LIST_SEED, ITEM_MINT_SEED, PARTNERSHIPS_SEED, SALE_STATE_SEED, TREASURY_SEED,
};
use crate::state::{AccessList, Partnerships, SaleConfig, SaleState};
use crate::utils::cpi;

pub fn initialize_sale(ctx: Context<InitializeSale>, config: SaleConfig) -> Result<()> {
    let item_mint = ctx.accounts.item_mint.key();
    let admin = ctx.accounts.admin.key();

    let st = &mut ctx.accounts.sale_state;
    st.initialize(admin, item_mint, ctx.bumps.sale_state, &config)?;

    // Both lists start empty; creation order is the partner enumeration order.
    ctx.accounts.partnerships.entries = Vec::new();
    ctx.accounts.access_list.wallets = Vec::new();

    // Treasury holds its rent-exempt floor for life.
    let floor = cpi::treasury_floor()?;
    let topup = floor.saturating_sub(ctx.accounts.treasury.lamports());
    cpi::collect_payment(
        &ctx.accounts.system_program,
        &ctx.accounts.admin,
        &ctx.accounts.treasury,
        topup,
    )?;

    msg!("Sale initialized: max_supply={}", config.max_supply);
    emit!(SaleInitialized {
        admin,
        item_mint,
        max_supply: config.max_supply,
        public_price: config.public_price,
        presale_price: config.presale_price,
        batch_mint_limit: config.batch_mint_limit,
        presale_mint_per_wallet_limit: config.presale_mint_per_wallet_limit,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSale<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + SaleState::INIT_SPACE,
        seeds = [SALE_STATE_SEED],
        bump
    )]
    pub sale_state: Box<Account<'info, SaleState>>,

    #[account(
        init,
        payer = admin,
        space = 8 + Partnerships::INIT_SPACE,
        seeds = [PARTNERSHIPS_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub partnerships: Box<Account<'info, Partnerships>>,

    #[account(
        init,
        payer = admin,
        space = 8 + AccessList::INIT_SPACE,
        seeds = [ACCESS_LIST_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub access_list: Box<Account<'info, AccessList>>,

    #[account(
        init,
        payer = admin,
        mint::decimals = 0,
        mint::authority = sale_state,
        seeds = [ITEM_MINT_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub item_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, sale_state.key().as_ref()],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct SaleInitialized {
    pub admin: Pubkey,
    pub item_mint: Pubkey,
    pub max_supply: u64,
    pub public_price: u64,
    pub presale_price: u64,
    pub batch_mint_limit: u64,
    pub presale_mint_per_wallet_limit: u64,
}
