use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::SaleConfig;

declare_id!("4pJDXcgb2PSvboWuSP9U7PJaNTTP4G14vz69ydj76EZq");

#[program]
pub mod tiered_mint {
    use super::*;

    pub fn initialize_sale(ctx: Context<InitializeSale>, config: SaleConfig) -> Result<()> {
        instructions::initialize_sale::initialize_sale(ctx, config)
    }

    pub fn set_base_uri(ctx: Context<SetBaseUri>, base_uri: String) -> Result<()> {
        instructions::set_base_uri::set_base_uri(ctx, base_uri)
    }

    pub fn schedule_presale(ctx: Context<SchedulePresale>, start_ts: i64, end_ts: i64) -> Result<()> {
        instructions::schedule_presale::schedule_presale(ctx, start_ts, end_ts)
    }

    pub fn schedule_sale(ctx: Context<ScheduleSale>, start_ts: i64) -> Result<()> {
        instructions::schedule_sale::schedule_sale(ctx, start_ts)
    }

    pub fn grant_presale_access(
        ctx: Context<UpdatePresaleAccess>,
        wallets: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::grant_presale_access::grant_presale_access(ctx, wallets)
    }

    pub fn revoke_presale_access(
        ctx: Context<UpdatePresaleAccess>,
        wallets: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::revoke_presale_access::revoke_presale_access(ctx, wallets)
    }

    pub fn mint(ctx: Context<MintItems>, quantity: u64, payment: u64) -> Result<()> {
        instructions::mint::mint(ctx, quantity, payment)
    }

    pub fn free_mint(ctx: Context<FreeMint>, quantity: u64) -> Result<()> {
        instructions::free_mint::free_mint(ctx, quantity)
    }

    pub fn mint_as_partner(ctx: Context<MintAsPartner>, quantity: u64, payment: u64) -> Result<()> {
        instructions::mint_as_partner::mint_as_partner(ctx, quantity, payment)
    }

    pub fn create_partnership(
        ctx: Context<ManagePartnerships>,
        partner: Pubkey,
        label: String,
        discount_percent: u8,
        discounted_supply: u64,
        free_supply: u64,
        reserved_until_ts: i64,
    ) -> Result<()> {
        instructions::create_partnership::create_partnership(
            ctx,
            partner,
            label,
            discount_percent,
            discounted_supply,
            free_supply,
            reserved_until_ts,
        )
    }

    pub fn delete_partnership(ctx: Context<ManagePartnerships>, partner: Pubkey) -> Result<()> {
        instructions::delete_partnership::delete_partnership(ctx, partner)
    }

    pub fn reserve(ctx: Context<Reserve>, quantity: u64) -> Result<()> {
        instructions::reserve::reserve(ctx, quantity)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::withdraw(ctx)
    }

    /// Read-only: emits a `SaleQuote` event for `wallet`.
    pub fn emit_sale_quote(ctx: Context<EmitSaleQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_sale_quote::emit_sale_quote(ctx, wallet)
    }

    /// Read-only: emits a `PartnershipQuote` event for `partner`.
    pub fn emit_partnership_quote(
        ctx: Context<EmitPartnershipQuote>,
        partner: Pubkey,
    ) -> Result<()> {
        instructions::emit_partnership_quote::emit_partnership_quote(ctx, partner)
    }

    /// Read-only: emits the partner at `index` in creation order.
    pub fn emit_partner_at(ctx: Context<EmitPartnerAt>, index: u32) -> Result<()> {
        instructions::emit_partner_at::emit_partner_at(ctx, index)
    }
}
