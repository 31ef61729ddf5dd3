use anchor_lang::prelude::*;

use crate::constants::{
    DEFAULT_BATCH_MINT_LIMIT, DEFAULT_MAX_SUPPLY, DEFAULT_PRESALE_MINT_PER_WALLET_LIMIT,
    DEFAULT_PRESALE_PRICE, DEFAULT_PUBLIC_PRICE, MAX_BASE_URI_LEN,
};
use crate::error::SaleError;

/// Single sale state PDA: supply ledger, schedule, pricing and admin.
#[account]
#[derive(Default, Debug, PartialEq, Eq, InitSpace)]
pub struct SaleState {
    /// Admin authority, the only caller allowed through `require_admin`.
    pub admin: Pubkey,
    /// SPL mint that represents issued items (0 decimals).
    pub item_mint: Pubkey,
    pub bump: u8,
    /// Items ever issuable. Fixed at initialization.
    pub max_supply: u64,
    /// Items issued so far through every path.
    pub issued: u64,
    pub public_price: u64,
    pub presale_price: u64,
    pub batch_mint_limit: u64,
    pub presale_mint_per_wallet_limit: u64,
    /// Presale window `[start, end)`, Unix seconds. 0 means unset.
    pub presale_start_ts: i64,
    pub presale_end_ts: i64,
    /// Public sale start, Unix seconds. 0 means unset.
    pub sale_start_ts: i64,
    #[max_len(MAX_BASE_URI_LEN)]
    pub base_uri: String,
}

impl SaleState {
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        item_mint: Pubkey,
        bump: u8,
        config: &SaleConfig,
    ) -> std::result::Result<(), SaleError> {
        config.validate()?;
        self.admin = admin;
        self.item_mint = item_mint;
        self.bump = bump;
        self.max_supply = config.max_supply;
        self.issued = 0;
        self.public_price = config.public_price;
        self.presale_price = config.presale_price;
        self.batch_mint_limit = config.batch_mint_limit;
        self.presale_mint_per_wallet_limit = config.presale_mint_per_wallet_limit;
        self.presale_start_ts = 0;
        self.presale_end_ts = 0;
        self.sale_start_ts = 0;
        self.base_uri = String::new();
        Ok(())
    }

    pub fn set_base_uri(&mut self, uri: String) -> std::result::Result<(), SaleError> {
        if uri.len() > MAX_BASE_URI_LEN {
            return Err(SaleError::BaseUriTooLong);
        }
        self.base_uri = uri;
        Ok(())
    }
}

/// Sale parameters supplied once to `initialize_sale`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaleConfig {
    pub max_supply: u64,
    pub public_price: u64,
    pub presale_price: u64,
    pub batch_mint_limit: u64,
    pub presale_mint_per_wallet_limit: u64,
}

impl Default for SaleConfig {
    fn default() -> Self {
        Self {
            max_supply: DEFAULT_MAX_SUPPLY,
            public_price: DEFAULT_PUBLIC_PRICE,
            presale_price: DEFAULT_PRESALE_PRICE,
            batch_mint_limit: DEFAULT_BATCH_MINT_LIMIT,
            presale_mint_per_wallet_limit: DEFAULT_PRESALE_MINT_PER_WALLET_LIMIT,
        }
    }
}

impl SaleConfig {
    pub fn validate(&self) -> std::result::Result<(), SaleError> {
        if self.max_supply == 0
            || self.batch_mint_limit == 0
            || self.presale_mint_per_wallet_limit == 0
        {
            return Err(SaleError::InvalidConfig);
        }
        // Presale is the cheaper tier.
        if self.presale_price >= self.public_price {
            return Err(SaleError::InvalidConfig);
        }
        Ok(())
    }
}
