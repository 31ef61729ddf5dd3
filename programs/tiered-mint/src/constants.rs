//! Program-wide constants: sale defaults, capacity bounds and PDA seeds.

/// Default maximum number of items that can ever be issued.
pub const DEFAULT_MAX_SUPPLY: u64 = 9_393;

/// Default public sale unit price, in lamports (0.2 SOL).
pub const DEFAULT_PUBLIC_PRICE: u64 = 200_000_000;

/// Default presale unit price, in lamports (0.15 SOL).
pub const DEFAULT_PRESALE_PRICE: u64 = 150_000_000;

/// Default max items per `mint` call.
pub const DEFAULT_BATCH_MINT_LIMIT: u64 = 5;

/// Default max items a single wallet may mint while the presale is active.
pub const DEFAULT_PRESALE_MINT_PER_WALLET_LIMIT: u64 = 3;

/// Max wallets stored in the presale access list.
pub const MAX_ACCESS_LIST: usize = 300;

/// Max partnerships stored in the partnerships list.
pub const MAX_PARTNERS: usize = 50;

/// Max partnership label length, in bytes.
pub const MAX_LABEL_LEN: usize = 32;

/// Max metadata base URI length, in bytes.
pub const MAX_BASE_URI_LEN: usize = 200;

/// Discounts are expressed in whole percent.
pub const PERCENT_DENOMINATOR: u64 = 100;

pub const SALE_STATE_SEED: &[u8] = b"sale_state";
pub const PARTNERSHIPS_SEED: &[u8] = b"partnerships";
pub const ACCESS_LIST_SEED: &[u8] = b"access_list";
pub const BUYER_SEED: &[u8] = b"buyer";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const ITEM_MINT_SEED: &[u8] = b"item_mint";
