use anchor_lang::prelude::*;

/// Per-buyer counter of items issued through `mint`. Partner paths do not
/// touch it.
#[account]
#[derive(Default, Debug, PartialEq, Eq, InitSpace)]
pub struct BuyerRecord {
    pub buyer: Pubkey,
    pub minted: u64,
    pub bump: u8,
}
