use anchor_lang::prelude::*;

use crate::constants::{MAX_LABEL_LEN, MAX_PARTNERS};

/// A partner's allocation. Both counters only ever go down.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Partnership {
    pub partner: Pubkey,
    /// Display only.
    #[max_len(MAX_LABEL_LEN)]
    pub label: String,
    /// Whole percent off the public price for `mint_as_partner`.
    pub discount_percent: u8,
    pub discounted_remaining: u64,
    pub free_remaining: u64,
    /// While `now < reserved_until_ts` the remaining counters are carved out
    /// of the supply available to the public and presale paths.
    pub reserved_until_ts: i64,
}

/// PDA holding every partnership in creation order.
#[account]
#[derive(Default, Debug, PartialEq, Eq, InitSpace)]
pub struct Partnerships {
    #[max_len(MAX_PARTNERS)]
    pub entries: Vec<Partnership>,
}
