use anchor_lang::prelude::*;

use crate::constants::MAX_ACCESS_LIST;

/// PDA holding the presale allow-list. Entries are unique.
#[account]
#[derive(Default, Debug, PartialEq, Eq, InitSpace)]
pub struct AccessList {
    #[max_len(MAX_ACCESS_LIST)]
    pub wallets: Vec<Pubkey>,
}
