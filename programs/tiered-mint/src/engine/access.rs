use anchor_lang::prelude::Pubkey;

use crate::constants::MAX_ACCESS_LIST;
use crate::error::SaleError;
use crate::state::{AccessList, SaleState};

impl SaleState {
    /// Capability gate for every administrative instruction.
    pub fn require_admin(&self, caller: &Pubkey) -> Result<(), SaleError> {
        if *caller != self.admin {
            return Err(SaleError::UnauthorizedAdmin);
        }
        Ok(())
    }
}

impl AccessList {
    pub fn has_access(&self, wallet: &Pubkey) -> bool {
        self.wallets.contains(wallet)
    }

    /// Grants every wallet not already listed. The batch is sized up front so
    /// a full list rejects it before anything is written. Returns how many
    /// wallets were newly added.
    pub fn grant(&mut self, wallets: &[Pubkey]) -> Result<u32, SaleError> {
        let mut fresh: Vec<Pubkey> = Vec::with_capacity(wallets.len());
        for w in wallets {
            if !self.has_access(w) && !fresh.contains(w) {
                fresh.push(*w);
            }
        }
        let total = self
            .wallets
            .len()
            .checked_add(fresh.len())
            .ok_or(SaleError::MathOverflow)?;
        if total > MAX_ACCESS_LIST {
            return Err(SaleError::AccessListFull);
        }
        let added = u32::try_from(fresh.len()).map_err(|_| SaleError::MathOverflow)?;
        self.wallets.extend(fresh);
        Ok(added)
    }

    /// Revokes every listed wallet; unknown wallets are ignored. Returns how
    /// many were removed.
    pub fn revoke(&mut self, wallets: &[Pubkey]) -> u32 {
        let before = self.wallets.len();
        self.wallets.retain(|w| !wallets.contains(w));
        (before - self.wallets.len()) as u32
    }
}
