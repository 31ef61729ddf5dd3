use crate::constants::{MAX_LABEL_LEN, MAX_PARTNERS, PERCENT_DENOMINATOR};
use crate::error::SaleError;
use crate::state::{Partnership, Partnerships};
use crate::utils::time;
use anchor_lang::prelude::Pubkey;

impl Partnership {
    /// Discounted plus free allocation still unissued. Saturates, since
    /// anything past `u64::MAX` already exceeds every possible supply.
    pub fn total_supply(&self) -> u64 {
        self.discounted_remaining.saturating_add(self.free_remaining)
    }

    pub fn is_reserved(&self, now: i64) -> bool {
        time::is_before(now, self.reserved_until_ts)
    }

    /// `public_price * (100 - discount) / 100`, truncated toward zero.
    pub fn discounted_unit_price(&self, public_price: u64) -> Result<u64, SaleError> {
        let kept = PERCENT_DENOMINATOR
            .checked_sub(self.discount_percent as u64)
            .ok_or(SaleError::InvalidDiscount)?;
        let v = (public_price as u128)
            .checked_mul(kept as u128)
            .ok_or(SaleError::MathOverflow)?
            / PERCENT_DENOMINATOR as u128;
        u64::try_from(v).map_err(|_| SaleError::MathOverflow)
    }
}

/// Creation parameters for [`Partnerships::create`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPartnership {
    pub partner: Pubkey,
    pub label: String,
    pub discount_percent: u8,
    pub discounted_supply: u64,
    pub free_supply: u64,
    pub reserved_until_ts: i64,
}

impl Partnerships {
    pub fn get(&self, partner: &Pubkey) -> Option<&Partnership> {
        self.entries.iter().find(|p| p.partner == *partner)
    }

    pub fn get_mut(&mut self, partner: &Pubkey) -> Option<&mut Partnership> {
        self.entries.iter_mut().find(|p| p.partner == *partner)
    }

    pub fn position(&self, partner: &Pubkey) -> Option<usize> {
        self.entries.iter().position(|p| p.partner == *partner)
    }

    pub fn exists(&self, partner: &Pubkey) -> bool {
        self.get(partner).is_some()
    }

    pub fn partners_count(&self) -> usize {
        self.entries.len()
    }

    pub fn partner_at(&self, index: usize) -> Option<Pubkey> {
        self.entries.get(index).map(|p| p.partner)
    }

    /// Sum of every still-reserved partnership's remaining allocation,
    /// saturating at `u64::MAX`.
    pub fn reserved_supply(&self, now: i64) -> u64 {
        self.entries
            .iter()
            .filter(|p| p.is_reserved(now))
            .fold(0u64, |sum, p| sum.saturating_add(p.total_supply()))
    }

    /// Appends a partnership. Discount is stored as given; out-of-range
    /// values surface as `InvalidDiscount` when a discounted mint is priced.
    pub fn create(&mut self, new: NewPartnership) -> Result<(), SaleError> {
        if self.exists(&new.partner) {
            return Err(SaleError::PartnershipAlreadyExists);
        }
        if new.label.len() > MAX_LABEL_LEN {
            return Err(SaleError::LabelTooLong);
        }
        if self.entries.len() >= MAX_PARTNERS {
            return Err(SaleError::PartnerListFull);
        }
        self.entries.push(Partnership {
            partner: new.partner,
            label: new.label,
            discount_percent: new.discount_percent,
            discounted_remaining: new.discounted_supply,
            free_remaining: new.free_supply,
            reserved_until_ts: new.reserved_until_ts,
        });
        Ok(())
    }

    /// Removes a partnership, keeping the remaining entries in order.
    pub fn delete(&mut self, partner: &Pubkey) -> Result<Partnership, SaleError> {
        let idx = self
            .position(partner)
            .ok_or(SaleError::PartnershipDoesNotExist)?;
        Ok(self.entries.remove(idx))
    }
}
