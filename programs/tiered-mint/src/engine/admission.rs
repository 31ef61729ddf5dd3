//! Admission decisions for every issuance path.
//!
//! Each function evaluates all of its checks against the state it is handed
//! and only then commits. A rejection leaves every argument untouched, so the
//! caller never has to roll anything back. Item registry and payment
//! transfers happen afterwards, in the instruction handler.

use anchor_lang::prelude::Pubkey;

use crate::engine::schedule::SaleTier;
use crate::error::SaleError;
use crate::state::{AccessList, BuyerRecord, Partnerships, SaleState};

/// A committed run of sequential item ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Issuance {
    pub first_item_id: u64,
    pub quantity: u64,
    pub unit_price: u64,
    pub required_payment: u64,
}

impl Issuance {
    /// Last id of the run; equals `first_item_id - 1` for an empty run.
    pub fn last_item_id(&self) -> u64 {
        self.first_item_id
            .saturating_add(self.quantity)
            .saturating_sub(1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintAdmission {
    pub tier: SaleTier,
    pub issuance: Issuance,
}

fn required_payment(unit_price: u64, quantity: u64) -> Result<u64, SaleError> {
    let v = (unit_price as u128)
        .checked_mul(quantity as u128)
        .ok_or(SaleError::MathOverflow)?;
    u64::try_from(v).map_err(|_| SaleError::MathOverflow)
}

/// Standard issuance through the presale or public tier.
pub fn admit_mint(
    sale: &mut SaleState,
    partnerships: &Partnerships,
    access: &AccessList,
    buyer: &mut BuyerRecord,
    quantity: u64,
    payment: u64,
    now: i64,
) -> Result<MintAdmission, SaleError> {
    let tier = sale.active_tier(now).ok_or(SaleError::SaleNotActive)?;
    if quantity == 0 {
        return Err(SaleError::ZeroQuantity);
    }
    if quantity > sale.batch_mint_limit {
        return Err(SaleError::BatchLimitExceeded);
    }
    if quantity > sale.standard_supply_left(partnerships, now) {
        return Err(SaleError::NotEnoughSupplyLeft);
    }

    let minted_after = buyer
        .minted
        .checked_add(quantity)
        .ok_or(SaleError::MathOverflow)?;
    if tier == SaleTier::Presale {
        if !access.has_access(&buyer.buyer) {
            return Err(SaleError::PresaleAccessDenied);
        }
        if minted_after > sale.presale_mint_per_wallet_limit {
            return Err(SaleError::NotEnoughPresaleMintsLeft);
        }
    }

    let unit_price = sale.tier_price(tier);
    let required = required_payment(unit_price, quantity)?;
    if payment < required {
        return Err(SaleError::InsufficientPayment);
    }

    let first_item_id = sale.record_issued(quantity)?;
    buyer.minted = minted_after;

    Ok(MintAdmission {
        tier,
        issuance: Issuance {
            first_item_id,
            quantity,
            unit_price,
            required_payment: required,
        },
    })
}

/// Free allocation of a partner. No schedule gating, no carve-out: the
/// partner is drawing from its own reservation.
pub fn admit_free_mint(
    sale: &mut SaleState,
    partnerships: &mut Partnerships,
    partner: &Pubkey,
    quantity: u64,
) -> Result<Issuance, SaleError> {
    let entry = partnerships
        .get_mut(partner)
        .ok_or(SaleError::FreeMintAccessDenied)?;
    if quantity > sale.supply_left() {
        return Err(SaleError::NotEnoughSupplyLeft);
    }
    let free_after = entry
        .free_remaining
        .checked_sub(quantity)
        .ok_or(SaleError::NotEnoughPartnerFreeMintsLeft)?;

    let first_item_id = sale.record_issued(quantity)?;
    entry.free_remaining = free_after;

    Ok(Issuance {
        first_item_id,
        quantity,
        unit_price: 0,
        required_payment: 0,
    })
}

/// Discounted allocation of a partner. Rides on the public sale window.
pub fn admit_partner_mint(
    sale: &mut SaleState,
    partnerships: &mut Partnerships,
    partner: &Pubkey,
    quantity: u64,
    payment: u64,
    now: i64,
) -> Result<Issuance, SaleError> {
    let entry = partnerships
        .get_mut(partner)
        .ok_or(SaleError::DiscountedMintAccessDenied)?;
    if !sale.sale_is_active(now) {
        return Err(SaleError::SaleNotActive);
    }
    let discounted_after = entry
        .discounted_remaining
        .checked_sub(quantity)
        .ok_or(SaleError::NotEnoughPartnerMintsLeft)?;
    if quantity > sale.supply_left() {
        return Err(SaleError::NotEnoughSupplyLeft);
    }

    let unit_price = entry.discounted_unit_price(sale.public_price)?;
    let required = required_payment(unit_price, quantity)?;
    if payment < required {
        return Err(SaleError::InsufficientPayment);
    }

    let first_item_id = sale.record_issued(quantity)?;
    entry.discounted_remaining = discounted_after;

    Ok(Issuance {
        first_item_id,
        quantity,
        unit_price,
        required_payment: required,
    })
}

/// Administrative issuance. Unpaid and untracked per identity, but it may
/// not eat into reserved partner allocations.
pub fn admit_reserve(
    sale: &mut SaleState,
    partnerships: &Partnerships,
    quantity: u64,
    now: i64,
) -> Result<Issuance, SaleError> {
    if quantity > sale.standard_supply_left(partnerships, now) {
        return Err(SaleError::NotEnoughSupplyLeft);
    }
    let first_item_id = sale.record_issued(quantity)?;
    Ok(Issuance {
        first_item_id,
        quantity,
        unit_price: 0,
        required_payment: 0,
    })
}
