use crate::error::SaleError;
use crate::state::{Partnerships, SaleState};

impl SaleState {
    /// Items that can still be issued through any path.
    pub fn supply_left(&self) -> u64 {
        self.max_supply.saturating_sub(self.issued)
    }

    /// Items the public/presale path and `reserve` may still take once the
    /// reserved partner allocations are set aside. Zero when reservations
    /// already cover everything left.
    pub fn standard_supply_left(&self, partnerships: &Partnerships, now: i64) -> u64 {
        self.supply_left()
            .saturating_sub(partnerships.reserved_supply(now))
    }

    /// Bump `issued` and return the first item id of the run. Item ids are
    /// 1-based and sequential.
    pub(crate) fn record_issued(&mut self, quantity: u64) -> Result<u64, SaleError> {
        let next = self
            .issued
            .checked_add(quantity)
            .ok_or(SaleError::MathOverflow)?;
        if next > self.max_supply {
            return Err(SaleError::NotEnoughSupplyLeft);
        }
        let first_item_id = self
            .issued
            .checked_add(1)
            .ok_or(SaleError::MathOverflow)?;
        self.issued = next;
        Ok(first_item_id)
    }
}
