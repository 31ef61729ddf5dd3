use crate::state::SaleState;
use crate::utils::time;

/// Which standard tier a `mint` is priced and gated under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaleTier {
    Presale,
    Public,
}

impl SaleState {
    pub fn schedule_presale(&mut self, start_ts: i64, end_ts: i64) {
        self.presale_start_ts = start_ts;
        self.presale_end_ts = end_ts;
    }

    pub fn schedule_sale(&mut self, start_ts: i64) {
        self.sale_start_ts = start_ts;
    }

    pub fn presale_is_active(&self, now: i64) -> bool {
        time::is_within_window(now, self.presale_start_ts, self.presale_end_ts)
    }

    pub fn sale_is_active(&self, now: i64) -> bool {
        time::has_started(now, self.sale_start_ts)
    }

    /// Presale wins whenever its window is open, even if the public sale has
    /// started too. `None` when neither is active.
    pub fn active_tier(&self, now: i64) -> Option<SaleTier> {
        if self.presale_is_active(now) {
            Some(SaleTier::Presale)
        } else if self.sale_is_active(now) {
            Some(SaleTier::Public)
        } else {
            None
        }
    }

    pub fn tier_price(&self, tier: SaleTier) -> u64 {
        match tier {
            SaleTier::Presale => self.presale_price,
            SaleTier::Public => self.public_price,
        }
    }

    /// Current unit price. Outside any window this is the public price.
    pub fn price(&self, now: i64) -> u64 {
        self.tier_price(self.active_tier(now).unwrap_or(SaleTier::Public))
    }
}
