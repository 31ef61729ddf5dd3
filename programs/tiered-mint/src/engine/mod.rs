//! Supply accounting and admission decisions, free of any account plumbing.

pub mod access;
pub mod admission;
pub mod partnerships;
pub mod schedule;
pub mod supply;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod invariants;

pub use admission::{Issuance, MintAdmission};
pub use partnerships::NewPartnership;
pub use schedule::SaleTier;
