use anchor_lang::prelude::*;

/// Rejection reasons surfaced by every instruction. Messages are stable.
#[error_code]
pub enum SaleError {
    #[msg("Caller is not authorized")]
    UnauthorizedAdmin,

    #[msg("Sale is not active")]
    SaleNotActive,

    #[msg("Must mint at least one item")]
    ZeroQuantity,

    #[msg("Can't mint these many items at once")]
    BatchLimitExceeded,

    #[msg("Supply left is not enough")]
    NotEnoughSupplyLeft,

    #[msg("Not enough presale mints left")]
    NotEnoughPresaleMintsLeft,

    #[msg("Not enough partner free mints left")]
    NotEnoughPartnerFreeMintsLeft,

    #[msg("Not enough partner mints left")]
    NotEnoughPartnerMintsLeft,

    #[msg("Not enough funds to purchase")]
    InsufficientPayment,

    #[msg("Presale access denied")]
    PresaleAccessDenied,

    #[msg("Only partners have access to free mints")]
    FreeMintAccessDenied,

    #[msg("Only partners have access to discounted mints")]
    DiscountedMintAccessDenied,

    #[msg("Partnership already exists")]
    PartnershipAlreadyExists,

    #[msg("Partnership does not exist")]
    PartnershipDoesNotExist,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Discount percent must be at most 100")]
    InvalidDiscount,

    #[msg("Partnership label is too long")]
    LabelTooLong,

    #[msg("Base URI is too long")]
    BaseUriTooLong,

    #[msg("Presale access list is full")]
    AccessListFull,

    #[msg("Partnership list is full")]
    PartnerListFull,

    #[msg("Invalid item mint")]
    InvalidItemMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Coarse classification of [`SaleError`], used by clients to decide how to
/// react (fix the request, wait for a window, top up funds...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionKind {
    Authorization,
    Schedule,
    Quantity,
    SupplyExhausted,
    Payment,
    Access,
    Conflict,
    NotFound,
    Invalid,
}

impl SaleError {
    pub fn kind(&self) -> RejectionKind {
        match self {
            SaleError::UnauthorizedAdmin => RejectionKind::Authorization,
            SaleError::SaleNotActive => RejectionKind::Schedule,
            SaleError::ZeroQuantity | SaleError::BatchLimitExceeded => RejectionKind::Quantity,
            SaleError::NotEnoughSupplyLeft
            | SaleError::NotEnoughPresaleMintsLeft
            | SaleError::NotEnoughPartnerFreeMintsLeft
            | SaleError::NotEnoughPartnerMintsLeft => RejectionKind::SupplyExhausted,
            SaleError::InsufficientPayment => RejectionKind::Payment,
            SaleError::PresaleAccessDenied
            | SaleError::FreeMintAccessDenied
            | SaleError::DiscountedMintAccessDenied => RejectionKind::Access,
            SaleError::PartnershipAlreadyExists => RejectionKind::Conflict,
            SaleError::PartnershipDoesNotExist => RejectionKind::NotFound,
            SaleError::InvalidConfig
            | SaleError::InvalidDiscount
            | SaleError::LabelTooLong
            | SaleError::BaseUriTooLong
            | SaleError::AccessListFull
            | SaleError::PartnerListFull
            | SaleError::InvalidItemMint
            | SaleError::InvalidTokenAccount
            | SaleError::MathOverflow => RejectionKind::Invalid,
        }
    }
}
