//! Calls into the collaborators the sale relies on: the SPL token program
//! (item registry) and the system program (payment custody).

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer as SystemTransfer};
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::{SALE_STATE_SEED, TREASURY_SEED};

/// Issue `quantity` items to `to`, signed by the sale state PDA (mint authority).
pub fn issue_items<'info>(
    token_program: &Program<'info, Token>,
    item_mint: &Account<'info, Mint>,
    to: &Account<'info, TokenAccount>,
    sale_state: AccountInfo<'info>,
    sale_bump: u8,
    quantity: u64,
) -> Result<()> {
    if quantity == 0 {
        return Ok(());
    }
    let signer_seeds: &[&[&[u8]]] = &[&[SALE_STATE_SEED, &[sale_bump]]];
    token::mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: item_mint.to_account_info(),
                to: to.to_account_info(),
                authority: sale_state,
            },
            signer_seeds,
        ),
        quantity,
    )
}

/// Move the attached payment from the payer into the treasury. The whole
/// amount is kept, including anything above the price.
pub fn collect_payment<'info>(
    system_program: &Program<'info, System>,
    payer: &Signer<'info>,
    treasury: &SystemAccount<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            SystemTransfer {
                from: payer.to_account_info(),
                to: treasury.to_account_info(),
            },
        ),
        amount,
    )
}

/// Lamports the treasury keeps so it stays rent exempt.
pub fn treasury_floor() -> Result<u64> {
    Ok(Rent::get()?.minimum_balance(0))
}

/// Move everything above the rent-exempt floor from the treasury PDA into
/// `destination`. Returns the amount moved.
pub fn drain_treasury<'info>(
    system_program: &Program<'info, System>,
    treasury: &SystemAccount<'info>,
    destination: AccountInfo<'info>,
    sale_state_key: Pubkey,
    treasury_bump: u8,
) -> Result<u64> {
    let amount = treasury.lamports().saturating_sub(treasury_floor()?);
    if amount == 0 {
        return Ok(0);
    }
    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, sale_state_key.as_ref(), &[treasury_bump]]];
    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            SystemTransfer {
                from: treasury.to_account_info(),
                to: destination,
            },
            signer_seeds,
        ),
        amount,
    )?;
    Ok(amount)
}
