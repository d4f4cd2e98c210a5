//! Account store helpers
//!
//! Program-owned records at addresses the program holds no key for. An
//! address is allocated at most once; a second allocation attempt is refused,
//! which is what makes one campaign per (owner, pool) structural.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::error::CampaignError;
use crate::state::Pool;

/// True when nothing has been allocated at this address yet.
///
/// Lamports alone do not count: anyone can send SOL to an address.
pub fn is_vacant(info: &AccountInfo) -> bool {
    vacant(info.owner, info.data_is_empty())
}

fn vacant(owner: &Pubkey, data_is_empty: bool) -> bool {
    owner == &system_program::ID && data_is_empty
}

/// Reject an occupied address with the caller's error kind.
pub fn require_vacant(info: &AccountInfo, occupied: CampaignError) -> Result<()> {
    if !is_vacant(info) {
        return Err(occupied.into());
    }
    Ok(())
}

/// True when a record discriminator has already been written.
pub fn has_discriminator(data: &[u8]) -> bool {
    data.len() >= 8 && data[..8].iter().any(|&b| b != 0)
}

/// Classify the account handed to `initialize` as the pool.
///
/// Returns `true` when the address is vacant and must be allocated by the
/// program, `false` when the client pre-allocated a zeroed program-owned
/// account of sufficient size.
pub fn pool_slot(owner: &Pubkey, data: &[u8]) -> Result<bool> {
    if vacant(owner, data.is_empty()) {
        return Ok(true);
    }
    require_keys_eq!(*owner, crate::ID, CampaignError::AccountMismatch);
    require!(!has_discriminator(data), CampaignError::AlreadyInitialized);
    require!(data.len() >= Pool::LEN, CampaignError::AccountNotAllocated);
    Ok(false)
}

/// Allocate `space` bytes at `target`, owned by this program and rent-exempt.
///
/// `signer_seeds` is empty when `target` is a keypair account signing the
/// transaction itself.
pub fn allocate<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
    occupied: CampaignError,
) -> Result<()> {
    require_vacant(target, occupied)?;

    let rent = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            rent,
            space as u64,
            &crate::ID,
        )?;
        return Ok(());
    }

    // Pre-funded address: top up, then allocate and assign in place
    let top_up = rent.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )?;

    Ok(())
}

/// Serialize a record (discriminator included) into the account data.
pub fn write_record<T: AccountSerialize>(target: &AccountInfo, record: &T) -> Result<()> {
    let mut data = target.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}
