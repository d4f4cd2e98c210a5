//! Initialize Pool Instruction
//!
//! The pool lives at a client-generated keypair address. The client may
//! allocate it beforehand (program-owned, zeroed); otherwise it is allocated
//! here with the authority paying rent.

use anchor_lang::prelude::*;

use crate::error::CampaignError;
use crate::events::PoolInitialized;
use crate::processor;
use crate::state::Pool;
use crate::store;

/// Accounts for initialize instruction.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Wallet initializing the pool (pays for allocation).
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Pool keypair account.
    #[account(mut)]
    pub pool: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler for initialize instruction.
///
/// # Arguments
/// * `nonce` - Pool signer nonce for seeds `[pool]`
pub fn handler(ctx: Context<Initialize>, nonce: u8) -> Result<()> {
    let pool_info = ctx.accounts.pool.to_account_info();
    let authority = ctx.accounts.authority.key();

    // ========== VALIDATION ==========

    let needs_allocation = store::pool_slot(pool_info.owner, &pool_info.try_borrow_data()?[..])?;

    let (record, pool_signer) =
        processor::initialize_pool(ctx.program_id, &pool_info.key(), nonce, authority)?;

    // ========== ALLOCATION ==========

    if needs_allocation {
        store::allocate(
            &ctx.accounts.authority.to_account_info(),
            &pool_info,
            &ctx.accounts.system_program.to_account_info(),
            Pool::LEN,
            &[],
            CampaignError::AlreadyInitialized,
        )?;
    }

    // ========== STATE UPDATE ==========

    store::write_record(&pool_info, &record)?;

    emit!(PoolInitialized {
        pool: pool_info.key(),
        authority,
        pool_signer,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Pool initialized");
    msg!("Pool signer: {}", pool_signer);

    Ok(())
}
