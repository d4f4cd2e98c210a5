//! Set Activation Instruction
//!
//! Owner-only toggle of `is_active`. Idempotent.

use anchor_lang::prelude::*;

use crate::events::CampaignActivationChanged;
use crate::processor;
use crate::state::{Campaign, Pool};

/// Accounts for set_activation_campaign instruction.
#[derive(Accounts)]
pub struct SetActivationCampaign<'info> {
    pub pool: Account<'info, Pool>,

    /// Must match `campaign.owner`.
    pub owner: Signer<'info>,

    #[account(mut)]
    pub campaign: Account<'info, Campaign>,
}

/// Handler for set_activation_campaign instruction.
pub fn handler(ctx: Context<SetActivationCampaign>, activate: bool) -> Result<()> {
    let campaign_key = ctx.accounts.campaign.key();
    let owner = ctx.accounts.owner.key();

    processor::set_activation(
        ctx.program_id,
        &ctx.accounts.pool.key(),
        &campaign_key,
        &mut ctx.accounts.campaign,
        &owner,
        activate,
    )?;

    emit!(CampaignActivationChanged {
        campaign: campaign_key,
        owner,
        is_active: activate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Campaign active: {}", activate);

    Ok(())
}
