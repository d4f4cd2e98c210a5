//! Add Submission Instruction
//!
//! Records one submission against the campaign quota. Owner-only.
//! Activation is not checked; gating on `is_active` is left to callers.

use anchor_lang::prelude::*;

use crate::events::SubmissionRecorded;
use crate::processor;
use crate::state::{Campaign, Pool};

/// Accounts for add_submission instruction.
#[derive(Accounts)]
pub struct AddSubmission<'info> {
    pub pool: Account<'info, Pool>,

    /// Must match `campaign.owner`.
    pub owner: Signer<'info>,

    #[account(mut)]
    pub campaign: Account<'info, Campaign>,
}

/// Handler for add_submission instruction.
pub fn handler(ctx: Context<AddSubmission>) -> Result<()> {
    let campaign_key = ctx.accounts.campaign.key();
    let owner = ctx.accounts.owner.key();

    let current_submission = processor::add_submission(
        ctx.program_id,
        &ctx.accounts.pool.key(),
        &campaign_key,
        &mut ctx.accounts.campaign,
        &owner,
    )?;

    emit!(SubmissionRecorded {
        campaign: campaign_key,
        owner,
        current_submission,
        total_submission_required: ctx.accounts.campaign.total_submission_required,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Submission {}/{}",
        current_submission,
        ctx.accounts.campaign.total_submission_required
    );

    Ok(())
}
