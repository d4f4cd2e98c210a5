//! Create Campaign Instruction
//!
//! Creates the campaign record at `[owner, pool]` and locks the reward in an
//! escrow vault controlled by the pool signer. The campaign address can only
//! be allocated once, so a second campaign for the same owner and pool is
//! refused with `DuplicateCampaign`.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::CampaignError;
use crate::escrow::{self, TokenAccountView};
use crate::events::CampaignCreated;
use crate::processor::{self, CampaignKeys, CampaignParams};
use crate::state::{Campaign, Pool};
use crate::store;

/// Accounts for create_campaign instruction.
#[derive(Accounts)]
pub struct CreateCampaign<'info> {
    /// Pool the campaign is created under.
    #[account(mut)]
    pub pool: Box<Account<'info, Pool>>,

    /// Campaign owner and depositor (signs, pays rent).
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Owner's reward token account (debited).
    #[account(mut)]
    pub reward_token_depositor: Box<Account<'info, TokenAccount>>,

    pub reward_token_mint: Box<Account<'info, Mint>>,

    /// Escrow vault (credited), authority must be the pool signer.
    #[account(mut)]
    pub reward_token_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: address derived from `[owner, pool]` and allocated by the handler
    #[account(mut)]
    pub campaign: UncheckedAccount<'info>,

    /// CHECK: address derived from `[pool]`, verified by the handler
    pub pool_signer: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

/// Handler for create_campaign instruction.
///
/// Validation order: amounts, derived addresses, duplicate, text limits,
/// funding.
/// Nothing is written until all of them pass.
#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<CreateCampaign>,
    campaign_nonce: u8,
    pool_nonce: u8,
    details: Vec<String>,
    submission_requirement: Vec<String>,
    total_submission_required: Option<u64>,
    reward_amount: Option<u64>,
) -> Result<()> {
    let accounts = &ctx.accounts;
    let keys = CampaignKeys {
        pool: accounts.pool.key(),
        owner: accounts.owner.key(),
        pool_signer: accounts.pool_signer.key(),
        campaign: accounts.campaign.key(),
        reward_token_mint: accounts.reward_token_mint.key(),
        reward_token_vault: accounts.reward_token_vault.key(),
    };
    let params = CampaignParams {
        details,
        submission_requirement,
        total_submission_required,
        reward_amount,
    };

    // ========== VALIDATION ==========

    let record = processor::prepare_campaign(
        ctx.program_id,
        &keys,
        &accounts.pool,
        pool_nonce,
        campaign_nonce,
        params,
    )?;

    let campaign_info = accounts.campaign.to_account_info();
    store::require_vacant(&campaign_info, CampaignError::DuplicateCampaign)?;
    processor::check_metadata(&record)?;

    escrow::check_funding(
        &TokenAccountView::of(&accounts.reward_token_depositor),
        &TokenAccountView::of(&accounts.reward_token_vault),
        &keys.reward_token_mint,
        &keys.owner,
        &keys.pool_signer,
        record.reward_amount,
    )?;

    // ========== ALLOCATION ==========

    let nonce = [campaign_nonce];
    let seeds: &[&[u8]] = &[keys.owner.as_ref(), keys.pool.as_ref(), &nonce];
    store::allocate(
        &accounts.owner.to_account_info(),
        &campaign_info,
        &accounts.system_program.to_account_info(),
        Campaign::space(&record.details, &record.submission_requirement),
        &[seeds],
        CampaignError::DuplicateCampaign,
    )?;

    // ========== TOKEN TRANSFER ==========

    escrow::fund_vault(
        &accounts.token_program,
        &accounts.reward_token_depositor,
        &accounts.reward_token_vault,
        &accounts.owner,
        record.reward_amount,
    )?;

    // ========== STATE UPDATE ==========

    store::write_record(&campaign_info, &record)?;

    let campaign_count = ctx.accounts.pool.increment_campaign_count()?;

    emit!(CampaignCreated {
        pool: keys.pool,
        campaign: keys.campaign,
        owner: keys.owner,
        reward_token_mint: keys.reward_token_mint,
        reward_token_vault: keys.reward_token_vault,
        reward_amount: record.reward_amount,
        total_submission_required: record.total_submission_required,
        campaign_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Campaign created");
    msg!("Reward amount: {}", record.reward_amount);
    msg!("Campaign count: {}", campaign_count);

    Ok(())
}
