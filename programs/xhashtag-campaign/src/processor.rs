//! Host-agnostic operation core
//!
//! Every instruction handler funnels through these functions: they take the
//! already-loaded records plus the caller-supplied keys, run all validation
//! and return the records to write. Allocation, token movement and account
//! writes stay with the caller, which is what lets the same logic run under
//! the Anchor runtime and against an in-memory ledger.

use anchor_lang::prelude::*;

use crate::error::CampaignError;
use crate::pda;
use crate::state::campaign::{MAX_TEXT_ENTRIES, MAX_TEXT_LEN};
use crate::state::{Campaign, Pool};

/// Caller-supplied creation parameters.
///
/// Quota and reward amount are optional on the wire so that a request
/// omitting them is rejected as malformed instead of failing to decode.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignParams {
    pub details: Vec<String>,
    pub submission_requirement: Vec<String>,
    pub total_submission_required: Option<u64>,
    pub reward_amount: Option<u64>,
}

/// Quota and reward amount once presence and range are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CampaignTerms {
    pub total_submission_required: u64,
    pub reward_amount: u64,
}

impl CampaignParams {
    /// Presence and range of quota and reward. Text lists are checked
    /// separately by [`check_metadata`], once the address is known to be free.
    pub fn validate(&self) -> Result<CampaignTerms> {
        let total_submission_required = self
            .total_submission_required
            .ok_or(error!(CampaignError::InvalidArguments))?;
        let reward_amount = self
            .reward_amount
            .ok_or(error!(CampaignError::InvalidArguments))?;
        require!(reward_amount > 0, CampaignError::InvalidArguments);

        Ok(CampaignTerms {
            total_submission_required,
            reward_amount,
        })
    }
}

/// Enforce the size limits on a new campaign's text lists.
///
/// Runs after the duplicate check: a repeat request for an existing pair is
/// a duplicate whatever metadata it carries.
pub fn check_metadata(campaign: &Campaign) -> Result<()> {
    for entries in [&campaign.details, &campaign.submission_requirement] {
        require!(entries.len() <= MAX_TEXT_ENTRIES, CampaignError::InvalidArguments);
        require!(
            entries.iter().all(|e| e.len() <= MAX_TEXT_LEN),
            CampaignError::InvalidArguments
        );
    }
    Ok(())
}

/// Keys named by a create_campaign request.
#[derive(Clone, Copy, Debug)]
pub struct CampaignKeys {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub pool_signer: Pubkey,
    pub campaign: Pubkey,
    pub reward_token_mint: Pubkey,
    pub reward_token_vault: Pubkey,
}

/// Validate an initialize request and build the fresh pool record.
///
/// Returns the record together with the pool signer address.
pub fn initialize_pool(
    program_id: &Pubkey,
    pool: &Pubkey,
    nonce: u8,
    authority: Pubkey,
) -> Result<(Pool, Pubkey)> {
    let pool_signer = pda::verify_nonce(&pda::pool_signer_seeds(pool), nonce, program_id)?;

    Ok((Pool::new(authority, nonce), pool_signer))
}

/// Validate a create_campaign request's amounts and derived addresses.
/// Returns the campaign record to write once the duplicate, metadata and
/// funding checks also pass.
pub fn prepare_campaign(
    program_id: &Pubkey,
    keys: &CampaignKeys,
    pool: &Pool,
    pool_nonce: u8,
    campaign_nonce: u8,
    params: CampaignParams,
) -> Result<Campaign> {
    let terms = params.validate()?;

    require!(pool_nonce == pool.signer_nonce, CampaignError::BadSeed);
    pda::verify_pool_signer(&keys.pool, pool_nonce, &keys.pool_signer, program_id)?;
    pda::verify_campaign_address(
        &keys.owner,
        &keys.pool,
        campaign_nonce,
        &keys.campaign,
        program_id,
    )?;

    Ok(Campaign {
        owner: keys.owner,
        pool: keys.pool,
        reward_token_mint: keys.reward_token_mint,
        reward_token_vault: keys.reward_token_vault,
        reward_amount: terms.reward_amount,
        details: params.details,
        submission_requirement: params.submission_requirement,
        total_submission_required: terms.total_submission_required,
        current_submission: 0,
        is_active: false,
        nonce: campaign_nonce,
    })
}

/// Check that an existing campaign account is the one its record claims to be.
pub fn verify_campaign(
    program_id: &Pubkey,
    pool: &Pubkey,
    campaign_key: &Pubkey,
    campaign: &Campaign,
) -> Result<()> {
    require_keys_eq!(campaign.pool, *pool, CampaignError::AccountMismatch);
    pda::verify_stored_campaign(&campaign.owner, pool, campaign.nonce, campaign_key, program_id)
}

pub fn set_activation(
    program_id: &Pubkey,
    pool: &Pubkey,
    campaign_key: &Pubkey,
    campaign: &mut Campaign,
    signer: &Pubkey,
    activate: bool,
) -> Result<()> {
    verify_campaign(program_id, pool, campaign_key, campaign)?;
    campaign.set_activation(signer, activate)
}

pub fn add_submission(
    program_id: &Pubkey,
    pool: &Pubkey,
    campaign_key: &Pubkey,
    campaign: &mut Campaign,
    signer: &Pubkey,
) -> Result<u64> {
    verify_campaign(program_id, pool, campaign_key, campaign)?;
    campaign.record_submission(signer)
}
