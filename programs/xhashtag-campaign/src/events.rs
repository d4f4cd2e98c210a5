//! Events emitted by the campaign program

use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub pool_signer: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CampaignCreated {
    pub pool: Pubkey,
    pub campaign: Pubkey,
    pub owner: Pubkey,
    pub reward_token_mint: Pubkey,
    pub reward_token_vault: Pubkey,
    pub reward_amount: u64,
    pub total_submission_required: u64,
    pub campaign_count: u64,
    pub timestamp: i64,
}

#[event]
pub struct CampaignActivationChanged {
    pub campaign: Pubkey,
    pub owner: Pubkey,
    pub is_active: bool,
    pub timestamp: i64,
}

#[event]
pub struct SubmissionRecorded {
    pub campaign: Pubkey,
    pub owner: Pubkey,
    pub current_submission: u64,
    pub total_submission_required: u64,
    pub timestamp: i64,
}
