//! xHashtag Campaign
//!
//! On-chain escrow and campaign tracking for a token-incentivized submission
//! platform. A pool owner initializes a pool; depositors create one campaign
//! each per pool, locking a reward in an escrow vault whose only spending
//! authority is the pool signer PDA, and record submissions up to a quota.
//!
//! Architecture:
//! - Pool: keypair account, counts campaigns, anchors the pool signer
//! - Campaign: PDA at `[owner, pool]`, allocate-once for uniqueness
//! - Every derived account is re-derived from instruction arguments and
//!   checked against the supplied one before anything is written

use anchor_lang::prelude::*;

pub mod error;
pub mod escrow;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod processor;
pub mod state;
pub mod store;


use instructions::*;

declare_id!("8m2Bv1yJoTsVPMn2xXoPGZpn1DdG5fF6SLDdUXfRyCpA");

#[program]
pub mod xhashtag_campaign {
    use super::*;

    /// Initialize a pool at a client-generated keypair address.
    ///
    /// # Arguments
    /// * `nonce` - Pool signer nonce for seeds `[pool]`
    pub fn initialize(ctx: Context<Initialize>, nonce: u8) -> Result<()> {
        instructions::initialize::handler(ctx, nonce)
    }

    /// Create the caller's campaign under a pool and fund its escrow vault.
    ///
    /// Fails with `DuplicateCampaign` if the caller already has a campaign
    /// in this pool.
    #[allow(clippy::too_many_arguments)]
    pub fn create_campaign(
        ctx: Context<CreateCampaign>,
        campaign_nonce: u8,
        pool_nonce: u8,
        details: Vec<String>,
        submission_requirement: Vec<String>,
        total_submission_required: Option<u64>,
        reward_amount: Option<u64>,
    ) -> Result<()> {
        instructions::create_campaign::handler(
            ctx,
            campaign_nonce,
            pool_nonce,
            details,
            submission_requirement,
            total_submission_required,
            reward_amount,
        )
    }

    pub fn set_activation_campaign(
        ctx: Context<SetActivationCampaign>,
        activate: bool,
    ) -> Result<()> {
        instructions::set_activation_campaign::handler(ctx, activate)
    }

    pub fn add_submission(ctx: Context<AddSubmission>) -> Result<()> {
        instructions::add_submission::handler(ctx)
    }
}
