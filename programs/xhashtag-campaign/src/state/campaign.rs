//! Campaign state account
//!
//! One campaign per (owner, pool). The record holds the escrowed reward
//! description, free-form metadata and the submission quota.

use anchor_lang::prelude::*;

use crate::error::CampaignError;

/// Maximum entries in `details` or `submission_requirement`
pub const MAX_TEXT_ENTRIES: usize = 8;

/// Maximum byte length of a single text entry
pub const MAX_TEXT_LEN: usize = 128;

/// Reward escrow and submission quota record.
///
/// PDA Seeds: `[owner.key().as_ref(), pool.key().as_ref()]`
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Campaign {
    /// Depositor and sole operator of this campaign
    pub owner: Pubkey,

    /// Owning pool
    pub pool: Pubkey,

    /// Reward token mint
    pub reward_token_mint: Pubkey,

    /// Escrow token account, authority = pool signer
    pub reward_token_vault: Pubkey,

    /// Amount locked in the vault at creation
    pub reward_amount: u64,

    /// Campaign metadata
    pub details: Vec<String>,

    /// Required proof types for a submission
    pub submission_requirement: Vec<String>,

    /// Submission quota (immutable after creation)
    pub total_submission_required: u64,

    /// Submissions recorded so far
    pub current_submission: u64,

    pub is_active: bool,

    /// Campaign PDA nonce
    pub nonce: u8,
}

impl Campaign {
    const FIXED_LEN: usize = 8 // discriminator
        + 32 // owner
        + 32 // pool
        + 32 // reward_token_mint
        + 32 // reward_token_vault
        + 8  // reward_amount
        + 4  // details vec prefix
        + 4  // submission_requirement vec prefix
        + 8  // total_submission_required
        + 8  // current_submission
        + 1  // is_active
        + 1; // nonce

    /// Exact account space for the given text lists.
    pub fn space(details: &[String], submission_requirement: &[String]) -> usize {
        let text = |entries: &[String]| entries.iter().map(|e| 4 + e.len()).sum::<usize>();
        Self::FIXED_LEN + text(details) + text(submission_requirement)
    }

    pub fn require_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.owner, CampaignError::Unauthorized);
        Ok(())
    }

    /// Set the activation flag. Setting the current value is a no-op success.
    pub fn set_activation(&mut self, signer: &Pubkey, activate: bool) -> Result<()> {
        self.require_owner(signer)?;
        self.is_active = activate;
        Ok(())
    }

    /// Record one submission against the quota.
    ///
    /// Activation is not checked here.
    pub fn record_submission(&mut self, signer: &Pubkey) -> Result<u64> {
        self.require_owner(signer)?;
        require!(!self.is_quota_met(), CampaignError::QuotaExceeded);
        self.current_submission = self
            .current_submission
            .checked_add(1)
            .ok_or(error!(CampaignError::ArithmeticOverflow))?;
        Ok(self.current_submission)
    }

    pub fn is_quota_met(&self) -> bool {
        self.current_submission >= self.total_submission_required
    }

    pub fn remaining_submissions(&self) -> u64 {
        self.total_submission_required
            .saturating_sub(self.current_submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(owner: Pubkey, quota: u64) -> Campaign {
        Campaign {
            owner,
            pool: Pubkey::new_unique(),
            reward_token_mint: Pubkey::new_unique(),
            reward_token_vault: Pubkey::new_unique(),
            reward_amount: 10_000_000_000,
            details: vec!["tg".to_string()],
            submission_requirement: vec!["link".to_string()],
            total_submission_required: quota,
            current_submission: 0,
            is_active: false,
            nonce: 255,
        }
    }

    #[test]
    fn test_space_matches_serialized_len() {
        let campaign = sample(Pubkey::new_unique(), 10);
        let mut data: Vec<u8> = Vec::new();
        campaign.try_serialize(&mut data).unwrap();
        assert_eq!(
            data.len(),
            Campaign::space(&campaign.details, &campaign.submission_requirement)
        );
    }

    #[test]
    fn test_activation_toggle_idempotent() {
        let owner = Pubkey::new_unique();
        let mut campaign = sample(owner, 10);

        campaign.set_activation(&owner, false).unwrap();
        assert!(!campaign.is_active);
        campaign.set_activation(&owner, true).unwrap();
        campaign.set_activation(&owner, true).unwrap();
        assert!(campaign.is_active);
    }

    #[test]
    fn test_activation_rejects_non_owner() {
        let mut campaign = sample(Pubkey::new_unique(), 10);
        let err = campaign
            .set_activation(&Pubkey::new_unique(), true)
            .unwrap_err();
        assert_eq!(err, CampaignError::Unauthorized.into());
        assert!(!campaign.is_active);
    }

    #[test]
    fn test_submission_up_to_quota() {
        let owner = Pubkey::new_unique();
        let mut campaign = sample(owner, 2);

        assert_eq!(campaign.record_submission(&owner).unwrap(), 1);
        assert_eq!(campaign.remaining_submissions(), 1);
        assert_eq!(campaign.record_submission(&owner).unwrap(), 2);
        assert!(campaign.is_quota_met());

        let err = campaign.record_submission(&owner).unwrap_err();
        assert_eq!(err, CampaignError::QuotaExceeded.into());
        assert_eq!(campaign.current_submission, 2);
    }

    #[test]
    fn test_zero_quota_rejects_first_submission() {
        let owner = Pubkey::new_unique();
        let mut campaign = sample(owner, 0);
        assert!(campaign.record_submission(&owner).is_err());
        assert_eq!(campaign.current_submission, 0);
    }

    #[test]
    fn test_submission_allowed_while_inactive() {
        let owner = Pubkey::new_unique();
        let mut campaign = sample(owner, 1);
        assert!(!campaign.is_active);
        assert!(campaign.record_submission(&owner).is_ok());
    }

    #[test]
    fn test_submission_rejects_non_owner() {
        let mut campaign = sample(Pubkey::new_unique(), 5);
        let err = campaign
            .record_submission(&Pubkey::new_unique())
            .unwrap_err();
        assert_eq!(err, CampaignError::Unauthorized.into());
        assert_eq!(campaign.current_submission, 0);
    }
}
