//! Pool state account
//!
//! A pool groups campaigns under one escrow authority. Its address is an
//! externally generated keypair; the pool signer is derived from it.

use anchor_lang::prelude::*;

use crate::error::CampaignError;

/// Top-level pool record.
///
/// Address: caller-supplied keypair (not derived).
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Pool {
    /// Wallet that initialized the pool
    pub authority: Pubkey,

    /// Nonce of the pool signer PDA (`[pool]`)
    pub signer_nonce: u8,

    /// Number of campaigns created under this pool
    pub campaign_count: u64,
}

impl Pool {
    /// Account space calculation
    pub const LEN: usize = 8 // discriminator
        + 32 // authority
        + 1  // signer_nonce
        + 8; // campaign_count

    /// Fresh pool record with no campaigns
    pub fn new(authority: Pubkey, signer_nonce: u8) -> Self {
        Self {
            authority,
            signer_nonce,
            campaign_count: 0,
        }
    }

    /// Increment campaign counter (checked arithmetic)
    pub fn increment_campaign_count(&mut self) -> Result<u64> {
        self.campaign_count = self
            .campaign_count
            .checked_add(1)
            .ok_or(error!(CampaignError::ArithmeticOverflow))?;
        Ok(self.campaign_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_pool() -> Pool {
        Pool::new(Pubkey::new_unique(), 254)
    }

    #[test]
    fn test_pool_size() {
        let pool = fresh_pool();
        let mut data: Vec<u8> = Vec::new();
        pool.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), Pool::LEN);
    }

    #[test]
    fn test_new_pool_has_no_campaigns() {
        let pool = fresh_pool();
        assert_eq!(pool.campaign_count, 0);
        assert_eq!(pool.signer_nonce, 254);
    }

    #[test]
    fn test_increment_campaign_count() {
        let mut pool = fresh_pool();
        assert_eq!(pool.increment_campaign_count().unwrap(), 1);
        assert_eq!(pool.increment_campaign_count().unwrap(), 2);
    }

    #[test]
    fn test_increment_overflow() {
        let mut pool = fresh_pool();
        pool.campaign_count = u64::MAX;
        assert!(pool.increment_campaign_count().is_err());
        assert_eq!(pool.campaign_count, u64::MAX);
    }
}
