//! Program-derived address helpers
//!
//! Seed layout (must stay stable, deployed state depends on it):
//! - Pool signer: `[pool]`
//! - Campaign:    `[owner, pool]`
//!
//! Neither derivation carries a string prefix.

use anchor_lang::prelude::*;

use crate::error::CampaignError;

pub fn pool_signer_seeds(pool: &Pubkey) -> [&[u8]; 1] {
    [pool.as_ref()]
}

pub fn campaign_seeds<'a>(owner: &'a Pubkey, pool: &'a Pubkey) -> [&'a [u8]; 2] {
    [owner.as_ref(), pool.as_ref()]
}

/// Derive the escrow authority for a pool under this program.
pub fn find_pool_signer(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&pool_signer_seeds(pool), &crate::ID)
}

/// Derive the campaign record address for an (owner, pool) pair under this program.
pub fn find_campaign_address(owner: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&campaign_seeds(owner, pool), &crate::ID)
}

/// Canonical derivation that surfaces nonce exhaustion as an error instead of panicking.
pub fn try_derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| error!(CampaignError::DerivationExhausted))
}

/// Rebuild an address from seeds plus an explicit nonce.
///
/// Fails with `BadSeed` when the nonce lands on the curve.
pub fn create_with_nonce(seeds: &[&[u8]], nonce: u8, program_id: &Pubkey) -> Result<Pubkey> {
    let nonce = [nonce];
    let mut full: Vec<&[u8]> = seeds.to_vec();
    full.push(&nonce);
    Pubkey::create_program_address(&full, program_id).map_err(|_| error!(CampaignError::BadSeed))
}

/// Check a caller-supplied nonce against the canonical derivation.
///
/// Returns the derived address. A nonce that is valid but not canonical
/// names a different address and is rejected as `BadSeed`.
pub fn verify_nonce(seeds: &[&[u8]], nonce: u8, program_id: &Pubkey) -> Result<Pubkey> {
    let (expected, canonical) = try_derive(seeds, program_id)?;
    require!(nonce == canonical, CampaignError::BadSeed);
    Ok(expected)
}

/// Validate the pool signer role: `nonce` must reproduce the derivation and
/// `supplied` must be that address.
pub fn verify_pool_signer(
    pool: &Pubkey,
    nonce: u8,
    supplied: &Pubkey,
    program_id: &Pubkey,
) -> Result<()> {
    let expected = verify_nonce(&pool_signer_seeds(pool), nonce, program_id)?;
    require_keys_eq!(*supplied, expected, CampaignError::AccountMismatch);
    Ok(())
}

/// Validate the campaign role for a creation request.
pub fn verify_campaign_address(
    owner: &Pubkey,
    pool: &Pubkey,
    nonce: u8,
    supplied: &Pubkey,
    program_id: &Pubkey,
) -> Result<()> {
    let expected = verify_nonce(&campaign_seeds(owner, pool), nonce, program_id)?;
    require_keys_eq!(*supplied, expected, CampaignError::AccountMismatch);
    Ok(())
}

/// Validate an existing campaign account against its stored owner and nonce.
pub fn verify_stored_campaign(
    owner: &Pubkey,
    pool: &Pubkey,
    nonce: u8,
    supplied: &Pubkey,
    program_id: &Pubkey,
) -> Result<()> {
    let expected = create_with_nonce(&campaign_seeds(owner, pool), nonce, program_id)
        .map_err(|_| error!(CampaignError::AccountMismatch))?;
    require_keys_eq!(*supplied, expected, CampaignError::AccountMismatch);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_signer_deterministic() {
        let pool = Pubkey::new_unique();
        assert_eq!(find_pool_signer(&pool), find_pool_signer(&pool));
    }

    #[test]
    fn test_campaign_seed_order_matters() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let (ab, _) = find_campaign_address(&a, &b);
        let (ba, _) = find_campaign_address(&b, &a);
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_derived_address_is_off_curve() {
        let (signer, _) = find_pool_signer(&Pubkey::new_unique());
        assert!(!signer.is_on_curve());
    }

    #[test]
    fn test_create_with_canonical_nonce_matches_find() {
        let owner = Pubkey::new_unique();
        let pool = Pubkey::new_unique();
        let (expected, nonce) = find_campaign_address(&owner, &pool);
        let rebuilt = create_with_nonce(&campaign_seeds(&owner, &pool), nonce, &crate::ID).unwrap();
        assert_eq!(expected, rebuilt);
    }

    #[test]
    fn test_verify_pool_signer_wrong_nonce() {
        let pool = Pubkey::new_unique();
        let (signer, nonce) = find_pool_signer(&pool);
        let err = verify_pool_signer(&pool, nonce.wrapping_sub(1), &signer, &crate::ID).unwrap_err();
        assert_eq!(err, CampaignError::BadSeed.into());
    }

    #[test]
    fn test_verify_pool_signer_substituted_account() {
        let pool = Pubkey::new_unique();
        let (_, nonce) = find_pool_signer(&pool);
        let other = Pubkey::new_unique();
        let err = verify_pool_signer(&pool, nonce, &other, &crate::ID).unwrap_err();
        assert_eq!(err, CampaignError::AccountMismatch.into());
    }

    #[test]
    fn test_verify_campaign_address_ok() {
        let owner = Pubkey::new_unique();
        let pool = Pubkey::new_unique();
        let (campaign, nonce) = find_campaign_address(&owner, &pool);
        assert!(verify_campaign_address(&owner, &pool, nonce, &campaign, &crate::ID).is_ok());
        assert!(verify_stored_campaign(&owner, &pool, nonce, &campaign, &crate::ID).is_ok());
    }

    #[test]
    fn test_stored_campaign_rejects_other_owner() {
        let owner = Pubkey::new_unique();
        let pool = Pubkey::new_unique();
        let (campaign, nonce) = find_campaign_address(&owner, &pool);
        let intruder = Pubkey::new_unique();
        assert!(verify_stored_campaign(&intruder, &pool, nonce, &campaign, &crate::ID).is_err());
    }
}
