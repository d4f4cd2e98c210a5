//! Token escrow adapter
//!
//! Thin layer over the SPL token program. Checks run against a plain view of
//! the token accounts so they can be exercised without a runtime; the only
//! side effect is the single funding transfer.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::CampaignError;

/// The fields of an SPL token account the program reasons about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAccountView {
    pub address: Pubkey,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

impl TokenAccountView {
    pub fn of(account: &Account<'_, TokenAccount>) -> Self {
        Self {
            address: account.key(),
            mint: account.mint,
            owner: account.owner,
            amount: account.amount,
        }
    }
}

/// Validate a funding request before any tokens move.
///
/// The vault must be a distinct, empty token account of `mint` whose
/// authority is the pool signer; the depositor must belong to `owner` and
/// cover `amount`.
pub fn check_funding(
    depositor: &TokenAccountView,
    vault: &TokenAccountView,
    mint: &Pubkey,
    owner: &Pubkey,
    pool_signer: &Pubkey,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(depositor.mint, *mint, CampaignError::InvalidMint);
    require_keys_eq!(vault.mint, *mint, CampaignError::InvalidMint);
    require_keys_eq!(depositor.owner, *owner, CampaignError::AccountMismatch);
    require_keys_eq!(vault.owner, *pool_signer, CampaignError::AccountMismatch);
    require_keys_neq!(depositor.address, vault.address, CampaignError::AccountMismatch);
    require!(vault.amount == 0, CampaignError::VaultNotEmpty);
    require!(depositor.amount >= amount, CampaignError::InsufficientBalance);
    Ok(())
}

/// Move `amount` from the depositor into the vault, authorized by the owner's signature.
pub fn fund_vault<'info>(
    token_program: &Program<'info, Token>,
    depositor: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from: depositor.to_account_info(),
        to: vault.to_account_info(),
        authority: owner.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        mint: Pubkey,
        owner: Pubkey,
        pool_signer: Pubkey,
        depositor: TokenAccountView,
        vault: TokenAccountView,
    }

    fn fixture() -> Fixture {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let pool_signer = Pubkey::new_unique();
        Fixture {
            mint,
            owner,
            pool_signer,
            depositor: TokenAccountView {
                address: Pubkey::new_unique(),
                mint,
                owner,
                amount: 1_000,
            },
            vault: TokenAccountView {
                address: Pubkey::new_unique(),
                mint,
                owner: pool_signer,
                amount: 0,
            },
        }
    }

    fn check(f: &Fixture, amount: u64) -> Result<()> {
        check_funding(&f.depositor, &f.vault, &f.mint, &f.owner, &f.pool_signer, amount)
    }

    #[test]
    fn test_exact_balance_accepted() {
        let f = fixture();
        assert!(check(&f, 1_000).is_ok());
    }

    #[test]
    fn test_insufficient_balance() {
        let f = fixture();
        assert_eq!(check(&f, 1_001).unwrap_err(), CampaignError::InsufficientBalance.into());
    }

    #[test]
    fn test_vault_wrong_authority() {
        let mut f = fixture();
        f.vault.owner = f.owner;
        assert_eq!(check(&f, 10).unwrap_err(), CampaignError::AccountMismatch.into());
    }

    #[test]
    fn test_vault_must_be_empty() {
        let mut f = fixture();
        f.vault.amount = 1;
        assert_eq!(check(&f, 10).unwrap_err(), CampaignError::VaultNotEmpty.into());
    }

    #[test]
    fn test_mint_mismatch() {
        let mut f = fixture();
        f.depositor.mint = Pubkey::new_unique();
        assert_eq!(check(&f, 10).unwrap_err(), CampaignError::InvalidMint.into());
    }

    #[test]
    fn test_vault_cannot_be_depositor() {
        let mut f = fixture();
        f.vault = f.depositor;
        f.vault.owner = f.pool_signer;
        f.vault.amount = 0;
        assert_eq!(check(&f, 10).unwrap_err(), CampaignError::AccountMismatch.into());
    }
}
