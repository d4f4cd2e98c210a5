//! Error types for the xHashtag campaign program
//!
//! Error codes are stable across versions for client compatibility.

use anchor_lang::prelude::*;

#[error_code]
pub enum CampaignError {
    // ========== Initialization Errors ==========

    /// Pool record already written at this address
    #[msg("Pool is already initialized")]
    AlreadyInitialized, // 6000

    /// Pool account exists but cannot hold a Pool record
    #[msg("Pool account is not allocated with enough space")]
    AccountNotAllocated, // 6001

    // ========== Derivation Errors ==========

    /// Supplied nonce does not reproduce the program-derived address
    #[msg("Bad seed: nonce does not reproduce the derived address")]
    BadSeed, // 6002

    /// No nonce yields a valid program-derived address for these seeds
    #[msg("Address derivation exhausted all nonces")]
    DerivationExhausted, // 6003

    /// Caller-supplied account differs from the independently derived one
    #[msg("Account does not match the expected address")]
    AccountMismatch, // 6004

    // ========== Campaign Errors ==========

    /// A campaign for this (owner, pool) pair already exists
    #[msg("Campaign already exists for this owner and pool")]
    DuplicateCampaign, // 6005

    /// Creation parameters missing or out of range
    #[msg("Invalid campaign arguments")]
    InvalidArguments, // 6006

    /// Submission quota already reached
    #[msg("Submission quota exceeded")]
    QuotaExceeded, // 6007

    // ========== Token Errors ==========

    /// Depositor cannot cover the requested reward amount
    #[msg("Insufficient reward token balance")]
    InsufficientBalance, // 6008

    /// Token account mint differs from the reward mint
    #[msg("Token mint does not match the reward mint")]
    InvalidMint, // 6009

    /// Escrow vault must start empty
    #[msg("Reward vault already holds tokens")]
    VaultNotEmpty, // 6010

    // ========== Authorization Errors ==========

    /// Signer is not the stored campaign owner
    #[msg("Unauthorized: signer is not the campaign owner")]
    Unauthorized, // 6011

    // ========== Computation Errors ==========

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow, // 6012
}
