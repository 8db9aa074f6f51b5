use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::accounting::fee_split::BucketShare;
use crate::constants::{FEE_LEDGER_SEED, FEE_VAULT_SEED, TREASURY_CONFIG_SEED};
use crate::error::TreasuryError;
use crate::state::{FeeLedger, TreasuryConfig};

// NOTE: `distribute_fees` handler logic lives in `src/lib.rs` to avoid Anchor
// `Context` lifetime invariance issues with `remaining_accounts`.
//
// Remaining accounts: one writable SPL token account per fee bucket, in
// bucket order, each matching the route's `destination`.

#[derive(Accounts)]
pub struct DistributeFees<'info> {
    #[account(seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [FEE_LEDGER_SEED, treasury_config.key().as_ref()],
        bump = fee_ledger.bump
    )]
    pub fee_ledger: Box<Account<'info, FeeLedger>>,

    #[account(
        mut,
        seeds = [FEE_VAULT_SEED, treasury_config.key().as_ref()],
        bump,
        constraint = fee_vault.mint == treasury_config.mint @ TreasuryError::InvalidTokenMint,
    )]
    pub fee_vault: Account<'info, TokenAccount>,

    pub distributor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct FeesDistributed {
    pub cycle: u64,
    pub total: u64,
    pub transaction_count: u64,
    pub shares: Vec<BucketShare>,
    /// blake3 reconciliation digest, see `utils::digest`.
    pub digest: [u8; 32],
}
