use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::accounting::fee_split::FeeSplitAccountant;
use crate::constants::{FEE_LEDGER_SEED, FEE_VAULT_SEED, TREASURY_CONFIG_SEED};
use crate::error::TreasuryError;
use crate::state::{FeeLedger, TreasuryConfig};

/// Books collected fees into the pending ledger. Allowed while paused.
///
/// The fee vault must already hold every pending token, so distributions can
/// never be short.
pub fn record_fee_collection(
    ctx: Context<RecordFeeCollection>,
    amount: u64,
    tx_count: u64,
) -> Result<()> {
    let cfg = &ctx.accounts.treasury_config;
    require_keys_eq!(
        ctx.accounts.distributor.key(),
        cfg.distributor,
        TreasuryError::UnauthorizedDistributor
    );

    let now = Clock::get()?.unix_timestamp;
    let ledger = &mut ctx.accounts.fee_ledger;

    let mut accountant = FeeSplitAccountant::resume(cfg.bucket_config()?, ledger.pending.clone())
        .map_err(|e| {
            if e.is_configuration() {
                msg!("Stored fee bucket config rejected: {}", e);
            }
            e
        })?;
    accountant.record_collection(amount, tx_count, now)?;
    let pending = accountant.into_pending();

    require!(
        ctx.accounts.fee_vault.amount >= pending.total_collected,
        TreasuryError::InsufficientVaultBalance
    );

    ledger.lifetime_collected = ledger
        .lifetime_collected
        .checked_add(amount)
        .ok_or(TreasuryError::MathOverflow)?;

    msg!(
        "Recorded {} in fees ({} tx), pending total {}",
        amount,
        tx_count,
        pending.total_collected
    );

    emit!(FeeCollectionRecorded {
        amount,
        tx_count,
        pending_total: pending.total_collected,
        pending_tx_count: pending.transaction_count,
    });

    ledger.pending = pending;
    Ok(())
}

#[derive(Accounts)]
pub struct RecordFeeCollection<'info> {
    #[account(seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [FEE_LEDGER_SEED, treasury_config.key().as_ref()],
        bump = fee_ledger.bump
    )]
    pub fee_ledger: Box<Account<'info, FeeLedger>>,

    #[account(
        seeds = [FEE_VAULT_SEED, treasury_config.key().as_ref()],
        bump,
        constraint = fee_vault.mint == treasury_config.mint @ TreasuryError::InvalidTokenMint,
    )]
    pub fee_vault: Account<'info, TokenAccount>,

    pub distributor: Signer<'info>,
}

#[event]
pub struct FeeCollectionRecorded {
    pub amount: u64,
    pub tx_count: u64,
    pub pending_total: u64,
    pub pending_tx_count: u64,
}
