use anchor_lang::prelude::*;

use crate::accounting::fee_split::{BucketShare, FeeSplitAccountant};
use crate::constants::{FEE_LEDGER_SEED, TREASURY_CONFIG_SEED};
use crate::state::{FeeLedger, TreasuryConfig};

/// Read-only: emits what the next `distribute_fees` would transfer.
pub fn preview_distribution(ctx: Context<PreviewDistribution>) -> Result<()> {
    let ledger = &ctx.accounts.fee_ledger;
    let accountant = FeeSplitAccountant::resume(
        ctx.accounts.treasury_config.bucket_config()?,
        ledger.pending.clone(),
    )?;
    let pending = accountant.pending();

    emit!(DistributionPreview {
        cycle: ledger.cycles_completed.saturating_add(1),
        total: pending.total_collected,
        transaction_count: pending.transaction_count,
        first_collected_at: pending.first_collected_at,
        shares: accountant.compute_distribution(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PreviewDistribution<'info> {
    #[account(seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        seeds = [FEE_LEDGER_SEED, treasury_config.key().as_ref()],
        bump = fee_ledger.bump
    )]
    pub fee_ledger: Box<Account<'info, FeeLedger>>,
}

#[event]
pub struct DistributionPreview {
    pub cycle: u64,
    pub total: u64,
    pub transaction_count: u64,
    pub first_collected_at: Option<i64>,
    pub shares: Vec<BucketShare>,
}
