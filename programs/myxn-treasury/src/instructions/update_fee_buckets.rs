use anchor_lang::prelude::*;

use crate::accounting::fee_split::PendingCollection;
use crate::constants::{FEE_LEDGER_SEED, TREASURY_CONFIG_SEED};
use crate::error::TreasuryError;
use crate::state::{bucket_config_from_routes, BucketRoute, FeeLedger, TreasuryConfig};

/// Replaces the fee buckets. Only allowed between cycles (nothing pending).
pub fn update_fee_buckets(ctx: Context<UpdateFeeBuckets>, routes: Vec<BucketRoute>) -> Result<()> {
    let cfg = &mut ctx.accounts.treasury_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, TreasuryError::UnauthorizedAdmin);

    let ledger = &mut ctx.accounts.fee_ledger;
    require!(ledger.pending.is_empty(), TreasuryError::PendingNotEmpty);

    let bucket_config = bucket_config_from_routes(&routes)?;
    ledger.pending = PendingCollection::empty(&bucket_config);
    cfg.routes = routes;

    msg!("Fee buckets updated: {} buckets", cfg.routes.len());

    emit!(FeeBucketsUpdated {
        admin: cfg.admin,
        routes: cfg.routes.clone(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateFeeBuckets<'info> {
    #[account(mut, seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [FEE_LEDGER_SEED, treasury_config.key().as_ref()],
        bump = fee_ledger.bump
    )]
    pub fee_ledger: Box<Account<'info, FeeLedger>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct FeeBucketsUpdated {
    pub admin: Pubkey,
    pub routes: Vec<BucketRoute>,
}
