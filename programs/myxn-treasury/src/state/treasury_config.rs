use anchor_lang::prelude::*;

use crate::accounting::burn::BurnStats;
use crate::accounting::fee_split::{FeeBucket, FeeBucketConfig};
use crate::error::TreasuryError;

/// A fee bucket plus the token account its share is sent to.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct BucketRoute {
    #[max_len(16)]
    pub name: String,
    pub percentage_bps: u16,
    /// SPL token account receiving this bucket's share.
    pub destination: Pubkey,
}

/// Validates routes and returns the bucket config they describe.
pub fn bucket_config_from_routes(
    routes: &[BucketRoute],
) -> core::result::Result<FeeBucketConfig, TreasuryError> {
    if routes.iter().any(|r| r.destination == Pubkey::default()) {
        return Err(TreasuryError::InvalidPubkey);
    }
    FeeBucketConfig::new(
        routes
            .iter()
            .map(|r| FeeBucket {
                name: r.name.clone(),
                percentage_bps: r.percentage_bps,
            })
            .collect(),
    )
}

/// Treasury config PDA (single instance).
#[account]
#[derive(InitSpace)]
pub struct TreasuryConfig {
    /// Admin authority (multisig recommended off-chain).
    pub admin: Pubkey,
    /// Distributor authority (backend signer for fee jobs).
    pub distributor: Pubkey,
    /// Token mint.
    pub mint: Pubkey,
    pub vesting_vault: Pubkey,
    pub fee_vault: Pubkey,
    pub burn_vault: Pubkey,
    /// Emergency pause flag (blocks transfers only; accounting continues).
    pub paused: bool,
    /// Fee buckets in split order; the last one absorbs rounding remainders.
    #[max_len(8)]
    pub routes: Vec<BucketRoute>,
    pub burn_stats: BurnStats,
    pub bump: u8,
}

impl TreasuryConfig {
    pub fn bucket_config(&self) -> core::result::Result<FeeBucketConfig, TreasuryError> {
        bucket_config_from_routes(&self.routes)
    }
}
