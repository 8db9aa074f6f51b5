use anchor_lang::prelude::*;

use crate::accounting::fee_split::PendingCollection;

/// Persisted fee accounting between distribution runs.
#[account]
#[derive(InitSpace)]
pub struct FeeLedger {
    pub treasury_config: Pubkey,
    pub pending: PendingCollection,
    pub cycles_completed: u64,
    pub lifetime_collected: u64,
    pub lifetime_distributed: u64,
    pub bump: u8,
}
