use anchor_lang::prelude::*;

use crate::accounting::vesting::VestingSchedule;

/// Presale vesting schedule PDA, shared by every participant.
#[account]
#[derive(InitSpace)]
pub struct ScheduleState {
    pub treasury_config: Pubkey,
    pub schedule: VestingSchedule,
    pub participant_count: u64,
    /// Sum of all registered allocations.
    pub total_allocated: u64,
    /// Sum of all confirmed claims.
    pub total_claimed: u64,
    pub bump: u8,
}
