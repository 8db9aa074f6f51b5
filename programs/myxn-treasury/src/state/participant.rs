use anchor_lang::prelude::*;

use crate::accounting::vesting::ParticipantAllocation;

/// Approved presale participant. Never closed.
#[account]
#[derive(InitSpace)]
pub struct Participant {
    pub wallet: Pubkey,
    pub allocation: ParticipantAllocation,
    pub last_claim_at: Option<i64>,
    pub bump: u8,
}
