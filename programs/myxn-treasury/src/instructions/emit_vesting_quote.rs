use anchor_lang::prelude::*;

use crate::accounting::vesting;
use crate::constants::{PARTICIPANT_SEED, SCHEDULE_STATE_SEED, TREASURY_CONFIG_SEED};
use crate::state::{Participant, ScheduleState, TreasuryConfig};

/// Read-only: emits the participant's current vesting position.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, wallet: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let participant = &ctx.accounts.participant;
    let evaluation = vesting::evaluate(
        &participant.allocation,
        &ctx.accounts.schedule_state.schedule,
        now,
    )?;

    emit!(VestingQuote {
        wallet,
        unlocked_bps: evaluation.unlocked_bps,
        total_vested: evaluation.total_vested,
        claimed: participant.allocation.claimed_so_far,
        claimable: evaluation.claimable_now,
        next_unlock_at: evaluation.next_unlock_at,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        seeds = [SCHEDULE_STATE_SEED, treasury_config.key().as_ref()],
        bump = schedule_state.bump
    )]
    pub schedule_state: Box<Account<'info, ScheduleState>>,

    #[account(
        seeds = [PARTICIPANT_SEED, treasury_config.key().as_ref(), wallet.as_ref()],
        bump = participant.bump
    )]
    pub participant: Account<'info, Participant>,
}

#[event]
pub struct VestingQuote {
    pub wallet: Pubkey,
    pub unlocked_bps: u16,
    pub total_vested: u64,
    pub claimed: u64,
    pub claimable: u64,
    pub next_unlock_at: Option<i64>,
}
