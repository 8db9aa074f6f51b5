use anchor_lang::prelude::*;

use crate::accounting::vesting::ParticipantAllocation;
use crate::constants::{PARTICIPANT_SEED, SCHEDULE_STATE_SEED, TREASURY_CONFIG_SEED};
use crate::error::TreasuryError;
use crate::state::{Participant, ScheduleState, TreasuryConfig};

pub fn register_participant(
    ctx: Context<RegisterParticipant>,
    wallet: Pubkey,
    total_allocation: u64,
    vesting_start: i64,
) -> Result<()> {
    let cfg = &ctx.accounts.treasury_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, TreasuryError::UnauthorizedAdmin);
    require!(wallet != Pubkey::default(), TreasuryError::InvalidPubkey);
    require!(vesting_start > 0, TreasuryError::InvalidTimestamp);

    let allocation = ParticipantAllocation::new(total_allocation, vesting_start)?;

    let st = &mut ctx.accounts.schedule_state;
    st.total_allocated = st
        .total_allocated
        .checked_add(total_allocation)
        .ok_or(TreasuryError::MathOverflow)?;
    st.participant_count = st
        .participant_count
        .checked_add(1)
        .ok_or(TreasuryError::MathOverflow)?;

    let participant = &mut ctx.accounts.participant;
    participant.wallet = wallet;
    participant.allocation = allocation;
    participant.last_claim_at = None;
    participant.bump = ctx.bumps.participant;

    emit!(ParticipantRegistered {
        wallet,
        total_allocation,
        vesting_start,
        participant_count: st.participant_count,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct RegisterParticipant<'info> {
    #[account(seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [SCHEDULE_STATE_SEED, treasury_config.key().as_ref()],
        bump = schedule_state.bump
    )]
    pub schedule_state: Box<Account<'info, ScheduleState>>,

    #[account(
        init,
        payer = admin,
        space = 8 + Participant::INIT_SPACE,
        seeds = [PARTICIPANT_SEED, treasury_config.key().as_ref(), wallet.as_ref()],
        bump
    )]
    pub participant: Account<'info, Participant>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ParticipantRegistered {
    pub wallet: Pubkey,
    pub total_allocation: u64,
    pub vesting_start: i64,
    pub participant_count: u64,
}
