use anchor_lang::prelude::*;

use crate::accounting::vesting::{UnlockStep, VestingSchedule};
use crate::constants::{SCHEDULE_STATE_SEED, TREASURY_CONFIG_SEED};
use crate::error::TreasuryError;
use crate::state::{ScheduleState, TreasuryConfig};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub enum ScheduleInput {
    /// Explicit unlock steps, sorted by offset.
    Steps(Vec<UnlockStep>),
    /// `daily_bps` per elapsed day after a cliff, fully unlocked at `total_days`.
    LinearDaily {
        cliff_days: u32,
        daily_bps: u16,
        total_days: u32,
    },
}

pub fn initialize_schedule(ctx: Context<InitializeSchedule>, input: ScheduleInput) -> Result<()> {
    let cfg = &ctx.accounts.treasury_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, TreasuryError::UnauthorizedAdmin);

    let schedule = match input {
        ScheduleInput::Steps(steps) => VestingSchedule::new(steps)?,
        ScheduleInput::LinearDaily {
            cliff_days,
            daily_bps,
            total_days,
        } => VestingSchedule::linear_daily(cliff_days, daily_bps, total_days)?,
    };

    let st = &mut ctx.accounts.schedule_state;
    st.treasury_config = cfg.key();
    st.participant_count = 0;
    st.total_allocated = 0;
    st.total_claimed = 0;
    st.bump = ctx.bumps.schedule_state;

    emit!(ScheduleInitialized {
        step_count: schedule.steps().len() as u8,
        total_bps: schedule.total_bps() as u16,
        final_offset_days: schedule.steps().last().map(|s| s.offset_days).unwrap_or(0),
    });

    st.schedule = schedule;
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSchedule<'info> {
    #[account(seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        init,
        payer = admin,
        space = 8 + ScheduleState::INIT_SPACE,
        seeds = [SCHEDULE_STATE_SEED, treasury_config.key().as_ref()],
        bump
    )]
    pub schedule_state: Box<Account<'info, ScheduleState>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ScheduleInitialized {
    pub step_count: u8,
    pub total_bps: u16,
    pub final_offset_days: u32,
}
