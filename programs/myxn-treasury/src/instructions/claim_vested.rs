use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::accounting::vesting;
use crate::constants::{
    PARTICIPANT_SEED, SCHEDULE_STATE_SEED, TREASURY_CONFIG_SEED, VESTING_VAULT_SEED,
};
use crate::error::TreasuryError;
use crate::state::{Participant, ScheduleState, TreasuryConfig};

/// Pays out vested tokens. `None` claims everything currently claimable.
pub fn claim_vested(ctx: Context<ClaimVested>, amount: Option<u64>) -> Result<()> {
    // Capture before taking mutable borrows.
    let treasury_config_ai = ctx.accounts.treasury_config.to_account_info();
    let cfg = &ctx.accounts.treasury_config;
    require!(!cfg.paused, TreasuryError::TreasuryPaused);

    let wallet = ctx.accounts.beneficiary.key();
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        wallet,
        TreasuryError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let schedule = &ctx.accounts.schedule_state.schedule;
    let participant = &ctx.accounts.participant;
    let evaluation = vesting::evaluate(&participant.allocation, schedule, now)?;

    let amount = match amount {
        Some(requested) => {
            require!(requested > 0, TreasuryError::InvalidAmount);
            require!(
                requested <= evaluation.claimable_now,
                TreasuryError::ExceedsClaimable
            );
            requested
        }
        None => {
            require!(evaluation.claimable_now > 0, TreasuryError::NothingToClaim);
            evaluation.claimable_now
        }
    };
    require!(
        ctx.accounts.vesting_vault.amount >= amount,
        TreasuryError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_CONFIG_SEED, &[cfg.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vesting_vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: treasury_config_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    // Transfer succeeded; only now advance the claimed total.
    let updated = vesting::record_claim(&participant.allocation, schedule, now, amount)?;

    let participant = &mut ctx.accounts.participant;
    participant.allocation = updated;
    participant.last_claim_at = Some(now);

    let st = &mut ctx.accounts.schedule_state;
    st.total_claimed = st
        .total_claimed
        .checked_add(amount)
        .ok_or(TreasuryError::MathOverflow)?;

    msg!(
        "Claimed {} tokens ({} of {} claimed)",
        amount,
        updated.claimed_so_far,
        updated.total_allocation
    );

    emit!(TokensClaimed {
        wallet,
        amount,
        claimed_total: updated.claimed_so_far,
        total_allocation: updated.total_allocation,
        next_unlock_at: evaluation.next_unlock_at,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimVested<'info> {
    #[account(seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [SCHEDULE_STATE_SEED, treasury_config.key().as_ref()],
        bump = schedule_state.bump
    )]
    pub schedule_state: Box<Account<'info, ScheduleState>>,

    #[account(
        mut,
        seeds = [PARTICIPANT_SEED, treasury_config.key().as_ref(), beneficiary.key().as_ref()],
        bump = participant.bump,
        constraint = participant.wallet == beneficiary.key() @ TreasuryError::InvalidPubkey,
    )]
    pub participant: Account<'info, Participant>,

    #[account(
        mut,
        seeds = [VESTING_VAULT_SEED, treasury_config.key().as_ref()],
        bump,
        constraint = vesting_vault.mint == treasury_config.mint @ TreasuryError::InvalidTokenMint,
    )]
    pub vesting_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == treasury_config.mint @ TreasuryError::InvalidTokenMint,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub wallet: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub total_allocation: u64,
    pub next_unlock_at: Option<i64>,
}
