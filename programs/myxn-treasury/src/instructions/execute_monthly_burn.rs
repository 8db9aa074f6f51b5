use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::accounting::burn;
use crate::constants::{BURN_VAULT_SEED, TREASURY_CONFIG_SEED};
use crate::error::TreasuryError;
use crate::state::TreasuryConfig;
use crate::utils::time;

/// Burns the whole burn vault once per calendar month, on its last UTC day.
pub fn execute_monthly_burn(ctx: Context<ExecuteMonthlyBurn>) -> Result<()> {
    let treasury_config_ai = ctx.accounts.treasury_config.to_account_info();
    let cfg = &ctx.accounts.treasury_config;
    require!(!cfg.paused, TreasuryError::TreasuryPaused);

    burn::authorize_caller(&ctx.accounts.caller.key(), &cfg.admin, &cfg.distributor)?;

    let now = Clock::get()?.unix_timestamp;
    let enforce_window = !cfg!(feature = "testing");
    if enforce_window && !time::is_last_day_of_month(now)? {
        msg!(
            "Burn window closed: opens in {} day(s) at {}",
            time::days_until_month_end(now)?,
            time::burn_window_start(now)?
        );
    }
    let period = burn::burn_due(&cfg.burn_stats, now, enforce_window)?;

    let amount = ctx.accounts.burn_vault.amount;
    if amount == 0 {
        // Nothing to burn; the month stays open for a later attempt.
        msg!("Burn vault empty for period {}", period);
        emit!(MonthlyBurnExecuted {
            period,
            amount: 0,
            total_burns: cfg.burn_stats.total_burns,
            total_burned: cfg.burn_stats.total_burned,
        });
        return Ok(());
    }

    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_CONFIG_SEED, &[cfg.bump]]];
    token::burn(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.burn_vault.to_account_info(),
                authority: treasury_config_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    let stats = cfg.burn_stats.record(amount, period, now)?;
    ctx.accounts.treasury_config.burn_stats = stats;

    msg!(
        "Burned {} tokens for period {} ({} burns, {} total)",
        amount,
        period,
        stats.total_burns,
        stats.total_burned
    );

    emit!(MonthlyBurnExecuted {
        period,
        amount,
        total_burns: stats.total_burns,
        total_burned: stats.total_burned,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ExecuteMonthlyBurn<'info> {
    #[account(mut, seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [BURN_VAULT_SEED, treasury_config.key().as_ref()],
        bump,
        constraint = burn_vault.mint == treasury_config.mint @ TreasuryError::InvalidTokenMint,
    )]
    pub burn_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = mint.key() == treasury_config.mint @ TreasuryError::InvalidTokenMint,
    )]
    pub mint: Account<'info, Mint>,

    /// Admin or distributor.
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct MonthlyBurnExecuted {
    /// `year * 12 + (month - 1)` of the burn.
    pub period: u32,
    pub amount: u64,
    pub total_burns: u64,
    pub total_burned: u64,
}
