use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{TREASURY_CONFIG_SEED, VESTING_VAULT_SEED};
use crate::error::TreasuryError;
use crate::state::TreasuryConfig;

/// Funds the vesting vault that claims are paid from.
pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, TreasuryError::InvalidAmount);

    let cfg = &ctx.accounts.treasury_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, TreasuryError::UnauthorizedAdmin);

    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        cfg.mint,
        TreasuryError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        TreasuryError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.admin_token_account.amount >= amount,
        TreasuryError::InsufficientVaultBalance
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vesting_vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vesting_vault.reload()?;

    emit!(TokensDeposited {
        admin: cfg.admin,
        amount,
        vault_balance: ctx.accounts.vesting_vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        mut,
        seeds = [VESTING_VAULT_SEED, treasury_config.key().as_ref()],
        bump,
        constraint = vesting_vault.mint == treasury_config.mint @ TreasuryError::InvalidTokenMint,
    )]
    pub vesting_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
