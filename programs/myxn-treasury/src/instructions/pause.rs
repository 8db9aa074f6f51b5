use anchor_lang::prelude::*;

use crate::constants::TREASURY_CONFIG_SEED;
use crate::error::TreasuryError;
use crate::state::TreasuryConfig;

/// Halts claims, distributions and burns. Fee collections are still recorded.
pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let cfg = &mut ctx.accounts.treasury_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, TreasuryError::UnauthorizedAdmin);
    require!(!cfg.paused, TreasuryError::TreasuryPaused);
    cfg.paused = true;
    msg!("Treasury paused");
    emit!(TreasuryPausedEvent { admin: cfg.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,
    pub admin: Signer<'info>,
}

#[event]
pub struct TreasuryPausedEvent {
    pub admin: Pubkey,
}
