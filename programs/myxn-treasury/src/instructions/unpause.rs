use anchor_lang::prelude::*;

use crate::constants::TREASURY_CONFIG_SEED;
use crate::error::TreasuryError;
use crate::state::TreasuryConfig;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let cfg = &mut ctx.accounts.treasury_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, TreasuryError::UnauthorizedAdmin);
    require!(cfg.paused, TreasuryError::TreasuryNotPaused);
    cfg.paused = false;
    msg!("Treasury unpaused");
    emit!(TreasuryUnpaused { admin: cfg.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,
    pub admin: Signer<'info>,
}

#[event]
pub struct TreasuryUnpaused {
    pub admin: Pubkey,
}
