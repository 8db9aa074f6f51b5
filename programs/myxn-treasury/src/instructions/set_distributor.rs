use anchor_lang::prelude::*;

use crate::constants::{
    BURN_VAULT_SEED, FEE_LEDGER_SEED, FEE_VAULT_SEED, TREASURY_CONFIG_SEED, VESTING_VAULT_SEED,
};
use crate::error::TreasuryError;
use crate::state::TreasuryConfig;

pub fn set_distributor(ctx: Context<SetDistributor>, new_distributor: Pubkey) -> Result<()> {
    require!(new_distributor != Pubkey::default(), TreasuryError::InvalidPubkey);

    let config_key = ctx.accounts.treasury_config.key();
    let cfg = &mut ctx.accounts.treasury_config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, TreasuryError::UnauthorizedAdmin);

    require!(new_distributor != cfg.admin, TreasuryError::InvalidConfig);
    require!(new_distributor != config_key, TreasuryError::InvalidConfig);
    require!(new_distributor != crate::ID, TreasuryError::InvalidConfig);

    // Program PDAs cannot sign.
    for seed in [FEE_LEDGER_SEED, VESTING_VAULT_SEED, FEE_VAULT_SEED, BURN_VAULT_SEED] {
        let (pda, _) = Pubkey::find_program_address(&[seed, config_key.as_ref()], &crate::ID);
        require!(new_distributor != pda, TreasuryError::InvalidConfig);
    }

    let old = cfg.distributor;
    cfg.distributor = new_distributor;

    emit!(DistributorSet {
        admin: cfg.admin,
        old_distributor: old,
        new_distributor,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetDistributor<'info> {
    #[account(mut, seeds = [TREASURY_CONFIG_SEED], bump = treasury_config.bump)]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct DistributorSet {
    pub admin: Pubkey,
    pub old_distributor: Pubkey,
    pub new_distributor: Pubkey,
}
