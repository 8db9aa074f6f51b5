use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::accounting::burn::BurnStats;
use crate::accounting::fee_split::PendingCollection;
use crate::constants::{
    BURN_VAULT_SEED, FEE_LEDGER_SEED, FEE_VAULT_SEED, TREASURY_CONFIG_SEED, VESTING_VAULT_SEED,
};
use crate::error::TreasuryError;
use crate::state::{bucket_config_from_routes, BucketRoute, FeeLedger, TreasuryConfig};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeTreasuryParams {
    pub distributor: Pubkey,
    pub routes: Vec<BucketRoute>,
}

pub fn initialize_treasury(
    ctx: Context<InitializeTreasury>,
    params: InitializeTreasuryParams,
) -> Result<()> {
    let distributor = params.distributor;
    require!(distributor != Pubkey::default(), TreasuryError::InvalidPubkey);
    require!(
        distributor != ctx.accounts.admin.key(),
        TreasuryError::InvalidConfig
    );
    require!(
        distributor != ctx.accounts.treasury_config.key(),
        TreasuryError::InvalidConfig
    );
    require!(distributor != crate::ID, TreasuryError::InvalidConfig);

    let bucket_config = bucket_config_from_routes(&params.routes)?;

    let cfg = &mut ctx.accounts.treasury_config;
    cfg.admin = ctx.accounts.admin.key();
    cfg.distributor = distributor;
    cfg.mint = ctx.accounts.mint.key();
    cfg.vesting_vault = ctx.accounts.vesting_vault.key();
    cfg.fee_vault = ctx.accounts.fee_vault.key();
    cfg.burn_vault = ctx.accounts.burn_vault.key();
    cfg.paused = false;
    cfg.routes = params.routes;
    cfg.burn_stats = BurnStats::default();
    cfg.bump = ctx.bumps.treasury_config;

    let ledger = &mut ctx.accounts.fee_ledger;
    ledger.treasury_config = cfg.key();
    ledger.pending = PendingCollection::empty(&bucket_config);
    ledger.cycles_completed = 0;
    ledger.lifetime_collected = 0;
    ledger.lifetime_distributed = 0;
    ledger.bump = ctx.bumps.fee_ledger;

    msg!(
        "Treasury initialized: mint={}, {} fee buckets",
        cfg.mint,
        cfg.routes.len()
    );

    emit!(TreasuryInitialized {
        mint: cfg.mint,
        admin: cfg.admin,
        distributor: cfg.distributor,
        bucket_count: cfg.routes.len() as u8,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + TreasuryConfig::INIT_SPACE,
        seeds = [TREASURY_CONFIG_SEED],
        bump
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        init,
        payer = admin,
        space = 8 + FeeLedger::INIT_SPACE,
        seeds = [FEE_LEDGER_SEED, treasury_config.key().as_ref()],
        bump
    )]
    pub fee_ledger: Box<Account<'info, FeeLedger>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = treasury_config,
        seeds = [VESTING_VAULT_SEED, treasury_config.key().as_ref()],
        bump
    )]
    pub vesting_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = treasury_config,
        seeds = [FEE_VAULT_SEED, treasury_config.key().as_ref()],
        bump
    )]
    pub fee_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = treasury_config,
        seeds = [BURN_VAULT_SEED, treasury_config.key().as_ref()],
        bump
    )]
    pub burn_vault: Box<Account<'info, TokenAccount>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TreasuryInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub distributor: Pubkey,
    pub bucket_count: u8,
}
