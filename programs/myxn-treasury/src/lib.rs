use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

pub mod accounting;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

use accounting::fee_split::FeeSplitAccountant;
use constants::TREASURY_CONFIG_SEED;
use error::TreasuryError;
use state::BucketRoute;
use utils::digest::distribution_digest;

declare_id!("3yUPdEwS1HrPDfEuVw3NRgFNsZuXRiSRVD3ZhMogB4xd");

#[program]
pub mod myxn_treasury {
    use super::*;

    pub fn initialize_treasury(
        ctx: Context<InitializeTreasury>,
        params: InitializeTreasuryParams,
    ) -> Result<()> {
        instructions::initialize_treasury::initialize_treasury(ctx, params)
    }

    pub fn initialize_schedule(ctx: Context<InitializeSchedule>, input: ScheduleInput) -> Result<()> {
        instructions::initialize_schedule::initialize_schedule(ctx, input)
    }

    pub fn register_participant(
        ctx: Context<RegisterParticipant>,
        wallet: Pubkey,
        total_allocation: u64,
        vesting_start: i64,
    ) -> Result<()> {
        instructions::register_participant::register_participant(
            ctx,
            wallet,
            total_allocation,
            vesting_start,
        )
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn claim_vested(ctx: Context<ClaimVested>, amount: Option<u64>) -> Result<()> {
        instructions::claim_vested::claim_vested(ctx, amount)
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx, wallet)
    }

    pub fn record_fee_collection(
        ctx: Context<RecordFeeCollection>,
        amount: u64,
        tx_count: u64,
    ) -> Result<()> {
        instructions::record_fee_collection::record_fee_collection(ctx, amount, tx_count)
    }

    pub fn preview_distribution(ctx: Context<PreviewDistribution>) -> Result<()> {
        instructions::preview_distribution::preview_distribution(ctx)
    }

    /// Pays every pending bucket share out of the fee vault and closes the cycle.
    /// Transfers and the ledger flush commit atomically with the transaction.
    pub fn distribute_fees<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeFees<'info>>,
    ) -> Result<()> {
        let cfg = &ctx.accounts.treasury_config;
        require!(!cfg.paused, TreasuryError::TreasuryPaused);
        require_keys_eq!(
            ctx.accounts.distributor.key(),
            cfg.distributor,
            TreasuryError::UnauthorizedDistributor
        );

        let mut accountant = FeeSplitAccountant::resume(
            cfg.bucket_config()?,
            ctx.accounts.fee_ledger.pending.clone(),
        )?;
        require!(
            !accountant.pending().is_empty(),
            TreasuryError::NothingToDistribute
        );
        let total = accountant.pending().total_collected;
        let transaction_count = accountant.pending().transaction_count;
        let shares = accountant.compute_distribution();

        let destinations = ctx.remaining_accounts;
        require!(
            destinations.len() == cfg.routes.len(),
            TreasuryError::MissingBucketDestination
        );
        require!(
            ctx.accounts.fee_vault.amount >= total,
            TreasuryError::InsufficientVaultBalance
        );

        let treasury_config_ai = ctx.accounts.treasury_config.to_account_info();
        let fee_vault_ai = ctx.accounts.fee_vault.to_account_info();
        let token_program_ai = ctx.accounts.token_program.to_account_info();
        let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_CONFIG_SEED, &[cfg.bump]]];

        for ((route, share), dest_ai) in cfg
            .routes
            .iter()
            .zip(shares.iter())
            .zip(destinations.iter())
        {
            require_keys_eq!(
                *dest_ai.key,
                route.destination,
                TreasuryError::InvalidBucketDestination
            );
            if share.amount == 0 {
                continue;
            }
            require!(dest_ai.is_writable, TreasuryError::InvalidBucketDestination);
            require_keys_eq!(*dest_ai.owner, token::ID, TreasuryError::InvalidTokenAccount);
            {
                let data = dest_ai.try_borrow_data()?;
                let dest = TokenAccount::try_deserialize(&mut &data[..])?;
                require_keys_eq!(dest.mint, cfg.mint, TreasuryError::InvalidTokenMint);
            }

            token::transfer(
                CpiContext::new_with_signer(
                    token_program_ai.clone(),
                    Transfer {
                        from: fee_vault_ai.clone(),
                        to: dest_ai.clone(),
                        authority: treasury_config_ai.clone(),
                    },
                    signer_seeds,
                ),
                share.amount,
            )?;

            #[cfg(feature = "verbose")]
            msg!("distribute_fees: {} -> {} ({})", route.name, route.destination, share.amount);
        }

        let flushed = accountant.flush();
        let ledger_key = ctx.accounts.fee_ledger.key();
        let ledger = &mut ctx.accounts.fee_ledger;
        let cycle = ledger
            .cycles_completed
            .checked_add(1)
            .ok_or(TreasuryError::MathOverflow)?;
        let digest = distribution_digest(&ledger_key, cycle, &flushed);

        ledger.pending = accountant.into_pending();
        ledger.cycles_completed = cycle;
        ledger.lifetime_distributed = ledger
            .lifetime_distributed
            .checked_add(total)
            .ok_or(TreasuryError::MathOverflow)?;

        msg!(
            "Distributed cycle {}: {} tokens across {} buckets ({} tx)",
            cycle,
            total,
            shares.len(),
            transaction_count
        );

        emit!(FeesDistributed {
            cycle,
            total,
            transaction_count,
            shares: flushed.per_bucket,
            digest,
        });

        Ok(())
    }

    pub fn execute_monthly_burn(ctx: Context<ExecuteMonthlyBurn>) -> Result<()> {
        instructions::execute_monthly_burn::execute_monthly_burn(ctx)
    }

    pub fn update_fee_buckets(ctx: Context<UpdateFeeBuckets>, routes: Vec<BucketRoute>) -> Result<()> {
        instructions::update_fee_buckets::update_fee_buckets(ctx, routes)
    }

    pub fn set_distributor(ctx: Context<SetDistributor>, new_distributor: Pubkey) -> Result<()> {
        instructions::set_distributor::set_distributor(ctx, new_distributor)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }
}
