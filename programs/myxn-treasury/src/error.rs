use anchor_lang::prelude::*;

/// Custom error codes for the MYXN treasury program.
#[error_code]
pub enum TreasuryError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: distributor signature required")]
    UnauthorizedDistributor,

    #[msg("Unauthorized: admin or distributor signature required")]
    UnauthorizedBurnCaller,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Unlock step percentage must be within 0..=10000 bps")]
    StepPercentageOutOfRange,

    #[msg("Vesting schedule unlocks more than 100%")]
    ScheduleOverallocated,

    #[msg("Vesting schedule steps must be sorted by offset_days")]
    ScheduleNotSorted,

    #[msg("Vesting schedule has duplicate offset_days")]
    DuplicateUnlockOffset,

    #[msg("Too many unlock steps")]
    TooManyUnlockSteps,

    #[msg("Fee bucket config is empty")]
    EmptyBucketConfig,

    #[msg("Fee bucket percentages must sum to exactly 10000 bps")]
    BucketPercentageMismatch,

    #[msg("Duplicate fee bucket name")]
    DuplicateBucketName,

    #[msg("Invalid fee bucket name")]
    InvalidBucketName,

    #[msg("Too many fee buckets")]
    TooManyBuckets,

    #[msg("Pending collection does not match the bucket config")]
    PendingLedgerMismatch,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Claim exceeds the currently claimable amount")]
    ExceedsClaimable,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Nothing to distribute")]
    NothingToDistribute,

    #[msg("Pending fee collection must be flushed first")]
    PendingNotEmpty,

    #[msg("Treasury is paused")]
    TreasuryPaused,

    #[msg("Treasury is not paused")]
    TreasuryNotPaused,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Bucket destination does not match config")]
    InvalidBucketDestination,

    #[msg("Missing bucket destination account")]
    MissingBucketDestination,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Monthly burn only runs on the last day of the month")]
    BurnWindowClosed,

    #[msg("Monthly burn already executed for this period")]
    AlreadyBurnedThisPeriod,

    #[msg("Math overflow")]
    MathOverflow,
}

impl TreasuryError {
    /// Malformed schedule or bucket configuration. Fatal, never retried.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TreasuryError::InvalidConfig
                | TreasuryError::StepPercentageOutOfRange
                | TreasuryError::ScheduleOverallocated
                | TreasuryError::ScheduleNotSorted
                | TreasuryError::DuplicateUnlockOffset
                | TreasuryError::TooManyUnlockSteps
                | TreasuryError::EmptyBucketConfig
                | TreasuryError::BucketPercentageMismatch
                | TreasuryError::DuplicateBucketName
                | TreasuryError::InvalidBucketName
                | TreasuryError::TooManyBuckets
                | TreasuryError::PendingLedgerMismatch
        )
    }
}
