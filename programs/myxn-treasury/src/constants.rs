//! Program-wide constants.

/// Basis points denominator (100.00% == 10_000 bps).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Max unlock steps in a vesting schedule.
/// Keep in sync with `#[max_len]` on `VestingSchedule::steps`.
pub const MAX_UNLOCK_STEPS: usize = 64;

/// Max fee buckets in a bucket config.
/// Keep in sync with `#[max_len]` on the bucket vectors.
pub const MAX_FEE_BUCKETS: usize = 8;

/// Max bucket name length in bytes.
pub const MAX_BUCKET_NAME_LEN: usize = 16;

pub const TREASURY_CONFIG_SEED: &[u8] = b"treasury_config";
pub const SCHEDULE_STATE_SEED: &[u8] = b"schedule_state";
pub const FEE_LEDGER_SEED: &[u8] = b"fee_ledger";
pub const PARTICIPANT_SEED: &[u8] = b"participant";
pub const VESTING_VAULT_SEED: &[u8] = b"vesting_vault";
pub const FEE_VAULT_SEED: &[u8] = b"fee_vault";
pub const BURN_VAULT_SEED: &[u8] = b"burn_vault";
