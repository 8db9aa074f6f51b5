//! Pure accounting core: no accounts, no CPI, no clock reads.

pub mod burn;
pub mod fee_split;
pub mod vesting;
