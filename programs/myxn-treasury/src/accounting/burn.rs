//! Monthly burn bookkeeping: one burn per calendar month, on its last UTC day.

use anchor_lang::prelude::*;
use core::result::Result;

use crate::error::TreasuryError;
use crate::utils::time;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct BurnStats {
    pub total_burns: u64,
    pub total_burned: u64,
    pub last_burn_at: Option<i64>,
    /// `time::month_period` of the last burn.
    pub last_burn_period: Option<u32>,
}

impl BurnStats {
    /// Stats after a confirmed burn of `amount` in `period`.
    pub fn record(&self, amount: u64, period: u32, now_ts: i64) -> Result<Self, TreasuryError> {
        if amount == 0 {
            return Err(TreasuryError::InvalidAmount);
        }
        Ok(Self {
            total_burns: self
                .total_burns
                .checked_add(1)
                .ok_or(TreasuryError::MathOverflow)?,
            total_burned: self
                .total_burned
                .checked_add(amount)
                .ok_or(TreasuryError::MathOverflow)?,
            last_burn_at: Some(now_ts),
            last_burn_period: Some(period),
        })
    }
}

/// Either treasury authority may trigger the monthly burn.
pub fn authorize_caller(
    caller: &Pubkey,
    admin: &Pubkey,
    distributor: &Pubkey,
) -> Result<(), TreasuryError> {
    if caller == admin || caller == distributor {
        Ok(())
    } else {
        Err(TreasuryError::UnauthorizedBurnCaller)
    }
}

/// Returns the burn period for `now_ts` if a burn may run now.
pub fn burn_due(
    stats: &BurnStats,
    now_ts: i64,
    enforce_window: bool,
) -> Result<u32, TreasuryError> {
    let period = time::month_period(now_ts)?;
    if enforce_window && !time::is_last_day_of_month(now_ts)? {
        return Err(TreasuryError::BurnWindowClosed);
    }
    if stats.last_burn_period == Some(period) {
        return Err(TreasuryError::AlreadyBurnedThisPeriod);
    }
    Ok(period)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OCT_19_2026: i64 = 1_792_368_000; // 2026-10-19 00:00:00 UTC
    const OCT_31_2026: i64 = 1_793_404_800; // 2026-10-31 00:00:00 UTC
    const NOV_30_2026: i64 = 1_795_996_800; // 2026-11-30 00:00:00 UTC

    #[test]
    fn burn_only_on_last_day() {
        let stats = BurnStats::default();
        assert!(matches!(
            burn_due(&stats, OCT_19_2026, true),
            Err(TreasuryError::BurnWindowClosed)
        ));
        assert!(burn_due(&stats, OCT_19_2026, false).is_ok());
        let period = burn_due(&stats, OCT_31_2026 + 3_600, true).unwrap();
        assert_eq!(period, time::month_period(OCT_19_2026).unwrap());
    }

    #[test]
    fn one_burn_per_month() {
        let stats = BurnStats::default();
        let period = burn_due(&stats, OCT_31_2026, true).unwrap();
        let stats = stats.record(5_000, period, OCT_31_2026).unwrap();

        assert!(matches!(
            burn_due(&stats, OCT_31_2026 + 60, true),
            Err(TreasuryError::AlreadyBurnedThisPeriod)
        ));
        // Next month opens again.
        assert!(burn_due(&stats, NOV_30_2026, true).is_ok());
    }

    #[test]
    fn admin_or_distributor_may_burn() {
        let admin = Pubkey::new_unique();
        let distributor = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();

        assert!(authorize_caller(&admin, &admin, &distributor).is_ok());
        assert!(authorize_caller(&distributor, &admin, &distributor).is_ok());
        let err = authorize_caller(&stranger, &admin, &distributor).unwrap_err();
        assert!(matches!(err, TreasuryError::UnauthorizedBurnCaller));
        assert!(!matches!(err, TreasuryError::UnauthorizedDistributor));
        assert!(err.to_string().contains("admin or distributor"));
    }

    #[test]
    fn stats_accumulate() {
        let stats = BurnStats::default()
            .record(100, 1, 10)
            .unwrap()
            .record(250, 2, 20)
            .unwrap();
        assert_eq!(stats.total_burns, 2);
        assert_eq!(stats.total_burned, 350);
        assert_eq!(stats.last_burn_at, Some(20));
        assert_eq!(stats.last_burn_period, Some(2));
        assert!(matches!(
            stats.record(0, 3, 30),
            Err(TreasuryError::InvalidAmount)
        ));
    }
}
