//! Day-based step vesting.
//!
//! A schedule is a list of unlock steps sorted by `offset_days`. At any moment the
//! vested fraction is the sum of `percentage_bps` over every step whose offset has
//! been reached, counted in whole UTC days since `vesting_start`. Amounts are
//! truncated, so a fully unlocked schedule never vests more than the allocation.
//!
//! Schedules that unlock less than 10_000 bps are legal; the rest stays in reserve.

use anchor_lang::prelude::*;
use core::result::Result;

use crate::constants::{BPS_DENOMINATOR, MAX_UNLOCK_STEPS};
use crate::error::TreasuryError;
use crate::utils::time;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct UnlockStep {
    /// Whole days after `vesting_start`.
    pub offset_days: u32,
    /// Share of the allocation unlocked by this step.
    pub percentage_bps: u16,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct VestingSchedule {
    #[max_len(64)]
    steps: Vec<UnlockStep>,
}

impl VestingSchedule {
    pub fn new(steps: Vec<UnlockStep>) -> Result<Self, TreasuryError> {
        let schedule = Self { steps };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Linear daily release: `daily_bps` per elapsed day up to `total_days`, nothing
    /// before `cliff_days` (days before the cliff still count once it is reached).
    /// Caps at 10_000 bps; a shortfall stays in reserve.
    pub fn linear_daily(
        cliff_days: u32,
        daily_bps: u16,
        total_days: u32,
    ) -> Result<Self, TreasuryError> {
        if daily_bps == 0 || total_days == 0 {
            return Err(TreasuryError::InvalidConfig);
        }

        let first = cliff_days.max(1);
        let last = total_days.max(first);
        let mut steps = Vec::new();
        let mut unlocked: u64 = 0;
        for day in first..=last {
            let cumulative = (daily_bps as u64)
                .saturating_mul(day.min(total_days) as u64)
                .min(BPS_DENOMINATOR);
            let increment = cumulative - unlocked;
            if increment > 0 {
                if steps.len() == MAX_UNLOCK_STEPS {
                    return Err(TreasuryError::TooManyUnlockSteps);
                }
                steps.push(UnlockStep {
                    offset_days: day,
                    percentage_bps: increment as u16,
                });
                unlocked = cumulative;
            }
            if unlocked == BPS_DENOMINATOR {
                break;
            }
        }
        Self::new(steps)
    }

    pub fn steps(&self) -> &[UnlockStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all step percentages.
    pub fn total_bps(&self) -> u64 {
        self.steps.iter().map(|s| s.percentage_bps as u64).sum()
    }

    /// Checks the load-time invariants. Deserialized schedules skip `new`, so
    /// `evaluate` runs this again.
    pub fn validate(&self) -> Result<(), TreasuryError> {
        if self.steps.len() > MAX_UNLOCK_STEPS {
            return Err(TreasuryError::TooManyUnlockSteps);
        }
        let mut total: u64 = 0;
        let mut prev_offset: Option<u32> = None;
        for step in &self.steps {
            if step.percentage_bps as u64 > BPS_DENOMINATOR {
                return Err(TreasuryError::StepPercentageOutOfRange);
            }
            if let Some(prev) = prev_offset {
                if step.offset_days == prev {
                    return Err(TreasuryError::DuplicateUnlockOffset);
                }
                if step.offset_days < prev {
                    return Err(TreasuryError::ScheduleNotSorted);
                }
            }
            total += step.percentage_bps as u64;
            prev_offset = Some(step.offset_days);
        }
        if total > BPS_DENOMINATOR {
            return Err(TreasuryError::ScheduleOverallocated);
        }
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct ParticipantAllocation {
    pub total_allocation: u64,
    /// Unix seconds, UTC.
    pub vesting_start: i64,
    pub claimed_so_far: u64,
}

impl ParticipantAllocation {
    pub fn new(total_allocation: u64, vesting_start: i64) -> Result<Self, TreasuryError> {
        if total_allocation == 0 {
            return Err(TreasuryError::InvalidAmount);
        }
        Ok(Self {
            total_allocation,
            vesting_start,
            claimed_so_far: 0,
        })
    }

    pub fn remaining(&self) -> u64 {
        self.total_allocation.saturating_sub(self.claimed_so_far)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingEvaluation {
    pub unlocked_bps: u16,
    pub total_vested: u64,
    pub claimable_now: u64,
    /// Start of the earliest step not yet reached.
    pub next_unlock_at: Option<i64>,
}

pub fn evaluate(
    allocation: &ParticipantAllocation,
    schedule: &VestingSchedule,
    now_ts: i64,
) -> Result<VestingEvaluation, TreasuryError> {
    schedule.validate()?;

    let elapsed = time::elapsed_days(now_ts, allocation.vesting_start)?;
    let mut unlocked_bps: u64 = 0;
    let mut next_unlock_at = None;
    for step in schedule.steps() {
        if (step.offset_days as i64) <= elapsed {
            unlocked_bps += step.percentage_bps as u64;
        } else {
            next_unlock_at = Some(time::day_offset_ts(
                allocation.vesting_start,
                step.offset_days,
            )?);
            break;
        }
    }

    let vested = (allocation.total_allocation as u128)
        .checked_mul(unlocked_bps as u128)
        .ok_or(TreasuryError::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    let total_vested = u64::try_from(vested).map_err(|_| TreasuryError::MathOverflow)?;

    #[cfg(feature = "verbose")]
    msg!(
        "evaluate: elapsed_days={}, unlocked_bps={}, vested={}",
        elapsed,
        unlocked_bps,
        total_vested
    );

    Ok(VestingEvaluation {
        unlocked_bps: unlocked_bps as u16,
        total_vested,
        claimable_now: total_vested.saturating_sub(allocation.claimed_so_far),
        next_unlock_at,
    })
}

/// Returns the allocation with `amount` added to `claimed_so_far`.
/// Call only once the matching transfer is confirmed; there is no undo.
pub fn record_claim(
    allocation: &ParticipantAllocation,
    schedule: &VestingSchedule,
    now_ts: i64,
    amount: u64,
) -> Result<ParticipantAllocation, TreasuryError> {
    if amount == 0 {
        return Err(TreasuryError::InvalidAmount);
    }
    let evaluation = evaluate(allocation, schedule, now_ts)?;
    if amount > evaluation.claimable_now {
        return Err(TreasuryError::ExceedsClaimable);
    }
    let claimed_so_far = allocation
        .claimed_so_far
        .checked_add(amount)
        .ok_or(TreasuryError::MathOverflow)?;
    Ok(ParticipantAllocation {
        claimed_so_far,
        ..*allocation
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const T0: i64 = 1_775_865_600; // 2026-04-11 00:00:00 UTC

    fn step(offset_days: u32, percentage_bps: u16) -> UnlockStep {
        UnlockStep {
            offset_days,
            percentage_bps,
        }
    }

    fn three_step() -> VestingSchedule {
        VestingSchedule::new(vec![step(0, 2000), step(30, 3000), step(60, 5000)]).unwrap()
    }

    fn days(n: i64) -> i64 {
        n * SECONDS_PER_DAY
    }

    #[test]
    fn three_step_schedule_unlocks_at_offsets() {
        let alloc = ParticipantAllocation::new(1000, T0).unwrap();
        let s = three_step();

        let at_start = evaluate(&alloc, &s, T0).unwrap();
        assert_eq!(at_start.total_vested, 200);
        assert_eq!(at_start.claimable_now, 200);
        assert_eq!(at_start.next_unlock_at, Some(T0 + days(30)));

        let day_29 = evaluate(&alloc, &s, T0 + days(30) - 1).unwrap();
        assert_eq!(day_29.total_vested, 200);

        assert_eq!(evaluate(&alloc, &s, T0 + days(30)).unwrap().total_vested, 500);

        let done = evaluate(&alloc, &s, T0 + days(60)).unwrap();
        assert_eq!(done.total_vested, 1000);
        assert_eq!(done.unlocked_bps, 10_000);
        assert_eq!(done.next_unlock_at, None);
    }

    #[test]
    fn before_start_vests_nothing_and_points_at_first_step() {
        let alloc = ParticipantAllocation::new(1000, T0).unwrap();
        let s = VestingSchedule::new(vec![step(7, 10_000)]).unwrap();
        let ev = evaluate(&alloc, &s, T0 - days(3)).unwrap();
        assert_eq!(ev.total_vested, 0);
        assert_eq!(ev.claimable_now, 0);
        assert_eq!(ev.next_unlock_at, Some(T0 + days(7)));

        // A day-zero step is still in the future one second before start.
        let ev = evaluate(&alloc, &three_step(), T0 - 1).unwrap();
        assert_eq!(ev.total_vested, 0);
        assert_eq!(ev.next_unlock_at, Some(T0));
    }

    #[test]
    fn empty_schedule_never_vests() {
        let alloc = ParticipantAllocation::new(1000, T0).unwrap();
        let s = VestingSchedule::new(vec![]).unwrap();
        let ev = evaluate(&alloc, &s, T0 + days(10_000)).unwrap();
        assert_eq!(ev.total_vested, 0);
        assert_eq!(ev.next_unlock_at, None);
    }

    #[test]
    fn partial_schedule_keeps_reserve() {
        let alloc = ParticipantAllocation::new(1000, T0).unwrap();
        let s = VestingSchedule::new(vec![step(0, 2500), step(10, 2500)]).unwrap();
        let ev = evaluate(&alloc, &s, T0 + days(365)).unwrap();
        assert_eq!(ev.total_vested, 500);
    }

    #[test]
    fn truncation_never_exceeds_allocation() {
        let s = VestingSchedule::new(vec![step(0, 3333), step(1, 3333), step(2, 3334)]).unwrap();
        for total in [1u64, 2, 3, 7, 10, 9_999, 1_000_000_007, u64::MAX] {
            let alloc = ParticipantAllocation::new(total, T0).unwrap();
            let first = evaluate(&alloc, &s, T0).unwrap();
            assert!(first.total_vested <= total / 3 + 1);
            let full = evaluate(&alloc, &s, T0 + days(2)).unwrap();
            assert_eq!(full.total_vested, total);
        }
    }

    #[test]
    fn validation_rejects_malformed_schedules() {
        assert!(matches!(
            VestingSchedule::new(vec![step(0, 6000), step(1, 4001)]),
            Err(TreasuryError::ScheduleOverallocated)
        ));
        assert!(matches!(
            VestingSchedule::new(vec![step(10, 100), step(5, 100)]),
            Err(TreasuryError::ScheduleNotSorted)
        ));
        assert!(matches!(
            VestingSchedule::new(vec![step(10, 100), step(10, 100)]),
            Err(TreasuryError::DuplicateUnlockOffset)
        ));
        assert!(matches!(
            VestingSchedule::new(vec![step(0, 10_001)]),
            Err(TreasuryError::StepPercentageOutOfRange)
        ));
        let too_many = (0..=MAX_UNLOCK_STEPS as u32).map(|d| step(d, 1)).collect();
        assert!(matches!(
            VestingSchedule::new(too_many),
            Err(TreasuryError::TooManyUnlockSteps)
        ));
        assert!(TreasuryError::ScheduleOverallocated.is_configuration());
        assert!(!TreasuryError::ExceedsClaimable.is_configuration());
    }

    #[test]
    fn evaluate_rejects_unvalidated_schedule() {
        let raw = VestingSchedule {
            steps: vec![step(5, 100), step(5, 200)],
        };
        let alloc = ParticipantAllocation::new(1000, T0).unwrap();
        let err = evaluate(&alloc, &raw, T0).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn vested_is_monotonic_in_time() {
        let s = VestingSchedule::new(vec![
            step(0, 1000),
            step(3, 1500),
            step(17, 2500),
            step(40, 1),
            step(90, 4999),
        ])
        .unwrap();
        let alloc = ParticipantAllocation::new(123_456_789, T0).unwrap();
        let mut prev = 0u64;
        let mut t = T0 - days(5);
        while t <= T0 + days(120) {
            let ev = evaluate(&alloc, &s, t).unwrap();
            assert!(ev.total_vested >= prev, "vested decreased at {}", t);
            assert!(ev.total_vested <= alloc.total_allocation);
            prev = ev.total_vested;
            t += 3_607; // odd stride to land inside days
        }
        assert_eq!(prev, alloc.total_allocation);
    }

    #[test]
    fn claimable_floors_at_zero_after_large_claim() {
        let s = three_step();
        let alloc = ParticipantAllocation {
            total_allocation: 1000,
            vesting_start: T0,
            claimed_so_far: 700,
        };
        let ev = evaluate(&alloc, &s, T0 + days(31)).unwrap();
        assert_eq!(ev.total_vested, 500);
        assert_eq!(ev.claimable_now, 0);
    }

    #[test]
    fn record_claim_accumulates() {
        let s = three_step();
        let alloc = ParticipantAllocation::new(1000, T0).unwrap();

        let a1 = record_claim(&alloc, &s, T0, 150).unwrap();
        assert_eq!(a1.claimed_so_far, 150);
        let a2 = record_claim(&a1, &s, T0, 50).unwrap();
        assert_eq!(a2.claimed_so_far, 200);
        assert_eq!(evaluate(&a2, &s, T0).unwrap().claimable_now, 0);

        let a3 = record_claim(&a2, &s, T0 + days(60), 800).unwrap();
        assert_eq!(a3.claimed_so_far, 1000);
        assert_eq!(a3.remaining(), 0);
        assert_eq!(a3.total_allocation, alloc.total_allocation);
        assert_eq!(a3.vesting_start, alloc.vesting_start);
    }

    #[test]
    fn record_claim_over_claimable_leaves_allocation_untouched() {
        let s = three_step();
        let alloc = ParticipantAllocation::new(1000, T0).unwrap();
        let before = alloc;
        assert!(matches!(
            record_claim(&alloc, &s, T0, 201),
            Err(TreasuryError::ExceedsClaimable)
        ));
        assert_eq!(alloc, before);
        assert!(matches!(
            record_claim(&alloc, &s, T0, 0),
            Err(TreasuryError::InvalidAmount)
        ));
    }

    #[test]
    fn zero_allocation_rejected() {
        assert!(matches!(
            ParticipantAllocation::new(0, T0),
            Err(TreasuryError::InvalidAmount)
        ));
    }

    #[test]
    fn linear_daily_five_percent() {
        let s = VestingSchedule::linear_daily(0, 500, 20).unwrap();
        assert_eq!(s.steps().len(), 20);
        assert_eq!(s.total_bps(), 10_000);
        assert_eq!(s.steps()[0], step(1, 500));

        let alloc = ParticipantAllocation::new(1_000_000, T0).unwrap();
        assert_eq!(evaluate(&alloc, &s, T0).unwrap().total_vested, 0);
        assert_eq!(evaluate(&alloc, &s, T0 + days(3)).unwrap().total_vested, 150_000);
        assert_eq!(evaluate(&alloc, &s, T0 + days(20)).unwrap().total_vested, 1_000_000);
    }

    #[test]
    fn linear_daily_cliff_and_remainder() {
        // 3% a day over 30 days with a 10 day cliff: 30% at the cliff, then
        // 3%/day up to 90% on day 30. The last 10% stays in reserve.
        let s = VestingSchedule::linear_daily(10, 300, 30).unwrap();
        assert_eq!(s.steps().len(), 21);
        assert_eq!(s.steps()[0], step(10, 3000));
        assert_eq!(*s.steps().last().unwrap(), step(30, 300));
        assert_eq!(s.total_bps(), 9_000);

        let alloc = ParticipantAllocation::new(10_000, T0).unwrap();
        assert_eq!(evaluate(&alloc, &s, T0 + days(9)).unwrap().total_vested, 0);
        assert_eq!(evaluate(&alloc, &s, T0 + days(10)).unwrap().total_vested, 3_000);
        assert_eq!(evaluate(&alloc, &s, T0 + days(30)).unwrap().total_vested, 9_000);
        assert_eq!(evaluate(&alloc, &s, T0 + days(400)).unwrap().total_vested, 9_000);

        // Without a cliff the shortfall is the same.
        let s = VestingSchedule::linear_daily(0, 300, 30).unwrap();
        assert_eq!(s.total_bps(), 9_000);
        assert_eq!(evaluate(&alloc, &s, T0 + days(30)).unwrap().total_vested, 9_000);

        // Cliff past the end unlocks the capped total at once.
        let s = VestingSchedule::linear_daily(45, 500, 20).unwrap();
        assert_eq!(s.steps(), &[step(45, 10_000)]);
        let s = VestingSchedule::linear_daily(45, 300, 30).unwrap();
        assert_eq!(s.steps(), &[step(45, 9_000)]);

        assert!(matches!(
            VestingSchedule::linear_daily(0, 1, 365),
            Err(TreasuryError::TooManyUnlockSteps)
        ));
        assert!(matches!(
            VestingSchedule::linear_daily(0, 0, 10),
            Err(TreasuryError::InvalidConfig)
        ));
    }
}
