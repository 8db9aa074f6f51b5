//! Fee pool accounting.
//!
//! Collected fees are split across named buckets in declaration order. Every bucket
//! but the last gets `floor(amount * bps / 10_000)`; the last bucket takes whatever is
//! left, so the shares always add up to the collected amount exactly. With the default
//! config (burn, charity, liquidity, treasury) the treasury absorbs the rounding dust.
//!
//! Collections accumulate in a [`PendingCollection`] until the caller has confirmed
//! every transfer of a distribution cycle and calls [`FeeSplitAccountant::flush`].

use anchor_lang::prelude::*;
use core::result::Result;

use crate::constants::{BPS_DENOMINATOR, MAX_BUCKET_NAME_LEN, MAX_FEE_BUCKETS};
use crate::error::TreasuryError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct FeeBucket {
    #[max_len(16)]
    pub name: String,
    pub percentage_bps: u16,
}

impl FeeBucket {
    pub fn new(name: &str, percentage_bps: u16) -> Self {
        Self {
            name: name.to_string(),
            percentage_bps,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct FeeBucketConfig {
    #[max_len(8)]
    buckets: Vec<FeeBucket>,
}

impl FeeBucketConfig {
    pub fn new(buckets: Vec<FeeBucket>) -> Result<Self, TreasuryError> {
        let config = Self { buckets };
        config.validate()?;
        Ok(config)
    }

    /// 10% burn, 30% charity, 20% liquidity, 40% treasury (remainder sink).
    pub fn default_split() -> Self {
        Self {
            buckets: vec![
                FeeBucket::new("burn", 1000),
                FeeBucket::new("charity", 3000),
                FeeBucket::new("liquidity", 2000),
                FeeBucket::new("treasury", 4000),
            ],
        }
    }

    pub fn buckets(&self) -> &[FeeBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn validate(&self) -> Result<(), TreasuryError> {
        if self.is_empty() {
            return Err(TreasuryError::EmptyBucketConfig);
        }
        if self.buckets.len() > MAX_FEE_BUCKETS {
            return Err(TreasuryError::TooManyBuckets);
        }
        let mut total: u64 = 0;
        for (i, bucket) in self.buckets.iter().enumerate() {
            if bucket.name.is_empty() || bucket.name.len() > MAX_BUCKET_NAME_LEN {
                return Err(TreasuryError::InvalidBucketName);
            }
            if self.buckets[..i].iter().any(|b| b.name == bucket.name) {
                return Err(TreasuryError::DuplicateBucketName);
            }
            total += bucket.percentage_bps as u64;
        }
        if total != BPS_DENOMINATOR {
            return Err(TreasuryError::BucketPercentageMismatch);
        }
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct BucketShare {
    #[max_len(16)]
    pub name: String,
    pub amount: u64,
}

/// Amount for `name`, if the bucket exists.
pub fn amount_for(shares: &[BucketShare], name: &str) -> Option<u64> {
    shares.iter().find(|s| s.name == name).map(|s| s.amount)
}

pub fn total_of(shares: &[BucketShare]) -> Result<u64, TreasuryError> {
    shares.iter().try_fold(0u64, |acc, s| {
        acc.checked_add(s.amount).ok_or(TreasuryError::MathOverflow)
    })
}

/// Exact split of `amount`; the last bucket absorbs the remainder.
pub fn split(amount: u64, config: &FeeBucketConfig) -> Result<Vec<BucketShare>, TreasuryError> {
    config.validate()?;
    let (last, rest) = config
        .buckets
        .split_last()
        .ok_or(TreasuryError::EmptyBucketConfig)?;

    let mut shares = Vec::with_capacity(config.len());
    let mut assigned: u64 = 0;
    for bucket in rest {
        // bps <= 10_000, so the quotient fits back into u64.
        let share = ((amount as u128) * (bucket.percentage_bps as u128)
            / BPS_DENOMINATOR as u128) as u64;
        assigned = assigned
            .checked_add(share)
            .ok_or(TreasuryError::MathOverflow)?;
        shares.push(BucketShare {
            name: bucket.name.clone(),
            amount: share,
        });
    }
    shares.push(BucketShare {
        name: last.name.clone(),
        amount: amount
            .checked_sub(assigned)
            .ok_or(TreasuryError::MathOverflow)?,
    });
    Ok(shares)
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct PendingCollection {
    pub total_collected: u64,
    /// One entry per bucket, in config order.
    #[max_len(8)]
    pub per_bucket: Vec<BucketShare>,
    pub transaction_count: u64,
    pub first_collected_at: Option<i64>,
}

impl PendingCollection {
    pub fn empty(config: &FeeBucketConfig) -> Self {
        Self {
            total_collected: 0,
            per_bucket: config
                .buckets
                .iter()
                .map(|b| BucketShare {
                    name: b.name.clone(),
                    amount: 0,
                })
                .collect(),
            transaction_count: 0,
            first_collected_at: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_collected == 0 && self.transaction_count == 0
    }

    fn matches(&self, config: &FeeBucketConfig) -> bool {
        self.per_bucket.len() == config.len()
            && self
                .per_bucket
                .iter()
                .zip(config.buckets.iter())
                .all(|(share, bucket)| share.name == bucket.name)
            && total_of(&self.per_bucket).ok() == Some(self.total_collected)
    }
}

/// Accumulates fee collections for one bucket config.
///
/// Mutating calls on the same pending state must be serialized by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeSplitAccountant {
    config: FeeBucketConfig,
    pending: PendingCollection,
}

impl FeeSplitAccountant {
    pub fn new(config: FeeBucketConfig) -> Result<Self, TreasuryError> {
        config.validate()?;
        let pending = PendingCollection::empty(&config);
        Ok(Self { config, pending })
    }

    /// Picks up a pending collection persisted by an earlier run.
    pub fn resume(
        config: FeeBucketConfig,
        pending: PendingCollection,
    ) -> Result<Self, TreasuryError> {
        config.validate()?;
        if !pending.matches(&config) {
            return Err(TreasuryError::PendingLedgerMismatch);
        }
        Ok(Self { config, pending })
    }

    pub fn config(&self) -> &FeeBucketConfig {
        &self.config
    }

    pub fn pending(&self) -> &PendingCollection {
        &self.pending
    }

    pub fn into_pending(self) -> PendingCollection {
        self.pending
    }

    /// Splits `amount` and adds it to the pending totals. On error nothing changes.
    pub fn record_collection(
        &mut self,
        amount: u64,
        tx_count: u64,
        now_ts: i64,
    ) -> Result<(), TreasuryError> {
        let shares = split(amount, &self.config)?;

        let total_collected = self
            .pending
            .total_collected
            .checked_add(amount)
            .ok_or(TreasuryError::MathOverflow)?;
        let transaction_count = self
            .pending
            .transaction_count
            .checked_add(tx_count)
            .ok_or(TreasuryError::MathOverflow)?;
        let mut per_bucket = self.pending.per_bucket.clone();
        for (acc, share) in per_bucket.iter_mut().zip(shares.iter()) {
            acc.amount = acc
                .amount
                .checked_add(share.amount)
                .ok_or(TreasuryError::MathOverflow)?;
        }

        #[cfg(feature = "verbose")]
        msg!(
            "record_collection: amount={}, pending_total={}, tx_count={}",
            amount,
            total_collected,
            transaction_count
        );

        self.pending = PendingCollection {
            total_collected,
            per_bucket,
            transaction_count,
            first_collected_at: self.pending.first_collected_at.or(Some(now_ts)),
        };
        Ok(())
    }

    /// Snapshot of the pending per-bucket totals. Does not mutate.
    pub fn compute_distribution(&self) -> Vec<BucketShare> {
        self.pending.per_bucket.clone()
    }

    /// Returns the accumulated state and starts a new cycle. Only call after every
    /// non-zero bucket transfer has been confirmed.
    pub fn flush(&mut self) -> PendingCollection {
        let empty = PendingCollection::empty(&self.config);
        core::mem::replace(&mut self.pending, empty)
    }
}
