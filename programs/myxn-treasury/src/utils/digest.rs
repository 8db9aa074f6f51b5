//! Reconciliation digest for a flushed distribution cycle.
//!
//! Off-chain indexers match `FeesDistributed` events against their own transfer
//! records with this digest. Amounts are hashed as native-endian `u64`s (little
//! endian on SBF and every supported host).

use anchor_lang::prelude::Pubkey;
use bytemuck::{Pod, Zeroable};

use crate::accounting::fee_split::PendingCollection;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct CycleHeader {
    cycle: u64,
    total_collected: u64,
    transaction_count: u64,
    first_collected_at: i64,
}

pub fn distribution_digest(ledger: &Pubkey, cycle: u64, flushed: &PendingCollection) -> [u8; 32] {
    let header = CycleHeader {
        cycle,
        total_collected: flushed.total_collected,
        transaction_count: flushed.transaction_count,
        first_collected_at: flushed.first_collected_at.unwrap_or(0),
    };
    let amounts: Vec<u64> = flushed.per_bucket.iter().map(|s| s.amount).collect();

    let mut hasher = blake3::Hasher::new();
    hasher.update(ledger.as_ref());
    hasher.update(bytemuck::bytes_of(&header));
    for share in &flushed.per_bucket {
        hasher.update(share.name.as_bytes());
        hasher.update(&[0u8]);
    }
    hasher.update(bytemuck::cast_slice(&amounts));
    *hasher.finalize().as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounting::fee_split::{FeeBucketConfig, FeeSplitAccountant};

    fn flushed(amount: u64) -> PendingCollection {
        let mut acct = FeeSplitAccountant::new(FeeBucketConfig::default_split()).unwrap();
        acct.record_collection(amount, 3, 1_700_000_000).unwrap();
        acct.flush()
    }

    #[test]
    fn digest_is_deterministic() {
        let ledger = Pubkey::new_unique();
        let a = distribution_digest(&ledger, 7, &flushed(1_000_003));
        let b = distribution_digest(&ledger, 7, &flushed(1_000_003));
        assert_eq!(a, b);
    }

    #[test]
    fn digest_binds_cycle_ledger_and_amounts() {
        let ledger = Pubkey::new_unique();
        let base = distribution_digest(&ledger, 7, &flushed(1_000_003));
        assert_ne!(base, distribution_digest(&ledger, 8, &flushed(1_000_003)));
        assert_ne!(base, distribution_digest(&ledger, 7, &flushed(1_000_004)));
        assert_ne!(
            base,
            distribution_digest(&Pubkey::new_unique(), 7, &flushed(1_000_003))
        );
    }
}
