//! Blockchain checkpoints

use crate::hash::Hash256;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Seconds per day, the unit of the transaction-rate estimate
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Relative cost of verifying a transaction past the last checkpoint
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

/// A blockchain checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Block height
    pub height: u32,
    /// Block hash
    pub hash: Hash256,
}

/// Checkpoint table with its progress-estimation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u32, Hash256>,
    time_last_checkpoint: i64,
    transactions_last_checkpoint: u64,
    transactions_per_day: f64,
}

impl CheckpointData {
    /// Create a checkpoint table
    pub fn new(
        checkpoints: &[(u32, Hash256)],
        time_last_checkpoint: i64,
        transactions_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Self {
        Self {
            checkpoints: checkpoints.iter().copied().collect(),
            time_last_checkpoint,
            transactions_last_checkpoint,
            transactions_per_day,
        }
    }

    /// Hash pinned at `height`, if any
    pub fn hash_at(&self, height: u32) -> Option<Hash256> {
        self.checkpoints.get(&height).copied()
    }

    /// Check a block against the table
    ///
    /// Heights without a checkpoint always pass.
    pub fn check_block(&self, height: u32, hash: &Hash256) -> bool {
        self.hash_at(height).map_or(true, |pinned| pinned == *hash)
    }

    /// All checkpoints in increasing height order
    pub fn checkpoints(&self) -> impl DoubleEndedIterator<Item = Checkpoint> + '_ {
        self.checkpoints
            .iter()
            .map(|(&height, &hash)| Checkpoint { height, hash })
    }

    /// Get checkpoint count
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Highest checkpoint
    pub fn last_checkpoint(&self) -> Option<Checkpoint> {
        self.checkpoints
            .iter()
            .next_back()
            .map(|(&height, &hash)| Checkpoint { height, hash })
    }

    /// Height of the highest checkpoint, 0 for an empty table
    pub fn total_blocks_estimate(&self) -> u32 {
        self.last_checkpoint().map_or(0, |cp| cp.height)
    }

    /// Highest checkpoint whose block the caller already knows
    pub fn last_checkpoint_known<F>(&self, is_known: F) -> Option<Checkpoint>
    where
        F: Fn(&Hash256) -> bool,
    {
        self.checkpoints()
            .rev()
            .find(|checkpoint| is_known(&checkpoint.hash))
    }

    /// UNIX time of the last checkpoint block
    pub fn time_last_checkpoint(&self) -> i64 {
        self.time_last_checkpoint
    }

    /// Transactions from genesis up to the last checkpoint
    pub fn transactions_last_checkpoint(&self) -> u64 {
        self.transactions_last_checkpoint
    }

    /// Estimated transactions per day after the last checkpoint
    pub fn transactions_per_day(&self) -> f64 {
        self.transactions_per_day
    }

    /// Projected chain transaction count at `now`
    pub fn estimated_transactions_at(&self, now: i64) -> u64 {
        let elapsed = now.saturating_sub(self.time_last_checkpoint).max(0) as f64;
        let projected = elapsed / SECONDS_PER_DAY * self.transactions_per_day;
        self.transactions_last_checkpoint
            .saturating_add(projected as u64)
    }

    /// Estimate the fraction of total verification work already done
    ///
    /// `chain_tx` is the transaction count up to the tip, `tip_time` the tip's
    /// block time. Transactions below the last checkpoint skip signature
    /// checks and weigh 1; later ones weigh [`SIGCHECK_VERIFICATION_FACTOR`].
    pub fn guess_verification_progress(&self, chain_tx: u64, tip_time: i64, now: i64) -> f64 {
        let checkpoint_tx = self.transactions_last_checkpoint;
        let per_day = self.transactions_per_day.max(0.0);

        let (before, after) = if chain_tx <= checkpoint_tx {
            let cheap_after = (checkpoint_tx - chain_tx) as f64;
            let elapsed = now.saturating_sub(self.time_last_checkpoint).max(0);
            let days = elapsed as f64 / SECONDS_PER_DAY;
            (
                chain_tx as f64,
                cheap_after + days * per_day * SIGCHECK_VERIFICATION_FACTOR,
            )
        } else {
            let expensive_before = (chain_tx - checkpoint_tx) as f64;
            let days = now.saturating_sub(tip_time).max(0) as f64 / SECONDS_PER_DAY;
            (
                checkpoint_tx as f64 + expensive_before * SIGCHECK_VERIFICATION_FACTOR,
                days * per_day * SIGCHECK_VERIFICATION_FACTOR,
            )
        };

        if before <= 0.0 {
            return 0.0;
        }
        (1.0 / (1.0 + after / before)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(byte: u8) -> Hash256 {
        Hash256::from_bytes([byte; 32])
    }

    fn sample() -> CheckpointData {
        CheckpointData::new(&[(0, hash(0)), (2, hash(2)), (1000, hash(10))], 1_000_000, 5000, 2000.0)
    }

    #[test]
    fn test_hash_at() {
        let data = sample();
        assert_eq!(data.hash_at(2), Some(hash(2)));
        assert_eq!(data.hash_at(3), None);
    }

    #[test]
    fn test_check_block() {
        let data = sample();
        assert!(data.check_block(2, &hash(2)));
        assert!(!data.check_block(2, &hash(3)));
        // no checkpoint at this height
        assert!(data.check_block(3, &hash(9)));
    }

    #[test]
    fn test_sorted_regardless_of_input_order() {
        let data = CheckpointData::new(&[(1000, hash(10)), (0, hash(0))], 0, 0, 0.0);
        let heights: Vec<u32> = data.checkpoints().map(|cp| cp.height).collect();
        assert_eq!(heights, vec![0, 1000]);
        assert_eq!(data.total_blocks_estimate(), 1000);
    }

    #[test]
    fn test_last_checkpoint_known() {
        let data = sample();
        let known = data.last_checkpoint_known(|h| *h == hash(0) || *h == hash(2));
        assert_eq!(known.map(|cp| cp.height), Some(2));
        assert!(data.last_checkpoint_known(|_| false).is_none());
    }

    #[test]
    fn test_empty_table() {
        let data = CheckpointData::new(&[], 0, 0, 0.0);
        assert!(data.is_empty());
        assert_eq!(data.total_blocks_estimate(), 0);
        assert!(data.last_checkpoint().is_none());
    }

    #[test]
    fn test_progress_before_checkpoint() {
        let data = sample();
        // at the checkpoint time itself only the cheap remainder is left
        let progress = data.guess_verification_progress(2500, 0, 1_000_000);
        assert!((progress - 0.5).abs() < 1e-12);
        assert_eq!(data.guess_verification_progress(0, 0, 2_000_000), 0.0);
    }

    #[test]
    fn test_progress_after_checkpoint() {
        let data = sample();
        // one day behind: 2000 tx/day * 5
        let progress = data.guess_verification_progress(6000, 1_000_000, 1_086_400);
        let before = 5000.0 + 1000.0 * 5.0;
        let expected = before / (before + 10_000.0);
        assert!((progress - expected).abs() < 1e-12);

        // caught up with the present
        assert_eq!(data.guess_verification_progress(6000, 1_086_400, 1_086_400), 1.0);
    }

    #[test]
    fn test_estimated_transactions() {
        let data = sample();
        assert_eq!(data.estimated_transactions_at(1_000_000), 5000);
        assert_eq!(data.estimated_transactions_at(1_086_400), 7000);
        assert_eq!(data.estimated_transactions_at(0), 5000);
    }

    #[test]
    fn test_extreme_times() {
        let data = sample();
        for (tip_time, now) in [(i64::MIN, 0), (0, i64::MIN), (i64::MIN, i64::MAX), (i64::MAX, i64::MIN)] {
            for chain_tx in [0, 2500, 10_000, u64::MAX] {
                let progress = data.guess_verification_progress(chain_tx, tip_time, now);
                assert!((0.0..=1.0).contains(&progress), "{chain_tx} {tip_time} {now}");
            }
        }
        assert_eq!(data.estimated_transactions_at(i64::MIN), 5000);
        assert!(data.estimated_transactions_at(i64::MAX) > 5000);
    }
}
