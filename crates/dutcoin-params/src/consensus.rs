//! Consensus parameters for Dutcoin

use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Base units per coin
pub const COIN: u64 = 100_000_000;

/// Consensus parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    /// Highest permitted proof-of-work target
    pub pow_limit: U256,
    /// Deepest reorganization the node accepts
    pub max_reorganization_depth: u32,
    /// Blocks in the window that must signal before a new version is enforced
    pub enforce_block_upgrade_majority: u32,
    /// Blocks in the window that must signal before outdated blocks are rejected
    pub reject_block_outdated_majority: u32,
    /// Size of the upgrade signalling window
    pub to_check_block_upgrade_majority: u32,
    /// Miner thread hint (0 = one per core)
    pub miner_threads: u32,
    /// Difficulty retarget timespan (seconds)
    pub target_timespan: i64,
    /// Target block spacing (seconds)
    pub target_spacing: i64,
    /// Coinbase and coinstake maturity (blocks)
    pub maturity: u32,
    /// Tolerated masternode count drift
    pub masternode_count_drift: u32,
    /// Maximum money supply (base units)
    pub max_money_out: u64,
    /// Last height mined with proof of work
    pub last_pow_block: u32,
    /// Height of the stake modifier upgrade
    pub modifier_update_block: u32,
}

impl ConsensusParams {
    /// Create consensus params for mainnet
    pub fn mainnet() -> Self {
        Self {
            pow_limit: U256::MAX >> 1,
            max_reorganization_depth: 100,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 0,
            target_timespan: 24 * 60 * 60, // 1 day
            target_spacing: 60,
            maturity: 20,
            masternode_count_drift: 20,
            max_money_out: 760_000_000 * COIN,
            last_pow_block: 1000,
            modifier_update_block: 1,
        }
    }

    /// Check if blocks at `height` are minted by proof of stake
    pub fn is_proof_of_stake_height(&self, height: u32) -> bool {
        height > self.last_pow_block
    }

    /// Check if amount is valid (within max supply)
    pub fn is_valid_amount(&self, amount: u64) -> bool {
        amount <= self.max_money_out
    }

    /// Compact encoding of the proof-of-work ceiling
    pub fn pow_limit_compact(&self) -> u32 {
        target_to_compact(self.pow_limit)
    }
}

/// Decode compact difficulty bits into a 256-bit target
///
/// Returns `None` when the encoding has its sign bit set on a non-zero
/// mantissa or when the target does not fit in 256 bits.
pub fn compact_to_target(bits: u32) -> Option<U256> {
    let size = bits >> 24;
    let word = bits & 0x007f_ffff;

    if word == 0 {
        return Some(U256::zero());
    }
    if bits & 0x0080_0000 != 0 {
        return None;
    }
    if size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32) {
        return None;
    }

    let target = if size <= 3 {
        U256::from(word >> (8 * (3 - size)))
    } else {
        U256::from(word) << (8 * (size - 3) as usize)
    };
    Some(target)
}

/// Encode a 256-bit target as compact difficulty bits
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size - 3))).low_u64() as u32
    };

    // keep the mantissa positive
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | ((size as u32) << 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_consensus() {
        let params = ConsensusParams::mainnet();
        assert_eq!(params.target_timespan, 86_400);
        assert_eq!(params.target_spacing, 60);
        assert_eq!(params.last_pow_block, 1000);
        assert_eq!(params.max_money_out, 76_000_000_000_000_000);
    }

    #[test]
    fn test_proof_of_stake_boundary() {
        let params = ConsensusParams::mainnet();
        assert!(!params.is_proof_of_stake_height(1000));
        assert!(params.is_proof_of_stake_height(1001));
    }

    #[test]
    fn test_valid_amount() {
        let params = ConsensusParams::mainnet();
        assert!(params.is_valid_amount(0));
        assert!(params.is_valid_amount(params.max_money_out));
        assert!(!params.is_valid_amount(params.max_money_out + 1));
    }

    #[test]
    fn test_pow_limit_compact() {
        assert_eq!(ConsensusParams::mainnet().pow_limit_compact(), 0x207f_ffff);
    }

    #[test]
    fn test_compact_decoding() {
        let target = compact_to_target(0x1e0f_fff0).unwrap();
        assert_eq!(target, U256::from(0x0f_fff0u32) << (8 * 27usize));

        let regtest = compact_to_target(0x207f_ffff).unwrap();
        assert_eq!(regtest, U256::from(0x7f_ffffu32) << (8 * 29usize));

        assert_eq!(compact_to_target(0x0312_3456).unwrap(), U256::from(0x12_3456u32));
        assert_eq!(compact_to_target(0x0112_3456).unwrap(), U256::from(0x12u32));
        assert_eq!(compact_to_target(0).unwrap(), U256::zero());
    }

    #[test]
    fn test_compact_rejects_negative_and_overflow() {
        assert!(compact_to_target(0x04923456).is_none());
        assert!(compact_to_target(0xff12_3456).is_none());
        // a zero mantissa is never negative
        assert_eq!(compact_to_target(0x0480_0000).unwrap(), U256::zero());
    }

    #[test]
    fn test_compact_encoding() {
        assert_eq!(target_to_compact(U256::from(0x12_3456u32)), 0x0312_3456);
        assert_eq!(target_to_compact(U256::from(0x80u32)), 0x0200_8000);
        assert_eq!(target_to_compact(U256::zero()), 0);
        let target = compact_to_target(0x1e0f_fff0).unwrap();
        assert_eq!(target_to_compact(target), 0x1e0f_fff0);
    }
}
