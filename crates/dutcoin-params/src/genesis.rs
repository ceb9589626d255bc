//! Genesis block construction and self-check
//!
//! Every network's first block is rebuilt from a [`GenesisSpec`] and compared
//! against the hash and merkle root compiled into the registry. A mismatch
//! means the binary itself is broken.

use crate::consensus::compact_to_target;
use crate::hash::{hex_array, Hash256};
use crate::network::NetworkType;
use crate::primitives::{
    merkle_root, BlockHeader, OutPoint, Script, Transaction, TxIn, TxOut, OP_CHECKSIG,
};
use crate::{Error, Result};
use serde::Serialize;

/// Headline embedded in the coinbase of every Dutcoin genesis block
pub const GENESIS_TIMESTAMP: &str =
    "The Economic Times: Banning cryptocurrencies in India not the solution: Nasscom";

/// Uncompressed key the genesis output pays to
pub const GENESIS_PUBKEY: [u8; 65] = hex_array(
    "04f92d9ba234cd41b3d2366756d4cf218fd9dae1ba7eff4a524c0752fb7f52802745f5eb0170cb0c170297d6f0753594f4102aff4a1a1e1c0ebc1203f4c27e1eba",
);

/// Everything needed to rebuild a genesis block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisSpec {
    /// Text pushed into the coinbase scriptSig
    pub timestamp: String,
    /// First scriptSig push (historically the Bitcoin genesis nBits)
    pub script_sig_bits: i64,
    /// Second scriptSig push, encoded as a script number
    pub script_sig_extra: i64,
    /// Payout key, followed by `OP_CHECKSIG` in the output script
    pub payout_pubkey: [u8; 65],
    /// Output value in base units
    pub output_value: i64,
    /// Block version
    pub version: i32,
    /// Block time (Unix epoch seconds)
    pub time: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Proof-of-work nonce
    pub nonce: u32,
}

impl GenesisSpec {
    /// Mainnet genesis inputs
    pub fn mainnet() -> Self {
        Self {
            timestamp: GENESIS_TIMESTAMP.to_string(),
            script_sig_bits: 486_604_799,
            script_sig_extra: 4,
            payout_pubkey: GENESIS_PUBKEY,
            output_value: 0,
            version: 1,
            time: 1_564_478_760,
            bits: 0x1e0f_fff0,
            nonce: 1_463_428,
        }
    }
}

/// A constructed genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisBlock {
    /// Block header
    pub header: BlockHeader,
    /// The coinbase, the block's only transaction
    pub coinbase: Transaction,
    /// Header hash
    pub hash: Hash256,
}

impl GenesisBlock {
    /// Merkle root committed in the header
    pub fn merkle_root(&self) -> Hash256 {
        self.header.merkle_root
    }

    /// Compare against the compiled-in constants and check proof of work
    pub fn verify(
        &self,
        network: NetworkType,
        expected_hash: &Hash256,
        expected_merkle_root: &Hash256,
    ) -> Result<()> {
        if self.header.merkle_root != *expected_merkle_root {
            return Err(Error::GenesisMismatch {
                network,
                field: "merkle root",
                expected: expected_merkle_root.to_hex(),
                computed: self.header.merkle_root.to_hex(),
            });
        }
        if self.hash != *expected_hash {
            return Err(Error::GenesisMismatch {
                network,
                field: "hash",
                expected: expected_hash.to_hex(),
                computed: self.hash.to_hex(),
            });
        }
        match compact_to_target(self.header.bits) {
            Some(target) if self.hash.to_u256() <= target => Ok(()),
            _ => Err(Error::GenesisProofOfWork(network)),
        }
    }
}

/// Builds genesis blocks from a [`GenesisSpec`]
pub struct GenesisBuilder;

impl GenesisBuilder {
    /// Build the single-transaction genesis block
    pub fn build(spec: &GenesisSpec) -> GenesisBlock {
        let coinbase = Self::coinbase(spec);
        let header = BlockHeader {
            version: spec.version,
            prev_block: Hash256::ZERO,
            merkle_root: merkle_root(&[coinbase.txid()]),
            time: spec.time,
            bits: spec.bits,
            nonce: spec.nonce,
        };
        GenesisBlock {
            hash: header.hash(),
            header,
            coinbase,
        }
    }

    /// The genesis coinbase transaction
    pub fn coinbase(spec: &GenesisSpec) -> Transaction {
        let script_sig = Script::new()
            .push_int(spec.script_sig_bits)
            .push_script_num(spec.script_sig_extra)
            .push_data(spec.timestamp.as_bytes());
        let script_pubkey = Script::new()
            .push_data(&spec.payout_pubkey)
            .push_opcode(OP_CHECKSIG);

        Transaction {
            version: 1,
            inputs: vec![TxIn {
                prevout: OutPoint::null(),
                script_sig,
                sequence: u32::MAX,
            }],
            outputs: vec![TxOut {
                value: spec.output_value,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MERKLE: &str = "ac4152dc4e30c16213027884498dcec6784ef72281c40651ac4b19e004b4829f";
    const MAIN_HASH: &str = "0000076cfaf6a63399406290aebb8064d7fe402ee26328c6b08169002133f952";

    #[test]
    fn test_coinbase_layout() {
        let tx = GenesisBuilder::coinbase(&GenesisSpec::mainnet());
        assert!(tx.is_coinbase());
        assert_eq!(tx.serialize().len(), 215);

        let script_sig = tx.inputs[0].script_sig.as_bytes();
        assert_eq!(script_sig.len(), 88);
        assert_eq!(&script_sig[..9], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x4c, 79]);

        let script_pubkey = tx.outputs[0].script_pubkey.as_bytes();
        assert_eq!(script_pubkey.len(), 67);
        assert_eq!(script_pubkey[0], 65);
        assert_eq!(script_pubkey[66], OP_CHECKSIG);
    }

    #[test]
    fn test_mainnet_genesis() {
        let block = GenesisBuilder::build(&GenesisSpec::mainnet());
        assert_eq!(block.merkle_root().to_hex(), MERKLE);
        assert_eq!(block.hash.to_hex(), MAIN_HASH);
        block
            .verify(
                NetworkType::Main,
                &Hash256::from_hex(MAIN_HASH).unwrap(),
                &Hash256::from_hex(MERKLE).unwrap(),
            )
            .unwrap();
    }

    #[test]
    fn test_build_is_deterministic() {
        let spec = GenesisSpec::mainnet();
        assert_eq!(GenesisBuilder::build(&spec), GenesisBuilder::build(&spec));
    }

    #[test]
    fn test_nonce_changes_hash_only() {
        let mut spec = GenesisSpec::mainnet();
        spec.nonce += 1;
        let block = GenesisBuilder::build(&spec);
        assert_eq!(block.merkle_root().to_hex(), MERKLE);

        let err = block
            .verify(
                NetworkType::Main,
                &Hash256::from_hex(MAIN_HASH).unwrap(),
                &Hash256::from_hex(MERKLE).unwrap(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::GenesisMismatch { field: "hash", .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_timestamp_changes_merkle_root() {
        let mut spec = GenesisSpec::mainnet();
        spec.timestamp.push('!');
        let block = GenesisBuilder::build(&spec);
        let err = block
            .verify(
                NetworkType::Main,
                &block.hash,
                &Hash256::from_hex(MERKLE).unwrap(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::GenesisMismatch { field: "merkle root", .. }));
    }

    #[test]
    fn test_proof_of_work_enforced() {
        let mut spec = GenesisSpec::mainnet();
        spec.nonce = 0;
        let block = GenesisBuilder::build(&spec);
        // matching constants are not enough without the work
        let err = block
            .verify(NetworkType::Main, &block.hash, &block.merkle_root())
            .unwrap_err();
        assert!(matches!(err, Error::GenesisProofOfWork(NetworkType::Main)));
    }
}
