//! The per-network parameter set

use crate::base58::{Base58Prefixes, Base58Type};
use crate::checkpoints::CheckpointData;
use crate::consensus::ConsensusParams;
use crate::genesis::{GenesisBlock, GenesisSpec};
use crate::hash::Hash256;
use crate::network::NetworkType;
use crate::seeds::{DnsSeed, FixedSeed};
use crate::{Error, Result};
use serde::{Serialize, Serializer};

/// Behaviour switches that differ between networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChainFlags {
    /// Refuse to mine without connected peers
    pub mining_requires_peers: bool,
    /// Allow minimum-difficulty blocks after long gaps
    pub allow_min_difficulty_blocks: bool,
    /// Run expensive consistency checks by default
    pub default_consistency_checks: bool,
    /// Relay only standard transactions
    pub require_standard: bool,
    /// Mine only when asked over RPC
    pub mine_blocks_on_demand: bool,
    /// Accept headers without checking proof of work
    pub skip_proof_of_work_check: bool,
    /// Report `testnet` in RPC output (deprecated field)
    pub testnet_to_be_deprecated_field_rpc: bool,
    /// Headers-first synchronisation
    pub headers_first_syncing_active: bool,
}

/// Masternode and budget constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasternodeParams {
    /// Maximum transactions in a mixing pool
    pub pool_max_transactions: u32,
    /// Public key that signs sporks (hex)
    pub spork_key: String,
    /// Placeholder address used by the mixing pool
    pub pool_dummy_address: String,
    /// Time masternode payments begin (Unix epoch seconds)
    pub start_payments: i64,
    /// Confirmations required for a budget finalization fee
    pub budget_fee_confirmations: u32,
}

/// Chain parameters of one network
///
/// Instances come from the registry and are shared read-only. The genesis
/// block always matches `genesis_spec`; the registry checks it against
/// the expected hash and merkle root before publishing.
#[derive(Debug, Clone, Serialize)]
pub struct ChainParams {
    pub(crate) network: NetworkType,
    #[serde(serialize_with = "hex_bytes")]
    pub(crate) message_start: [u8; 4],
    pub(crate) default_port: u16,
    pub(crate) consensus: ConsensusParams,
    #[serde(serialize_with = "hex_bytes")]
    pub(crate) alert_pubkey: Vec<u8>,
    pub(crate) base58: Base58Prefixes,
    pub(crate) dns_seeds: Vec<DnsSeed>,
    pub(crate) fixed_seeds: Vec<FixedSeed>,
    #[serde(skip)]
    pub(crate) genesis_spec: GenesisSpec,
    pub(crate) genesis: GenesisBlock,
    pub(crate) genesis_hash: Hash256,
    pub(crate) genesis_merkle_root: Hash256,
    pub(crate) flags: ChainFlags,
    pub(crate) masternode: MasternodeParams,
    pub(crate) checkpoints: CheckpointData,
}

impl ChainParams {
    /// Network kind
    pub fn network(&self) -> NetworkType {
        self.network
    }

    /// Network identifier (`main`, `test`, `regtest`, `unittest`)
    pub fn network_id(&self) -> &'static str {
        self.network.id()
    }

    /// P2P message-start magic
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    /// Default P2P port
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Consensus parameters
    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    /// Check if blocks at `height` are proof of stake
    pub fn is_proof_of_stake_height(&self, height: u32) -> bool {
        self.consensus.is_proof_of_stake_height(height)
    }

    /// Alert-signing public key
    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    /// Spork-signing public key (hex)
    pub fn spork_key(&self) -> &str {
        &self.masternode.spork_key
    }

    /// Prefix bytes for a base58 payload kind
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58.prefix(kind)
    }

    /// Every base58 prefix
    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58
    }

    /// BIP44 coin type
    pub fn coin_type(&self) -> u32 {
        self.base58.coin_type()
    }

    /// DNS seeds
    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    /// Fixed seed addresses
    pub fn fixed_seeds(&self) -> &[FixedSeed] {
        &self.fixed_seeds
    }

    /// The genesis block
    pub fn genesis(&self) -> &GenesisBlock {
        &self.genesis
    }

    /// Inputs the genesis block was built from
    pub fn genesis_spec(&self) -> &GenesisSpec {
        &self.genesis_spec
    }

    /// Expected genesis block hash
    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis_hash
    }

    /// Expected genesis merkle root
    pub fn genesis_merkle_root(&self) -> Hash256 {
        self.genesis_merkle_root
    }

    /// Behaviour flags
    pub fn flags(&self) -> &ChainFlags {
        &self.flags
    }

    /// Refuse to mine without peers
    pub fn mining_requires_peers(&self) -> bool {
        self.flags.mining_requires_peers
    }

    /// Allow minimum-difficulty blocks
    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.flags.allow_min_difficulty_blocks
    }

    /// Run consistency checks by default
    pub fn default_consistency_checks(&self) -> bool {
        self.flags.default_consistency_checks
    }

    /// Relay only standard transactions
    pub fn require_standard(&self) -> bool {
        self.flags.require_standard
    }

    /// Mine only on request
    pub fn mine_blocks_on_demand(&self) -> bool {
        self.flags.mine_blocks_on_demand
    }

    /// Skip proof-of-work checks
    pub fn skip_proof_of_work_check(&self) -> bool {
        self.flags.skip_proof_of_work_check
    }

    /// Deprecated RPC `testnet` field
    pub fn testnet_to_be_deprecated_field_rpc(&self) -> bool {
        self.flags.testnet_to_be_deprecated_field_rpc
    }

    /// Headers-first synchronisation
    pub fn headers_first_syncing_active(&self) -> bool {
        self.flags.headers_first_syncing_active
    }

    /// Masternode and budget constants
    pub fn masternode(&self) -> &MasternodeParams {
        &self.masternode
    }

    /// Maximum transactions in a mixing pool
    pub fn pool_max_transactions(&self) -> u32 {
        self.masternode.pool_max_transactions
    }

    /// Mixing pool placeholder address
    pub fn masternode_pool_dummy_address(&self) -> &str {
        &self.masternode.pool_dummy_address
    }

    /// Time masternode payments begin
    pub fn start_masternode_payments(&self) -> i64 {
        self.masternode.start_payments
    }

    /// Confirmations required for a budget fee
    pub fn budget_fee_confirmations(&self) -> u32 {
        self.masternode.budget_fee_confirmations
    }

    /// Checkpoint table
    pub fn checkpoints(&self) -> &CheckpointData {
        &self.checkpoints
    }

    /// Check the compiled-in constants against each other
    ///
    /// The rebuilt genesis must match its expected hash and merkle root,
    /// meet its own target, and be pinned as checkpoint 0.
    pub fn verify(&self) -> Result<()> {
        self.genesis
            .verify(self.network, &self.genesis_hash, &self.genesis_merkle_root)?;

        match self.checkpoints.hash_at(0) {
            Some(anchor) if anchor == self.genesis.hash => Ok(()),
            anchor => Err(Error::GenesisMismatch {
                network: self.network,
                field: "checkpoint 0",
                expected: self.genesis.hash.to_hex(),
                computed: anchor.map_or_else(|| "none".to_string(), |h| h.to_hex()),
            }),
        }
    }
}

fn hex_bytes<S: Serializer, T: AsRef<[u8]>>(bytes: &T, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
