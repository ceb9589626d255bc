//! Field overrides for derived networks
//!
//! A derived network is its base network's parameters plus an explicit list
//! of [`Override`]s. Fields that no override names keep the base value, so a
//! derived network can only differ where its list says it does.

use crate::base58::Base58Prefixes;
use crate::checkpoints::CheckpointData;
use crate::genesis::GenesisBuilder;
use crate::hash::Hash256;
use crate::network::NetworkType;
use crate::params::ChainParams;
use primitive_types::U256;

/// A behaviour flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Refuse to mine without peers
    MiningRequiresPeers,
    /// Allow minimum-difficulty blocks
    AllowMinDifficultyBlocks,
    /// Consistency checks on by default
    DefaultConsistencyChecks,
    /// Relay only standard transactions
    RequireStandard,
    /// Mine on request only
    MineBlocksOnDemand,
    /// Skip proof-of-work checks
    SkipProofOfWorkCheck,
    /// Deprecated RPC `testnet` field
    TestnetToBeDeprecatedFieldRpc,
    /// Headers-first synchronisation
    HeadersFirstSyncingActive,
}

/// One field replacement
#[derive(Debug, Clone, PartialEq)]
pub enum Override {
    /// Network kind and identifier
    Network(NetworkType),
    /// Message-start magic
    MessageStart([u8; 4]),
    /// Default P2P port
    DefaultPort(u16),
    /// Alert-signing key
    AlertPubkey(Vec<u8>),
    /// Proof-of-work ceiling
    PowLimit(U256),
    /// Upgrade enforcement threshold
    EnforceBlockUpgradeMajority(u32),
    /// Outdated-block rejection threshold
    RejectBlockOutdatedMajority(u32),
    /// Upgrade signalling window
    ToCheckBlockUpgradeMajority(u32),
    /// Miner thread hint
    MinerThreads(u32),
    /// Retarget timespan (seconds)
    TargetTimespan(i64),
    /// Block spacing (seconds)
    TargetSpacing(i64),
    /// Last proof-of-work height
    LastPowBlock(u32),
    /// Maturity depth
    Maturity(u32),
    /// Masternode count drift
    MasternodeCountDrift(u32),
    /// Stake modifier upgrade height
    ModifierUpdateBlock(u32),
    /// Maximum money supply
    MaxMoneyOut(u64),
    /// Genesis block time
    GenesisTime(u32),
    /// Genesis compact difficulty
    GenesisBits(u32),
    /// Genesis nonce
    GenesisNonce(u32),
    /// Expected genesis hash
    GenesisHash(Hash256),
    /// Expected genesis merkle root
    GenesisMerkleRoot(Hash256),
    /// Drop every DNS seed
    ClearDnsSeeds,
    /// Drop every fixed seed
    ClearFixedSeeds,
    /// Base58 prefixes
    Base58(Base58Prefixes),
    /// One behaviour flag
    Flag(Flag, bool),
    /// Mixing pool transaction limit
    PoolMaxTransactions(u32),
    /// Spork-signing key (hex)
    SporkKey(String),
    /// Mixing pool placeholder address
    MasternodePoolDummyAddress(String),
    /// Masternode payment start time
    StartMasternodePayments(i64),
    /// Budget fee confirmations
    BudgetFeeConfirmations(u32),
    /// Checkpoint table
    Checkpoints(CheckpointData),
}

impl Override {
    /// Check if the override changes what the genesis block is built from
    fn touches_genesis(&self) -> bool {
        matches!(
            self,
            Override::GenesisTime(_) | Override::GenesisBits(_) | Override::GenesisNonce(_)
        )
    }
}

impl ChainParams {
    /// Apply one override in place
    pub(crate) fn apply(&mut self, change: Override) {
        let rebuild = change.touches_genesis();
        match change {
            Override::Network(network) => self.network = network,
            Override::MessageStart(magic) => self.message_start = magic,
            Override::DefaultPort(port) => self.default_port = port,
            Override::AlertPubkey(key) => self.alert_pubkey = key,
            Override::PowLimit(limit) => self.consensus.pow_limit = limit,
            Override::EnforceBlockUpgradeMajority(n) => {
                self.consensus.enforce_block_upgrade_majority = n
            }
            Override::RejectBlockOutdatedMajority(n) => {
                self.consensus.reject_block_outdated_majority = n
            }
            Override::ToCheckBlockUpgradeMajority(n) => {
                self.consensus.to_check_block_upgrade_majority = n
            }
            Override::MinerThreads(n) => self.consensus.miner_threads = n,
            Override::TargetTimespan(secs) => self.consensus.target_timespan = secs,
            Override::TargetSpacing(secs) => self.consensus.target_spacing = secs,
            Override::LastPowBlock(height) => self.consensus.last_pow_block = height,
            Override::Maturity(depth) => self.consensus.maturity = depth,
            Override::MasternodeCountDrift(n) => self.consensus.masternode_count_drift = n,
            Override::ModifierUpdateBlock(height) => self.consensus.modifier_update_block = height,
            Override::MaxMoneyOut(amount) => self.consensus.max_money_out = amount,
            Override::GenesisTime(time) => self.genesis_spec.time = time,
            Override::GenesisBits(bits) => self.genesis_spec.bits = bits,
            Override::GenesisNonce(nonce) => self.genesis_spec.nonce = nonce,
            Override::GenesisHash(hash) => self.genesis_hash = hash,
            Override::GenesisMerkleRoot(root) => self.genesis_merkle_root = root,
            Override::ClearDnsSeeds => self.dns_seeds.clear(),
            Override::ClearFixedSeeds => self.fixed_seeds.clear(),
            Override::Base58(prefixes) => self.base58 = prefixes,
            Override::Flag(flag, on) => *self.flag_mut(flag) = on,
            Override::PoolMaxTransactions(n) => self.masternode.pool_max_transactions = n,
            Override::SporkKey(key) => self.masternode.spork_key = key,
            Override::MasternodePoolDummyAddress(address) => {
                self.masternode.pool_dummy_address = address
            }
            Override::StartMasternodePayments(time) => self.masternode.start_payments = time,
            Override::BudgetFeeConfirmations(n) => self.masternode.budget_fee_confirmations = n,
            Override::Checkpoints(data) => self.checkpoints = data,
        }
        if rebuild {
            self.genesis = GenesisBuilder::build(&self.genesis_spec);
        }
    }

    /// Derive new parameters from these plus an override list, applied in order
    pub fn derive(&self, overrides: impl IntoIterator<Item = Override>) -> ChainParams {
        let mut derived = self.clone();
        for change in overrides {
            derived.apply(change);
        }
        derived
    }

    fn flag_mut(&mut self, flag: Flag) -> &mut bool {
        let flags = &mut self.flags;
        match flag {
            Flag::MiningRequiresPeers => &mut flags.mining_requires_peers,
            Flag::AllowMinDifficultyBlocks => &mut flags.allow_min_difficulty_blocks,
            Flag::DefaultConsistencyChecks => &mut flags.default_consistency_checks,
            Flag::RequireStandard => &mut flags.require_standard,
            Flag::MineBlocksOnDemand => &mut flags.mine_blocks_on_demand,
            Flag::SkipProofOfWorkCheck => &mut flags.skip_proof_of_work_check,
            Flag::TestnetToBeDeprecatedFieldRpc => &mut flags.testnet_to_be_deprecated_field_rpc,
            Flag::HeadersFirstSyncingActive => &mut flags.headers_first_syncing_active,
        }
    }
}
