//! The four network parameter sets
//!
//! Main is written out in full. Testnet derives from Main, Regtest from
//! Testnet and UnitTest from Main, each through its own override list. Every
//! set is built once on first use and checked before it is handed out.

use crate::base58::Base58Prefixes;
use crate::checkpoints::CheckpointData;
use crate::consensus::{ConsensusParams, COIN};
use crate::genesis::{GenesisBuilder, GenesisSpec};
use crate::hash::{hex_array, Hash256};
use crate::network::NetworkType;
use crate::overrides::{Flag, Override};
use crate::params::{ChainFlags, ChainParams, MasternodeParams};
use crate::seeds::{convert_seed6, DnsSeed, MAINNET_SEEDS};
use crate::Result;
use once_cell::sync::Lazy;
use primitive_types::U256;

/// Merkle root shared by every network's genesis block
pub const GENESIS_MERKLE_ROOT: Hash256 =
    Hash256::from_hex_const("ac4152dc4e30c16213027884498dcec6784ef72281c40651ac4b19e004b4829f");

/// Mainnet genesis hash
pub const MAIN_GENESIS_HASH: Hash256 =
    Hash256::from_hex_const("0000076cfaf6a63399406290aebb8064d7fe402ee26328c6b08169002133f952");

/// Testnet genesis hash
pub const TESTNET_GENESIS_HASH: Hash256 =
    Hash256::from_hex_const("000004de3d85b7009ab8b09fed0664d55a726cb41bbd13999e71b630b47db29d");

/// Regtest genesis hash
pub const REGTEST_GENESIS_HASH: Hash256 =
    Hash256::from_hex_const("22f3fc1636a4b51212e90f1142c89817c8e8b713426f7fa4b7d89b57df34fce2");

const MAIN_ALERT_KEY: [u8; 65] = hex_array(
    "04e669fedfb9522bda86f394c3c3be4e976cad1d98ca53173ead82aba028f64e2b12fc1cc736adb16ae1fa498081ad3e47bc82e52036cfccf31ceb22da71d3d836",
);

const TESTNET_ALERT_KEY: [u8; 65] = hex_array(
    "04893270300589d577a2287fe8e077aa2734fef19ae4230ad1d2b4401b01ef5a6ac757c294e54df6b2a3545c8065147c2342007883a643d862e8069a879bd89344",
);

const MAIN_SPORK_KEY: &str = "0412795bbc908fc686d4e6625f75023b22ba54e21f9461030ee166344786954903a9d8d07b68f654c98094f236b257d0cfd5f8080b3367020b660a796e6adf94a1";

const TESTNET_SPORK_KEY: &str = "047570bdf4ddbae29f64744a520000450996ecddc7d784c7129bf4411d68d2c74c1db2144b34d051f972b97a7b113faabe466fc4becdd1248b98eb2d2d6c517715";

/// Delay between genesis and the first masternode payment
const MASTERNODE_PAYMENT_DELAY: i64 = 24 * 60 * 60;

const TESTNET_GENESIS_TIME: u32 = 1_564_478_820;

static MAIN: Lazy<ChainParams> = Lazy::new(|| construct(main_draft()));

static TESTNET: Lazy<ChainParams> = Lazy::new(|| construct(testnet_draft()));

static REGTEST: Lazy<ChainParams> =
    Lazy::new(|| construct(testnet_draft().derive(regtest_overrides())));

static UNITTEST: Lazy<ChainParams> =
    Lazy::new(|| construct(main_draft().derive(unittest_overrides())));

impl ChainParams {
    /// Parameters of `network`
    ///
    /// Built and checked on first use; a broken build panics here.
    pub fn for_network(network: NetworkType) -> &'static ChainParams {
        match network {
            NetworkType::Main => &MAIN,
            NetworkType::Testnet => &TESTNET,
            NetworkType::Regtest => &REGTEST,
            NetworkType::UnitTest => &UNITTEST,
        }
    }
}

/// Parameters for a network identifier such as `"test"`
pub fn params_for_id(id: &str) -> Result<&'static ChainParams> {
    Ok(ChainParams::for_network(id.parse()?))
}

/// Network a variant is derived from, `None` for Main
pub fn base_of(network: NetworkType) -> Option<NetworkType> {
    match network {
        NetworkType::Main => None,
        NetworkType::Testnet | NetworkType::UnitTest => Some(NetworkType::Main),
        NetworkType::Regtest => Some(NetworkType::Testnet),
    }
}

/// Overrides a variant applies on top of its base
pub fn overrides(network: NetworkType) -> Vec<Override> {
    match network {
        NetworkType::Main => Vec::new(),
        NetworkType::Testnet => testnet_overrides(),
        NetworkType::Regtest => regtest_overrides(),
        NetworkType::UnitTest => unittest_overrides(),
    }
}

/// Check a draft and publish it, or abort the process
fn construct(params: ChainParams) -> ChainParams {
    if let Err(err) = params.verify() {
        tracing::error!(
            network = %params.network(),
            category = %err.category(),
            "refusing to start with inconsistent chain parameters: {err}"
        );
        panic!("chain parameters for {} are inconsistent: {err}", params.network());
    }
    tracing::debug!(
        network = %params.network(),
        genesis = %params.genesis().hash,
        merkle_root = %params.genesis().merkle_root(),
        "constructed chain parameters"
    );
    params
}

pub(crate) fn main_draft() -> ChainParams {
    let genesis_spec = GenesisSpec::mainnet();
    let genesis = GenesisBuilder::build(&genesis_spec);
    let now = chrono::Utc::now().timestamp();

    ChainParams {
        network: NetworkType::Main,
        message_start: *b"DUTC",
        default_port: 31719,
        consensus: ConsensusParams::mainnet(),
        alert_pubkey: MAIN_ALERT_KEY.to_vec(),
        base58: Base58Prefixes::mainnet(),
        dns_seeds: ["exdut.com", "62.151.182.181", "62.151.178.33", "74.208.183.29"]
            .into_iter()
            .map(DnsSeed::new)
            .collect(),
        fixed_seeds: convert_seed6(&MAINNET_SEEDS, now, &mut rand::thread_rng()),
        masternode: MasternodeParams {
            pool_max_transactions: 3,
            spork_key: MAIN_SPORK_KEY.to_string(),
            pool_dummy_address: "D9L54eBuv2YfTQYwfRuY2ESPvZ4eTuKdmq".to_string(),
            start_payments: i64::from(genesis_spec.time) + MASTERNODE_PAYMENT_DELAY,
            budget_fee_confirmations: 6,
        },
        genesis_spec,
        genesis,
        genesis_hash: MAIN_GENESIS_HASH,
        genesis_merkle_root: GENESIS_MERKLE_ROOT,
        flags: ChainFlags {
            mining_requires_peers: true,
            require_standard: true,
            ..ChainFlags::default()
        },
        checkpoints: main_checkpoints(),
    }
}

fn testnet_draft() -> ChainParams {
    main_draft().derive(testnet_overrides())
}

fn main_checkpoints() -> CheckpointData {
    CheckpointData::new(
        &[
            (0, MAIN_GENESIS_HASH),
            (
                2,
                Hash256::from_hex_const(
                    "3c2dd6ea48e899c66dcfae2de120dac7b1ad299b5f5a4c7a3b7880e034f5471a",
                ),
            ),
            (
                1000,
                Hash256::from_hex_const(
                    "0000004e1b876678b6def9d7405d49cc32c64eb5a7a150ec0a2fffcc3488892f",
                ),
            ),
            (
                1001,
                Hash256::from_hex_const(
                    "e1d455e53c079d4ad3c55e357abf4e9694a5764aa839ea98529146213c375f3c",
                ),
            ),
            (
                2000,
                Hash256::from_hex_const(
                    "07e57768b9f91048a25ed580fc45cebea594f6020bd654c908a77a6a3281db6d",
                ),
            ),
            (
                3000,
                Hash256::from_hex_const(
                    "a3d7d80ffd4f87edc6566428dd55806711ff7df924be16d6d6247e9a6656b8cc",
                ),
            ),
        ],
        1_565_134_237,
        5004,
        2000.0,
    )
}

fn testnet_overrides() -> Vec<Override> {
    vec![
        Override::Network(NetworkType::Testnet),
        Override::MessageStart(*b"dutc"),
        Override::AlertPubkey(TESTNET_ALERT_KEY.to_vec()),
        Override::DefaultPort(31720),
        Override::EnforceBlockUpgradeMajority(51),
        Override::RejectBlockOutdatedMajority(75),
        Override::ToCheckBlockUpgradeMajority(100),
        Override::MinerThreads(0),
        Override::TargetTimespan(60),
        Override::TargetSpacing(2 * 60),
        Override::LastPowBlock(200),
        Override::Maturity(15),
        Override::MasternodeCountDrift(4),
        Override::ModifierUpdateBlock(1),
        Override::MaxMoneyOut(760_000_000 * COIN),
        Override::GenesisTime(TESTNET_GENESIS_TIME),
        Override::GenesisNonce(1_545_743),
        Override::GenesisHash(TESTNET_GENESIS_HASH),
        Override::GenesisMerkleRoot(GENESIS_MERKLE_ROOT),
        Override::ClearFixedSeeds,
        Override::ClearDnsSeeds,
        Override::Base58(Base58Prefixes {
            pubkey_address: [90],
            script_address: [110],
            secret_key: [105],
            ext_public_key: [0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: [0x04, 0x35, 0x83, 0x94],
            ..Base58Prefixes::mainnet()
        }),
        Override::Flag(Flag::MiningRequiresPeers, true),
        Override::Flag(Flag::AllowMinDifficultyBlocks, false),
        Override::Flag(Flag::DefaultConsistencyChecks, false),
        Override::Flag(Flag::RequireStandard, false),
        Override::Flag(Flag::MineBlocksOnDemand, false),
        Override::Flag(Flag::TestnetToBeDeprecatedFieldRpc, true),
        Override::PoolMaxTransactions(2),
        Override::SporkKey(TESTNET_SPORK_KEY.to_string()),
        Override::MasternodePoolDummyAddress("dVKARSXCe8MxJ49CAxTBq5UAezmmowQ7pg".to_string()),
        Override::StartMasternodePayments(
            i64::from(TESTNET_GENESIS_TIME) + MASTERNODE_PAYMENT_DELAY,
        ),
        Override::BudgetFeeConfirmations(3),
        Override::Checkpoints(CheckpointData::new(
            &[(0, TESTNET_GENESIS_HASH)],
            i64::from(TESTNET_GENESIS_TIME),
            0,
            250.0,
        )),
    ]
}

fn regtest_overrides() -> Vec<Override> {
    const GENESIS_TIME: u32 = 1_564_478_880;
    vec![
        Override::Network(NetworkType::Regtest),
        Override::MessageStart(*b"regt"),
        Override::DefaultPort(31721),
        Override::EnforceBlockUpgradeMajority(750),
        Override::RejectBlockOutdatedMajority(950),
        Override::ToCheckBlockUpgradeMajority(1000),
        Override::MinerThreads(1),
        Override::TargetTimespan(24 * 60 * 60),
        Override::TargetSpacing(60),
        Override::PowLimit(U256::MAX >> 1),
        Override::GenesisTime(GENESIS_TIME),
        Override::GenesisBits(0x207f_ffff),
        Override::GenesisNonce(12),
        Override::GenesisHash(REGTEST_GENESIS_HASH),
        Override::GenesisMerkleRoot(GENESIS_MERKLE_ROOT),
        Override::ClearFixedSeeds,
        Override::ClearDnsSeeds,
        Override::Base58(Base58Prefixes {
            pubkey_address: [60],
            script_address: [125],
            secret_key: [120],
            ext_public_key: [0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: [0x04, 0x35, 0x83, 0x94],
            ..Base58Prefixes::mainnet()
        }),
        Override::Flag(Flag::MiningRequiresPeers, false),
        Override::Flag(Flag::AllowMinDifficultyBlocks, true),
        Override::Flag(Flag::DefaultConsistencyChecks, true),
        Override::Flag(Flag::RequireStandard, false),
        Override::Flag(Flag::MineBlocksOnDemand, true),
        Override::Flag(Flag::TestnetToBeDeprecatedFieldRpc, false),
        Override::Checkpoints(CheckpointData::new(
            &[(0, REGTEST_GENESIS_HASH)],
            i64::from(GENESIS_TIME),
            0,
            100.0,
        )),
    ]
}

fn unittest_overrides() -> Vec<Override> {
    vec![
        Override::Network(NetworkType::UnitTest),
        Override::MessageStart(*b"utst"),
        Override::DefaultPort(22223),
        Override::ClearFixedSeeds,
        Override::ClearDnsSeeds,
        Override::Flag(Flag::MiningRequiresPeers, false),
        Override::Flag(Flag::DefaultConsistencyChecks, true),
        Override::Flag(Flag::AllowMinDifficultyBlocks, false),
        Override::Flag(Flag::MineBlocksOnDemand, true),
    ]
}
