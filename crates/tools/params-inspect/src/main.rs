//! CLI for inspecting Dutcoin network parameters
//!
//! This tool allows:
//! - Dumping the selected network's parameters as JSON
//! - Re-deriving and verifying every genesis block
//! - Checkpoint lookups and sync-progress estimates
//! - Listing peer-discovery seeds

use clap::{Parser, Subcommand};
use dutcoin_params::{
    ChainParams, GenesisBuilder, Hash256, NetworkSelector, NetworkType, SelectionConfig,
};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "params-inspect")]
#[command(about = "Dutcoin network parameter inspector", long_about = None)]
struct Cli {
    /// Use the test network
    #[arg(long, global = true)]
    testnet: bool,

    /// Use the regression-test network
    #[arg(long, global = true)]
    regtest: bool,

    /// JSON selection config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the selected parameters as JSON
    Show,

    /// Rebuild and verify the genesis block of every network
    Genesis,

    /// Look up a checkpoint
    Checkpoint {
        /// Block height
        #[arg(long)]
        height: u32,

        /// Block hash to check against the table
        #[arg(long)]
        hash: Option<Hash256>,
    },

    /// Estimate verification progress
    Progress {
        /// Transactions in the chain up to the tip
        #[arg(long)]
        chain_tx: u64,

        /// Tip block time (Unix epoch seconds)
        #[arg(long)]
        tip_time: i64,

        /// Current time, defaults to the system clock
        #[arg(long)]
        now: Option<i64>,
    },

    /// List DNS and fixed seeds
    Seeds,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SelectionConfig::from_json_file(path)?,
        None => SelectionConfig::default(),
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut selector = NetworkSelector::new();
    if cli.testnet || cli.regtest {
        selector.select_from_flags(cli.testnet, cli.regtest)?;
    } else {
        config.apply(&mut selector);
    }
    let params = selector.current();
    debug!(network = %params.network(), "parameters selected");

    match cli.command {
        Commands::Show => {
            println!("{}", serde_json::to_string_pretty(params)?);
        }
        Commands::Genesis => {
            run_genesis()?;
        }
        Commands::Checkpoint { height, hash } => {
            run_checkpoint(params, &config, height, hash);
        }
        Commands::Progress {
            chain_tx,
            tip_time,
            now,
        } => {
            let now = now.unwrap_or_else(|| chrono::Utc::now().timestamp());
            let checkpoints = params.checkpoints();
            let progress = checkpoints.guess_verification_progress(chain_tx, tip_time, now);
            println!("Verification progress: {:.4}%", progress * 100.0);
            println!(
                "Estimated chain transactions now: {}",
                checkpoints.estimated_transactions_at(now)
            );
        }
        Commands::Seeds => {
            run_seeds(params);
        }
    }

    Ok(())
}

fn run_genesis() -> anyhow::Result<()> {
    for network in NetworkType::ALL {
        let params = ChainParams::for_network(network);
        let block = GenesisBuilder::build(params.genesis_spec());
        block.verify(network, &params.genesis_hash(), &params.genesis_merkle_root())?;
        params.verify()?;

        info!("Verified {} genesis", network);
        println!("{}:", network);
        println!("  hash:        {}", block.hash);
        println!("  merkle root: {}", block.merkle_root());
        println!("  time:        {}", block.header.time);
        println!("  bits:        {:#010x}", block.header.bits);
        println!("  nonce:       {}", block.header.nonce);
    }
    Ok(())
}

fn run_checkpoint(params: &ChainParams, config: &SelectionConfig, height: u32, hash: Option<Hash256>) {
    let checkpoints = params.checkpoints();
    match checkpoints.hash_at(height) {
        Some(pinned) => println!("Checkpoint at {}: {}", height, pinned),
        None => println!("No checkpoint at {}", height),
    }

    if let Some(hash) = hash {
        let accepted = config.check_block(checkpoints, height, &hash);
        println!("Block {} at {}: {}", hash, height, if accepted { "accepted" } else { "rejected" });
    }

    if let Some(last) = checkpoints.last_checkpoint() {
        println!("Last checkpoint: {} ({})", last.height, last.hash);
    }
}

fn run_seeds(params: &ChainParams) {
    println!("DNS seeds:");
    for seed in params.dns_seeds() {
        println!("  {} ({})", seed.name, seed.host);
    }

    println!("Fixed seeds:");
    for seed in params.fixed_seeds() {
        let seen = chrono::DateTime::from_timestamp(seed.last_seen, 0)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| seed.last_seen.to_string());
        println!("  {} last seen {}", seed.addr, seen);
    }
}
