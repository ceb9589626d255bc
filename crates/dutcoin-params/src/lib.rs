//! Dutcoin network parameters
//!
//! This crate provides the consensus constants, genesis blocks, checkpoint
//! tables and peer-discovery seeds of the Dutcoin main, test, regression-test
//! and unit-test networks, and the selection of the one set a node runs with.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod base58;
pub mod checkpoints;
pub mod config;
pub mod consensus;
mod error;
pub mod genesis;
pub mod hash;
pub mod network;
pub mod overrides;
pub mod params;
pub mod primitives;
pub mod registry;
pub mod seeds;
pub mod selector;

pub use base58::{Base58Prefixes, Base58Type};
pub use checkpoints::{Checkpoint, CheckpointData};
pub use config::SelectionConfig;
pub use consensus::ConsensusParams;
pub use error::{Error, ErrorCategory, Result};
pub use genesis::{GenesisBlock, GenesisBuilder, GenesisSpec};
pub use hash::Hash256;
pub use network::NetworkType;
pub use overrides::Override;
pub use params::ChainParams;
pub use registry::params_for_id;
pub use selector::{params, select_params, NetworkSelector, UnitTestParams};
