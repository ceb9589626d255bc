//! Error types for network parameter operations

use crate::network::NetworkType;
use std::fmt;

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Network parameter errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network identifier outside the known set
    #[error("Unimplemented network: {0}")]
    UnimplementedNetwork(String),

    /// Mutable access requested while a non unit-test network is active
    #[error("Parameters for {active} are immutable; only unittest may be modified")]
    UnauthorizedMutation {
        /// Network that is currently selected
        active: NetworkType,
    },

    /// Rebuilt genesis block does not match the compiled-in constants
    #[error("Genesis mismatch on {network}: {field} expected {expected}, computed {computed}")]
    GenesisMismatch {
        /// Network whose genesis failed
        network: NetworkType,
        /// Which constant differed
        field: &'static str,
        /// Compiled-in value
        expected: String,
        /// Value computed by rebuilding the genesis block
        computed: String,
    },

    /// Genesis hash does not meet its own difficulty target
    #[error("Genesis block of {0} does not satisfy its proof-of-work target")]
    GenesisProofOfWork(NetworkType),

    /// Malformed hex literal
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Both --testnet and --regtest requested
    #[error("Invalid combination of -regtest and -testnet")]
    ConflictingNetworkFlags,

    /// Configuration parse error
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is a build-integrity defect the node must not survive
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::GenesisMismatch { .. } | Error::GenesisProofOfWork(_)
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::GenesisMismatch { .. } | Error::GenesisProofOfWork(_) => ErrorCategory::Integrity,
            Error::UnimplementedNetwork(_) | Error::ConflictingNetworkFlags => {
                ErrorCategory::Selection
            }
            Error::UnauthorizedMutation { .. } => ErrorCategory::Access,
            Error::InvalidHex(_) | Error::Config(_) | Error::Io(_) => ErrorCategory::Input,
        }
    }
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Compiled-in constants are inconsistent
    Integrity,
    /// Network selection failed
    Selection,
    /// Mutation refused
    Access,
    /// Bad external input
    Input,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Integrity => write!(f, "integrity"),
            ErrorCategory::Selection => write!(f, "selection"),
            ErrorCategory::Access => write!(f, "access"),
            ErrorCategory::Input => write!(f, "input"),
        }
    }
}
