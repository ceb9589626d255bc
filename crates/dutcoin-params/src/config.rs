//! Network selection configuration

use crate::checkpoints::CheckpointData;
use crate::hash::Hash256;
use crate::network::NetworkType;
use crate::selector::NetworkSelector;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which network to run and how strictly to follow checkpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Network to select
    pub network: NetworkType,
    /// Reject blocks that contradict a checkpoint
    pub checkpoints_enabled: bool,
    /// `tracing` filter directive for binaries
    pub log_filter: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            network: NetworkType::Main,
            checkpoints_enabled: true,
            log_filter: "info".to_string(),
        }
    }
}

impl SelectionConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Select the configured network
    pub fn apply(&self, selector: &mut NetworkSelector) -> NetworkType {
        selector.select(self.network);
        self.network
    }

    /// Check a block against checkpoints, unless checkpoints are disabled
    pub fn check_block(&self, checkpoints: &CheckpointData, height: u32, hash: &Hash256) -> bool {
        !self.checkpoints_enabled || checkpoints.check_block(height, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SelectionConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SelectionConfig::default());
        assert_eq!(config.network, NetworkType::Main);
    }

    #[test]
    fn test_partial_json() {
        let config =
            SelectionConfig::from_json_str(r#"{"network":"regtest","checkpoints_enabled":false}"#)
                .unwrap();
        assert_eq!(config.network, NetworkType::Regtest);
        assert!(!config.checkpoints_enabled);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_unknown_network_rejected() {
        let err = SelectionConfig::from_json_str(r#"{"network":"signet"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"network":"test","log_filter":"debug"}}"#).unwrap();
        let config = SelectionConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.network, NetworkType::Testnet);
        assert_eq!(config.log_filter, "debug");

        let missing = SelectionConfig::from_json_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }

    #[test]
    fn test_apply_selects() {
        let config = SelectionConfig {
            network: NetworkType::Testnet,
            ..SelectionConfig::default()
        };
        let mut selector = NetworkSelector::new();
        assert_eq!(config.apply(&mut selector), NetworkType::Testnet);
        assert_eq!(selector.current().default_port(), 31720);
    }

    #[test]
    fn test_disabled_checkpoints_accept_anything() {
        let checkpoints = CheckpointData::new(&[(5, Hash256::from_bytes([1; 32]))], 0, 0, 0.0);
        let wrong = Hash256::from_bytes([2; 32]);
        let strict = SelectionConfig::default();
        let lax = SelectionConfig {
            checkpoints_enabled: false,
            ..SelectionConfig::default()
        };
        assert!(!strict.check_block(&checkpoints, 5, &wrong));
        assert!(lax.check_block(&checkpoints, 5, &wrong));
    }
}
