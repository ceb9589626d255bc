//! Dutcoin network definitions

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NetworkType {
    /// Production network
    #[serde(rename = "main")]
    Main,
    /// Public test network
    #[serde(rename = "test")]
    Testnet,
    /// Private regression-test network with on-demand mining
    #[serde(rename = "regtest")]
    Regtest,
    /// In-process unit-test network; the only one whose parameters may change
    #[serde(rename = "unittest")]
    UnitTest,
}

impl NetworkType {
    /// Every known network
    pub const ALL: [NetworkType; 4] = [
        NetworkType::Main,
        NetworkType::Testnet,
        NetworkType::Regtest,
        NetworkType::UnitTest,
    ];

    /// Short identifier used on the command line and in data directories
    pub const fn id(&self) -> &'static str {
        match self {
            NetworkType::Main => "main",
            NetworkType::Testnet => "test",
            NetworkType::Regtest => "regtest",
            NetworkType::UnitTest => "unittest",
        }
    }

    /// Resolve the `-testnet` / `-regtest` switches
    ///
    /// The unit-test network is never reachable from the command line.
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Self> {
        match (testnet, regtest) {
            (true, true) => Err(Error::ConflictingNetworkFlags),
            (_, true) => Ok(NetworkType::Regtest),
            (true, false) => Ok(NetworkType::Testnet),
            (false, false) => Ok(NetworkType::Main),
        }
    }

    /// Check if this is a network where real value is at stake
    pub const fn is_production(&self) -> bool {
        matches!(self, NetworkType::Main)
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NetworkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NetworkType::ALL
            .into_iter()
            .find(|network| network.id() == s)
            .ok_or_else(|| Error::UnimplementedNetwork(s.to_string()))
    }
}
