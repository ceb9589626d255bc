//! Base58 version prefixes

use serde::{Deserialize, Serialize};

/// BIP44 coin type registered for Dutcoin
pub const COIN_TYPE: u32 = 119;

/// Kinds of base58-encoded payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress,
    /// Pay-to-script-hash address
    ScriptAddress,
    /// WIF private key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
    /// Hardened BIP44 coin type
    ExtCoinType,
}

impl Base58Type {
    /// Every prefix kind
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
        Base58Type::ExtCoinType,
    ];
}

/// Per-network base58 prefixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    /// P2PKH version byte
    pub pubkey_address: [u8; 1],
    /// P2SH version byte
    pub script_address: [u8; 1],
    /// WIF version byte
    pub secret_key: [u8; 1],
    /// xpub-style prefix
    pub ext_public_key: [u8; 4],
    /// xprv-style prefix
    pub ext_secret_key: [u8; 4],
    /// Hardened coin type, big endian
    pub ext_coin_type: [u8; 4],
}

impl Base58Prefixes {
    /// Prefixes used on mainnet
    pub const fn mainnet() -> Self {
        Self {
            pubkey_address: [30],
            script_address: [50],
            secret_key: [90],
            ext_public_key: [0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: [0x04, 0x88, 0xAD, 0xE4],
            ext_coin_type: hardened_coin_type(COIN_TYPE),
        }
    }

    /// Prefix bytes for a payload kind
    pub fn prefix(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
            Base58Type::ExtCoinType => &self.ext_coin_type,
        }
    }

    /// Numeric BIP44 coin type, hardening bit removed
    pub fn coin_type(&self) -> u32 {
        u32::from_be_bytes(self.ext_coin_type) & 0x7fff_ffff
    }

    /// Check that the five address and key prefixes are pairwise distinct
    pub fn is_unambiguous(&self) -> bool {
        let kinds = &Base58Type::ALL[..5];
        kinds.iter().enumerate().all(|(i, a)| {
            kinds[i + 1..]
                .iter()
                .all(|b| self.prefix(*a) != self.prefix(*b))
        })
    }
}

const fn hardened_coin_type(coin_type: u32) -> [u8; 4] {
    (coin_type | 0x8000_0000).to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_prefixes() {
        let prefixes = Base58Prefixes::mainnet();
        assert_eq!(prefixes.prefix(Base58Type::PubkeyAddress), &[30]);
        assert_eq!(prefixes.prefix(Base58Type::ExtSecretKey), &[0x04, 0x88, 0xAD, 0xE4]);
        assert_eq!(prefixes.ext_coin_type, [0x80, 0x00, 0x00, 0x77]);
        assert!(prefixes.is_unambiguous());
    }

    #[test]
    fn test_coin_type() {
        assert_eq!(Base58Prefixes::mainnet().coin_type(), COIN_TYPE);
    }

    #[test]
    fn test_collision_detected() {
        let mut prefixes = Base58Prefixes::mainnet();
        prefixes.secret_key = prefixes.script_address;
        assert!(!prefixes.is_unambiguous());
    }
}
