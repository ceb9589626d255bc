//! 256-bit hash values

use crate::{Error, Result};
use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A 256-bit hash stored in internal (little-endian) byte order
///
/// Hex strings use the conventional display order, most significant byte
/// first, so `to_string()` of a block hash reads the way block explorers
/// print it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    /// All-zero hash
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    /// Wrap raw bytes in internal order
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a display-order hex literal at compile time
    ///
    /// Intended for constants; an invalid literal fails const evaluation.
    pub const fn from_hex_const(s: &str) -> Self {
        let display: [u8; 32] = hex_array(s);
        let mut bytes = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            bytes[i] = display[31 - i];
            i += 1;
        }
        Self(bytes)
    }

    /// Parse a display-order hex string, with or without `0x`
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        if trimmed.len() != 64 {
            return Err(Error::InvalidHex(format!(
                "expected 64 hex digits, got {}",
                trimmed.len()
            )));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(trimmed, &mut bytes).map_err(|e| Error::InvalidHex(e.to_string()))?;
        bytes.reverse();
        Ok(Self(bytes))
    }

    /// Raw bytes in internal order
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Display-order hex
    pub fn to_hex(&self) -> String {
        let mut display = self.0;
        display.reverse();
        hex::encode(display)
    }

    /// Numeric value, for comparison against a difficulty target
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }

    /// Check if every byte is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl FromStr for Hash256 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Decode a hex literal into a fixed-size array during const evaluation
pub(crate) const fn hex_array<const N: usize>(s: &str) -> [u8; N] {
    let digits = s.as_bytes();
    assert!(digits.len() == 2 * N, "hex literal has the wrong length");
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = (hex_digit(digits[2 * i]) << 4) | hex_digit(digits[2 * i + 1]);
        i += 1;
    }
    out
}

const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in literal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "00000e02346c923297b2d2c698fb304357350e1b2941bab0cebe439f07c7e18b";

    #[test]
    fn test_display_order() {
        let hash = Hash256::from_hex(SAMPLE).unwrap();
        assert_eq!(hash.as_bytes()[31], 0x00);
        assert_eq!(hash.as_bytes()[0], 0x8b);
        assert_eq!(hash.to_string(), SAMPLE);
    }

    #[test]
    fn test_const_and_runtime_agree() {
        const HASH: Hash256 = Hash256::from_hex_const(SAMPLE);
        assert_eq!(HASH, Hash256::from_hex(&format!("0x{SAMPLE}")).unwrap());
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(Hash256::from_hex("abcd"), Err(Error::InvalidHex(_))));
        let bad = "zz".repeat(32);
        assert!(matches!(Hash256::from_hex(&bad), Err(Error::InvalidHex(_))));
    }

    #[test]
    fn test_u256_value() {
        let one = Hash256::from_hex(&format!("{:064x}", 1)).unwrap();
        assert_eq!(one.to_u256(), U256::one());
        assert!(Hash256::ZERO.is_zero());
    }

    #[test]
    fn test_serde_as_string() {
        let hash = Hash256::from_hex(SAMPLE).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{SAMPLE}\""));
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
