//! Quark: nine chained 512-bit hash rounds with three data-dependent branches

use crate::{blake512, bmw512, groestl512, jh512, keccak512, skein512, Digest512};

/// Bit of the first digest byte that picks the branch taken
const BRANCH_MASK: u8 = 8;

fn branch(h: &Digest512, taken: fn(&[u8]) -> Digest512, other: fn(&[u8]) -> Digest512) -> Digest512 {
    if h[0] & BRANCH_MASK != 0 {
        taken(h)
    } else {
        other(h)
    }
}

/// Quark digest of `data`, truncated to 256 bits
///
/// Bytes are in internal (little-endian `uint256`) order; reverse them for
/// the usual hex display of a block hash.
pub fn quark(data: &[u8]) -> [u8; 32] {
    let h = blake512(data);
    let h = bmw512(&h);
    let h = branch(&h, groestl512, skein512);
    let h = groestl512(&h);
    let h = jh512(&h);
    let h = branch(&h, blake512, bmw512);
    let h = keccak512(&h);
    let h = skein512(&h);
    let h = branch(&h, keccak512, jh512);

    let mut out = [0u8; 32];
    out.copy_from_slice(&h[..32]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(hash: [u8; 32]) -> String {
        let mut bytes = hash;
        bytes.reverse();
        hex::encode(bytes)
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            hex::encode(quark(b"")),
            "0800f13b5af35b8363864de22b7bedeca369e2a7c6c77b4f69441cb03a517d9c"
        );
    }

    #[test]
    fn test_pivx_mainnet_genesis_header() {
        let header = hex::decode(
            "01000000000000000000000000000000000000000000000000000000000000000000\
             00009bc36d2ba74b96d57bf98bebdf25d1dc2977ae7773273a1014e98bf2e2f62e1b\
             bb2eac56f0ff0f1edfa62400",
        )
        .unwrap();
        assert_eq!(header.len(), 80);
        assert_eq!(
            display(quark(&header)),
            "0000041e482b9b9691d98eefb48473405c0b8ec31b76df3797c74a78680ef818"
        );
    }
}
