//! Hash functions used by the Dutcoin chain
//!
//! Block headers are identified by Quark, a fixed chain of six 512-bit
//! SHA-3 finalists. Transactions and merkle nodes use double SHA-256.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blake;
mod bmw;
mod quark;

pub use blake::blake512;
pub use bmw::bmw512;
pub use quark::quark;

use groestl::Groestl512;
use jh::Jh512;
use sha2::{Digest, Sha256};
use sha3::Keccak512;
use skein::{digest::consts::U64, Skein512};

/// 512-bit digest produced by every Quark stage
pub type Digest512 = [u8; 64];

fn digest512<D: Digest>(data: &[u8]) -> Digest512 {
    let mut out = [0u8; 64];
    out.copy_from_slice(&D::digest(data));
    out
}

/// Keccak-512 with the pre-FIPS `0x01` padding
pub fn keccak512(data: &[u8]) -> Digest512 {
    digest512::<Keccak512>(data)
}

/// Grøstl-512
pub fn groestl512(data: &[u8]) -> Digest512 {
    digest512::<Groestl512>(data)
}

/// JH-512
pub fn jh512(data: &[u8]) -> Digest512 {
    digest512::<Jh512>(data)
}

/// Skein-512 with a 512-bit output
pub fn skein512(data: &[u8]) -> Digest512 {
    digest512::<Skein512<U64>>(data)
}

/// SHA-256 applied twice
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Read big-endian 64-bit words from a block
pub(crate) fn words_be<const N: usize>(block: &[u8]) -> [u64; N] {
    let mut words = [0u64; N];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(8)) {
        *word = bytes.iter().fold(0, |acc, &b| (acc << 8) | u64::from(b));
    }
    words
}

/// Read little-endian 64-bit words from a block
pub(crate) fn words_le<const N: usize>(block: &[u8]) -> [u64; N] {
    let mut words = [0u64; N];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(8)) {
        *word = bytes.iter().rev().fold(0, |acc, &b| (acc << 8) | u64::from(b));
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak512_empty() {
        assert_eq!(
            hex::encode(keccak512(b"")),
            "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304\
             c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
        );
    }

    #[test]
    fn test_groestl512() {
        assert_eq!(
            hex::encode(groestl512(b"")),
            "6d3ad29d279110eef3adbd66de2a0345a77baede1557f5d099fce0c03d6dc2ba\
             8e6d4a6633dfbd66053c20faa87d1a11f39a7fbe4a6c2f009801370308fc4ad8"
        );
        let data: Vec<u8> = (0..200u8).collect();
        assert_eq!(
            hex::encode(groestl512(&data)),
            "ff6dabc4aacd1f3955daba7ee2f36b2e24cca8aef87bdf286ea77b2d86dc4052\
             6ca5290c0558e95b4f620d78241a2665ab300216016b66ae87c6dc2e216348bb"
        );
    }

    #[test]
    fn test_jh512() {
        assert_eq!(
            hex::encode(jh512(b"")),
            "90ecf2f76f9d2c8017d979ad5ab96b87d58fc8fc4b83060f3f900774faa2c8fa\
             be69c5f4ff1ec2b61d6b316941cedee117fb04b1f4c5bc1b919ae841c50eec4f"
        );
        let data: Vec<u8> = (0..200u8).collect();
        assert_eq!(
            hex::encode(jh512(&data)),
            "f887f615cf46099a0582a23e7dd8cb5110de8d0056840d20bf38bde116defd27\
             faba3bf6d4df1cf34acef5df1b660a393e836f960e8dc88c604704b031428465"
        );
    }

    #[test]
    fn test_skein512() {
        assert_eq!(
            hex::encode(skein512(b"")),
            "bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af4\
             1fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a"
        );
        assert_eq!(
            hex::encode(skein512(&[0xff])),
            "71b7bce6fe6452227b9ced6014249e5bf9a9754c3ad618ccc4e0aae16b316cc8\
             ca698d864307ed3e80b6ef1570812ac5272dc409b5a012df2a579102f340617a"
        );
    }

    #[test]
    fn test_sha256d() {
        // Bitcoin's well known double hash of "hello"
        assert_eq!(
            hex::encode(sha256d(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_word_loading() {
        let bytes: Vec<u8> = (1..=16).collect();
        let be: [u64; 2] = words_be(&bytes);
        let le: [u64; 2] = words_le(&bytes);
        assert_eq!(be[0], 0x0102030405060708);
        assert_eq!(le[0], 0x0807060504030201);
        assert_eq!(le[1], 0x100f0e0d0c0b0a09);
    }
}
