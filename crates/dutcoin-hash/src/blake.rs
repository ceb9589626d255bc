//! BLAKE-512, final-round version with 16 rounds

use crate::{words_be, Digest512};

const BLOCK: usize = 128;

const IV: [u64; 8] = [
    0x6A09E667F3BCC908,
    0xBB67AE8584CAA73B,
    0x3C6EF372FE94F82B,
    0xA54FF53A5F1D36F1,
    0x510E527FADE682D1,
    0x9B05688C2B3E6C1F,
    0x1F83D9ABFB41BD6B,
    0x5BE0CD19137E2179,
];

const C: [u64; 16] = [
    0x243F6A8885A308D3,
    0x13198A2E03707344,
    0xA4093822299F31D0,
    0x082EFA98EC4E6C89,
    0x452821E638D01377,
    0xBE5466CF34E90C6C,
    0xC0AC29B7C97C50DD,
    0x3F84D5B5B5470917,
    0x9216D5D98979FB1B,
    0xD1310BA698DFB5AC,
    0x2FFD72DBD01ADFB7,
    0xB8E1AFED6A267E96,
    0xBA7C9045F12C7F99,
    0x24A19947B3916CF7,
    0x0801F2E2858EFC16,
    0x636920D871574E69,
];

const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// State indices touched by each of the eight G calls in a round
const LANES: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

fn compress(h: &mut [u64; 8], block: &[u8], counter: u128) {
    let m: [u64; 16] = words_be(block);
    let low = counter as u64;
    let high = (counter >> 64) as u64;

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(h);
    v[8..12].copy_from_slice(&C[..4]);
    v[12] = low ^ C[4];
    v[13] = low ^ C[5];
    v[14] = high ^ C[6];
    v[15] = high ^ C[7];

    for round in 0..16 {
        let s = &SIGMA[round % 10];
        for (i, &[a, b, c, d]) in LANES.iter().enumerate() {
            let (x, y) = (s[2 * i], s[2 * i + 1]);
            v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[x] ^ C[y]);
            v[d] = (v[d] ^ v[a]).rotate_right(32);
            v[c] = v[c].wrapping_add(v[d]);
            v[b] = (v[b] ^ v[c]).rotate_right(25);
            v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[y] ^ C[x]);
            v[d] = (v[d] ^ v[a]).rotate_right(16);
            v[c] = v[c].wrapping_add(v[d]);
            v[b] = (v[b] ^ v[c]).rotate_right(11);
        }
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

/// BLAKE-512 of `data`
pub fn blake512(data: &[u8]) -> Digest512 {
    let mut h = IV;
    let bits = (data.len() as u128) * 8;

    let mut chunks = data.chunks_exact(BLOCK);
    let mut counted: u128 = 0;
    for chunk in &mut chunks {
        counted += (BLOCK * 8) as u128;
        compress(&mut h, chunk, counted);
    }

    // The counter of a block carrying no message bits is zero.
    let rem = chunks.remainder();
    let counter = if rem.is_empty() { 0 } else { bits };

    let mut tail = [0u8; 2 * BLOCK];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;

    if rem.len() < 112 {
        tail[111] |= 0x01;
        tail[112..BLOCK].copy_from_slice(&bits.to_be_bytes());
        compress(&mut h, &tail[..BLOCK], counter);
    } else {
        compress(&mut h, &tail[..BLOCK], counter);
        tail[BLOCK + 111] |= 0x01;
        tail[BLOCK + 112..].copy_from_slice(&bits.to_be_bytes());
        compress(&mut h, &tail[BLOCK..], 0);
    }

    let mut out = [0u8; 64];
    for (dst, word) in out.chunks_exact_mut(8).zip(h) {
        dst.copy_from_slice(&word.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        assert_eq!(
            hex::encode(blake512(b"")),
            "a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b\
             628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8"
        );
    }

    #[test]
    fn test_multi_block_message() {
        let data: Vec<u8> = (0..200u8).collect();
        assert_eq!(
            hex::encode(blake512(&data)),
            "e327afcd4b6113e8f9571f030f60b4b85ea29df58c35ac1d0daceefe9edb17c6\
             ce5a8bf5934214da6a3746f72c8b96cfce9625f4edf157408d67a6d3071d5980"
        );
    }

    #[test]
    fn test_padding_boundary() {
        // 112 and 128 byte remainders spill the length into an extra block
        let a = blake512(&[0u8; 112]);
        let b = blake512(&[0u8; 128]);
        assert_ne!(a, b);
        assert_ne!(a, blake512(&[0u8; 111]));
    }
}
