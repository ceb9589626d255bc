//! Blue Midnight Wish 512 (tweaked second-round version)

use crate::{words_le, Digest512};

const BLOCK: usize = 128;

const IV: [u64; 16] = [
    0x8081828384858687,
    0x88898A8B8C8D8E8F,
    0x9091929394959697,
    0x98999A9B9C9D9E9F,
    0xA0A1A2A3A4A5A6A7,
    0xA8A9AAABACADAEAF,
    0xB0B1B2B3B4B5B6B7,
    0xB8B9BABBBCBDBEBF,
    0xC0C1C2C3C4C5C6C7,
    0xC8C9CACBCCCDCECF,
    0xD0D1D2D3D4D5D6D7,
    0xD8D9DADBDCDDDEDF,
    0xE0E1E2E3E4E5E6E7,
    0xE8E9EAEBECEDEEEF,
    0xF0F1F2F3F4F5F6F7,
    0xF8F9FAFBFCFDFEFF,
];

const FINAL: [u64; 16] = {
    let mut words = [0u64; 16];
    let mut i = 0;
    while i < 16 {
        words[i] = 0xaaaaaaaaaaaaaaa0 + i as u64;
        i += 1;
    }
    words
};

/// Terms of W_j as (index into M xor H, add when true / subtract when false)
const W: [[(usize, bool); 5]; 16] = [
    [(5, true), (7, false), (10, true), (13, true), (14, true)],
    [(6, true), (8, false), (11, true), (14, true), (15, false)],
    [(0, true), (7, true), (9, true), (12, false), (15, true)],
    [(0, true), (1, false), (8, true), (10, false), (13, true)],
    [(1, true), (2, true), (9, true), (11, false), (14, false)],
    [(3, true), (2, false), (10, true), (12, false), (15, true)],
    [(4, true), (0, false), (3, false), (11, false), (13, true)],
    [(1, true), (4, false), (5, false), (12, false), (14, false)],
    [(2, true), (5, false), (6, false), (13, true), (15, false)],
    [(0, true), (3, false), (6, true), (7, false), (14, true)],
    [(8, true), (1, false), (4, false), (7, false), (15, true)],
    [(8, true), (0, false), (2, false), (5, false), (9, true)],
    [(1, true), (3, true), (6, false), (9, false), (10, true)],
    [(2, true), (4, true), (7, true), (10, true), (11, true)],
    [(3, true), (5, false), (8, true), (11, false), (12, false)],
    [(12, true), (4, false), (6, false), (9, false), (13, true)],
];

const R: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

fn add_element(m: &[u64; 16], h: &[u64; 16], j: usize) -> u64 {
    let rot = |i: usize| m[i].rotate_left(i as u32 + 1);
    let (a, b, c) = ((j - 16) % 16, (j - 13) % 16, (j - 6) % 16);
    rot(a)
        .wrapping_add(rot(b))
        .wrapping_sub(rot(c))
        .wrapping_add((j as u64).wrapping_mul(0x0555555555555555))
        ^ h[(j - 9) % 16]
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
    let mut x = [0u64; 16];
    for i in 0..16 {
        x[i] = m[i] ^ h[i];
    }

    let mut q = [0u64; 32];
    for (j, terms) in W.iter().enumerate() {
        let w = terms.iter().fold(0u64, |acc, &(i, add)| {
            if add {
                acc.wrapping_add(x[i])
            } else {
                acc.wrapping_sub(x[i])
            }
        });
        let s = match j % 5 {
            0 => s0(w),
            1 => s1(w),
            2 => s2(w),
            3 => s3(w),
            _ => s4(w),
        };
        q[j] = s.wrapping_add(h[(j + 1) % 16]);
    }

    for j in 16..32 {
        let mut s = 0u64;
        if j < 18 {
            for k in 0..16 {
                let v = q[j - 16 + k];
                let t = match k % 4 {
                    0 => s1(v),
                    1 => s2(v),
                    2 => s3(v),
                    _ => s0(v),
                };
                s = s.wrapping_add(t);
            }
        } else {
            for k in 0..14 {
                let v = q[j - 16 + k];
                let t = if k % 2 == 0 { v } else { v.rotate_left(R[k / 2]) };
                s = s.wrapping_add(t);
            }
            s = s.wrapping_add(s4(q[j - 2])).wrapping_add(s5(q[j - 1]));
        }
        q[j] = s.wrapping_add(add_element(m, h, j));
    }

    let xl = q[16..24].iter().fold(0u64, |acc, v| acc ^ v);
    let xh = q[24..32].iter().fold(xl, |acc, v| acc ^ v);

    let mut n = [0u64; 16];
    n[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    n[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    n[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    n[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    n[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    n[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    n[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    n[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);
    n[8] = n[4]
        .rotate_left(9)
        .wrapping_add(xh ^ q[24] ^ m[8])
        .wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    n[9] = n[5]
        .rotate_left(10)
        .wrapping_add(xh ^ q[25] ^ m[9])
        .wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    n[10] = n[6]
        .rotate_left(11)
        .wrapping_add(xh ^ q[26] ^ m[10])
        .wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    n[11] = n[7]
        .rotate_left(12)
        .wrapping_add(xh ^ q[27] ^ m[11])
        .wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    n[12] = n[0]
        .rotate_left(13)
        .wrapping_add(xh ^ q[28] ^ m[12])
        .wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    n[13] = n[1]
        .rotate_left(14)
        .wrapping_add(xh ^ q[29] ^ m[13])
        .wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    n[14] = n[2]
        .rotate_left(15)
        .wrapping_add(xh ^ q[30] ^ m[14])
        .wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    n[15] = n[3]
        .rotate_left(16)
        .wrapping_add(xh ^ q[31] ^ m[15])
        .wrapping_add((xl >> 2) ^ q[22] ^ q[15]);
    n
}

/// BMW-512 of `data`
pub fn bmw512(data: &[u8]) -> Digest512 {
    let mut h = IV;
    let bits = (data.len() as u64).wrapping_mul(8);

    let mut chunks = data.chunks_exact(BLOCK);
    for chunk in &mut chunks {
        h = compress(&h, &words_le(chunk));
    }

    let rem = chunks.remainder();
    let mut tail = [0u8; 2 * BLOCK];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;
    let len = if rem.len() < BLOCK - 8 { BLOCK } else { 2 * BLOCK };
    tail[len - 8..len].copy_from_slice(&bits.to_le_bytes());
    for block in tail[..len].chunks_exact(BLOCK) {
        h = compress(&h, &words_le(block));
    }

    let h = compress(&FINAL, &h);
    let mut out = [0u8; 64];
    for (dst, word) in out.chunks_exact_mut(8).zip(&h[8..]) {
        dst.copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        assert_eq!(
            hex::encode(bmw512(b"")),
            "6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af\
             7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e"
        );
    }

    #[test]
    fn test_multi_block_message() {
        let data: Vec<u8> = (0..200u8).collect();
        assert_eq!(
            hex::encode(bmw512(&data)),
            "7e20227e3ba9b5545954122c38981ba2005d869fa6fc24f8ae200c54c0873c75\
             3755469a5477868c0e63ddd8319128947d3e8c31ad06dfa2381c7bc98442fca0"
        );
    }
}
