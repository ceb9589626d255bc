//! Property-based tests for dutcoin-hash
//!
//! Uses proptest to exercise every primitive across input lengths

use dutcoin_hash::{blake512, bmw512, groestl512, jh512, keccak512, quark, skein512, Digest512};
use proptest::prelude::*;

const PRIMITIVES: [(&str, fn(&[u8]) -> Digest512); 6] = [
    ("blake", blake512),
    ("bmw", bmw512),
    ("groestl", groestl512),
    ("jh", jh512),
    ("keccak", keccak512),
    ("skein", skein512),
];

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Messages up to a few blocks long, so every padding branch is reached
fn message_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..400)
}

// ============================================================================
// Hash Properties
// ============================================================================

proptest! {
    /// Property: same input = same digest
    #[test]
    fn prop_deterministic(data in message_strategy()) {
        for (name, hash) in PRIMITIVES {
            prop_assert_eq!(hash(&data).to_vec(), hash(&data).to_vec(), "{}", name);
        }
        prop_assert_eq!(quark(&data), quark(&data));
    }

    /// Property: flipping one bit changes every digest
    #[test]
    fn prop_single_bit_changes_digest(
        data in prop::collection::vec(any::<u8>(), 1..300),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let mut flipped = data.clone();
        let i = index.index(flipped.len());
        flipped[i] ^= 1 << bit;
        for (name, hash) in PRIMITIVES {
            prop_assert_ne!(hash(&data).to_vec(), hash(&flipped).to_vec(), "{}", name);
        }
        prop_assert_ne!(quark(&data), quark(&flipped));
    }

    /// Property: a trailing zero byte is not absorbed by padding
    #[test]
    fn prop_length_is_committed(data in message_strategy()) {
        let mut extended = data.clone();
        extended.push(0);
        for (name, hash) in PRIMITIVES {
            prop_assert_ne!(hash(&data).to_vec(), hash(&extended).to_vec(), "{}", name);
        }
    }
}
