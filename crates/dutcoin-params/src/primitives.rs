//! Minimal transaction and block-header encoding
//!
//! Only what genesis construction needs: script pushes, the legacy
//! transaction format, the 80-byte header and the merkle tree. Everything
//! serializes in consensus byte order.

use crate::hash::Hash256;
use dutcoin_hash::{quark, sha256d};
use serde::{Serialize, Serializer};
use std::fmt;

/// Push an empty vector
pub const OP_0: u8 = 0x00;
/// Next byte holds the push length
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Next two bytes hold the push length
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Next four bytes hold the push length
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Push the number -1
pub const OP_1NEGATE: u8 = 0x4f;
/// Push the number 1; `OP_2`..`OP_16` follow it
pub const OP_1: u8 = 0x51;
/// Check a signature against the pushed public key
pub const OP_CHECKSIG: u8 = 0xac;

/// Raw script bytes built from pushes and opcodes
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    /// Empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an integer, using the small-number opcodes where they exist
    pub fn push_int(self, n: i64) -> Self {
        match n {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (n - 1) as u8),
            _ => self.push_data(&script_num(n)),
        }
    }

    /// Push the minimal script-number encoding of `n` as data
    pub fn push_script_num(self, n: i64) -> Self {
        self.push_data(&script_num(n))
    }

    /// Push raw data with the shortest length prefix
    pub fn push_data(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Append a bare opcode
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// Script bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Script length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the script has no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

/// Minimal little-endian sign-magnitude encoding
fn script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    // room for the sign bit
    match out.last_mut() {
        Some(last) if *last & 0x80 != 0 => out.push(if negative { 0x80 } else { 0x00 }),
        Some(last) if negative => *last |= 0x80,
        _ => {}
    }
    out
}

fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn write_script(out: &mut Vec<u8>, script: &Script) {
    write_compact_size(out, script.len() as u64);
    out.extend_from_slice(script.as_bytes());
}

/// Reference to a previous transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutPoint {
    /// Spent transaction id
    pub txid: Hash256,
    /// Output index
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint a coinbase input spends
    pub const fn null() -> Self {
        Self {
            txid: Hash256::ZERO,
            vout: u32::MAX,
        }
    }

    /// Check if this is the coinbase outpoint
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

/// Transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxIn {
    /// Output being spent
    pub prevout: OutPoint,
    /// Unlocking script
    pub script_sig: Script,
    /// Sequence number
    pub sequence: u32,
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxOut {
    /// Amount in base units
    pub value: i64,
    /// Locking script
    pub script_pubkey: Script,
}

/// Legacy-format transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Transaction version
    pub version: i32,
    /// Inputs
    pub inputs: Vec<TxIn>,
    /// Outputs
    pub outputs: Vec<TxOut>,
    /// Lock time
    pub lock_time: u32,
}

impl Transaction {
    /// Consensus serialization
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(256);
        out.extend_from_slice(&self.version.to_le_bytes());
        write_compact_size(&mut out, self.inputs.len() as u64);
        for input in &self.inputs {
            out.extend_from_slice(input.prevout.txid.as_bytes());
            out.extend_from_slice(&input.prevout.vout.to_le_bytes());
            write_script(&mut out, &input.script_sig);
            out.extend_from_slice(&input.sequence.to_le_bytes());
        }
        write_compact_size(&mut out, self.outputs.len() as u64);
        for output in &self.outputs {
            out.extend_from_slice(&output.value.to_le_bytes());
            write_script(&mut out, &output.script_pubkey);
        }
        out.extend_from_slice(&self.lock_time.to_le_bytes());
        out
    }

    /// Double-SHA256 of the serialization
    pub fn txid(&self) -> Hash256 {
        Hash256::from_bytes(sha256d(&self.serialize()))
    }

    /// Check if the only input spends the null outpoint
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }
}

/// Block header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockHeader {
    /// Block version
    pub version: i32,
    /// Hash of the previous block
    pub prev_block: Hash256,
    /// Merkle root of the block's transactions
    pub merkle_root: Hash256,
    /// Block time (Unix epoch seconds)
    pub time: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Proof-of-work nonce
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialized header size
    pub const SIZE: usize = 80;

    /// Consensus serialization
    pub fn serialize(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.prev_block.as_bytes());
        out[36..68].copy_from_slice(self.merkle_root.as_bytes());
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// Quark hash of the serialized header
    pub fn hash(&self) -> Hash256 {
        Hash256::from_bytes(quark(&self.serialize()))
    }
}

/// Bitcoin-style merkle root over transaction ids
///
/// Odd levels duplicate their last entry. An empty list yields zero.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return Hash256::ZERO;
    }
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                let mut concat = [0u8; 64];
                concat[..32].copy_from_slice(left.as_bytes());
                concat[32..].copy_from_slice(right.as_bytes());
                Hash256::from_bytes(sha256d(&concat))
            })
            .collect();
    }
    level[0]
}
