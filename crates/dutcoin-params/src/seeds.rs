//! Peer discovery seeds

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// Seconds in one week
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// A DNS seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    /// Display name
    pub name: String,
    /// Host queried for peer addresses
    pub host: String,
}

impl DnsSeed {
    /// Create a seed whose name is its host
    pub fn new(host: &str) -> Self {
        Self {
            name: host.to_string(),
            host: host.to_string(),
        }
    }
}

/// Compiled-in seed address: 16-byte IPv6 (or IPv4-mapped) address and port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    /// Address in network byte order
    pub addr: [u8; 16],
    /// TCP port
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4 address stored in its IPv4-mapped IPv6 form
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let mut addr = [0u8; 16];
        addr[10] = 0xff;
        addr[11] = 0xff;
        addr[12] = octets[0];
        addr[13] = octets[1];
        addr[14] = octets[2];
        addr[15] = octets[3];
        Self { addr, port }
    }

    /// Socket address, unmapping IPv4-mapped addresses
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = Ipv6Addr::from(self.addr);
        let ip = match ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(ip),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// Mainnet seed table
pub const MAINNET_SEEDS: [SeedSpec6; 3] = [
    SeedSpec6::ipv4([62, 151, 182, 181], 31719),
    SeedSpec6::ipv4([62, 151, 178, 33], 31719),
    SeedSpec6::ipv4([74, 208, 183, 29], 31719),
];

/// A usable fixed seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSeed {
    /// Peer address
    pub addr: SocketAddr,
    /// Synthetic last-seen time (Unix epoch seconds)
    pub last_seen: i64,
}

/// Convert a seed table into addresses with a random last-seen time
///
/// Every address is stamped between one and two weeks before `now`, so
/// peers learned from the network with fresher timestamps win.
pub fn convert_seed6<R: Rng + ?Sized>(specs: &[SeedSpec6], now: i64, rng: &mut R) -> Vec<FixedSeed> {
    specs
        .iter()
        .map(|spec| FixedSeed {
            addr: spec.socket_addr(),
            last_seen: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
        })
        .collect()
}
