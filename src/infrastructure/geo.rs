//! Deterministic client address to region mapping.

use std::net::IpAddr;

use sha2::{Digest, Sha256};

use crate::domain::location::LocationResolver;

/// Region tags a click can be attributed to.
const REGIONS: [&str; 8] = ["US", "IN", "UK", "CA", "AU", "DE", "FR", "JP"];

/// Maps client addresses into [`REGIONS`] by hashing the address.
///
/// This is a stand-in for real geolocation: the tag carries no geographic
/// truth, but it is stable, so repeated clicks from one address always land
/// in the same region and analytics stay self-consistent.
pub struct HashedLocationResolver;

impl HashedLocationResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HashedLocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationResolver for HashedLocationResolver {
    fn resolve(&self, addr: IpAddr) -> String {
        let mut hasher = Sha256::new();
        hasher.update(addr.to_string().as_bytes());
        let digest = hasher.finalize();

        let index = digest[0] as usize % REGIONS.len();
        REGIONS[index].to_string()
    }
}
