//! Client location resolution for click analytics.

use std::net::IpAddr;

/// Resolves a client address to a coarse region tag.
///
/// The service records only a rough region per click; precise geolocation is
/// deliberately out of scope. The production implementation is
/// [`crate::infrastructure::geo::HashedLocationResolver`], which maps each
/// address deterministically into a fixed region table.
#[cfg_attr(test, mockall::automock)]
pub trait LocationResolver: Send + Sync {
    fn resolve(&self, addr: IpAddr) -> String;
}
