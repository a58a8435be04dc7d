//! Address generator.

use rand::Rng;
use std::net::Ipv4Addr;

/// Generate an address in 198.18.0.0/15, the block IANA reserves for
/// benchmarking (RFC 2544).
pub fn generate_testing_ip<R: Rng>(rng: &mut R) -> Ipv4Addr {
    let mut octets = [0u8; 3];
    rng.fill(&mut octets);

    Ipv4Addr::new(198, 18 + (octets[0] & 0x1), octets[1], octets[2])
}
