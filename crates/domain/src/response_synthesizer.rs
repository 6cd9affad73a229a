use crate::{DnsRecord, RecordType};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Maps resolved addresses onto typed answer records.
///
/// An address answers `A` when it has a 4-byte form (IPv4, or IPv4-mapped
/// IPv6) and `AAAA` when it has a 16-byte form (any IPv6, or IPv4 widened to
/// its mapped form). Addresses without a form for the requested type are
/// skipped.
pub struct ResponseSynthesizer;

impl ResponseSynthesizer {
    pub fn synthesize(
        addresses: &[IpAddr],
        record_type: RecordType,
        ttl: u32,
        query_name: &str,
    ) -> Vec<DnsRecord> {
        addresses
            .iter()
            .filter_map(|address| {
                let answer = match record_type {
                    RecordType::A => as_v4(address).map(IpAddr::V4),
                    RecordType::AAAA => Some(IpAddr::V6(as_v6(address))),
                }?;
                Some(DnsRecord::new(query_name, record_type, answer, ttl))
            })
            .collect()
    }
}

fn as_v4(address: &IpAddr) -> Option<Ipv4Addr> {
    match address {
        IpAddr::V4(v4) => Some(*v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped(),
    }
}

fn as_v6(address: &IpAddr) -> Ipv6Addr {
    match address {
        IpAddr::V4(v4) => v4.to_ipv6_mapped(),
        IpAddr::V6(v6) => *v6,
    }
}
