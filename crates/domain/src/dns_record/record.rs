use super::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// Record class. Synthesized answers are always `IN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordClass {
    #[default]
    Inet,
}

/// An address answer bound to the queried name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    /// Owner name written on the wire, without the trailing dot.
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub class: RecordClass,

    pub ttl: u32,

    pub address: IpAddr,
}

impl DnsRecord {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, address: IpAddr, ttl: u32) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: RecordClass::Inet,
            ttl,
            address,
        }
    }
}
