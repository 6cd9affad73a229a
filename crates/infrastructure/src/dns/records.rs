use gyip_domain::DnsRecord;
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::ProtoError;
use std::net::IpAddr;

/// Builds the wire record for an answer, owned by `record.name`.
pub fn to_hickory_record(record: &DnsRecord) -> Result<Record, ProtoError> {
    let rdata = match record.address {
        IpAddr::V4(ipv4) => RData::A(A(ipv4)),
        IpAddr::V6(ipv6) => RData::AAAA(AAAA(ipv6)),
    };
    Ok(Record::from_rdata(owner_name(&record.name)?, record.ttl, rdata))
}

/// Labels go in as raw bytes; the text parser would reject `::1`.
fn owner_name(name: &str) -> Result<Name, ProtoError> {
    let labels: Vec<&[u8]> = name
        .split('.')
        .filter(|label| !label.is_empty())
        .map(str::as_bytes)
        .collect();

    let mut owner = Name::from_labels(labels)?;
    owner.set_fqdn(true);
    Ok(owner)
}
