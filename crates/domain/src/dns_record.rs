mod record;
mod record_type;

pub use record::{DnsRecord, RecordClass};
pub use record_type::RecordType;
