mod random_source;

pub use random_source::RandomSource;

// Re-export for convenience
pub use gyip_domain::{DnsRecord, DnsRequest};
