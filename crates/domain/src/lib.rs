//! gyip Domain Layer
pub mod address_tokenizer;
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod response_synthesizer;
pub mod served_zones;

pub use address_tokenizer::AddressTokenizer;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{DnsRecord, RecordType};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use response_synthesizer::ResponseSynthesizer;
pub use served_zones::{is_valid_domain, split_zones, ServedZones, ZoneMatch};
