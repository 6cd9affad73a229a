pub mod record_type_map;
pub mod records;
pub mod server;

pub use record_type_map::RecordTypeMapper;
pub use records::to_hickory_record;
pub use server::DnsServerHandler;
