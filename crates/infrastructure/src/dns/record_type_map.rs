//! Mapping from `hickory_proto::rr::RecordType` to `gyip_domain::RecordType`.

use gyip_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert an incoming question type.
    ///
    /// Returns `None` for everything but A and AAAA.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            _ => None,
        }
    }
}
