use super::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// One question handed to the resolution pipeline by the transport layer.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub client_ip: Option<IpAddr>,
}

impl DnsRequest {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            client_ip: None,
        }
    }

    pub fn with_client(mut self, client_ip: IpAddr) -> Self {
        self.client_ip = Some(client_ip);
        self
    }
}
