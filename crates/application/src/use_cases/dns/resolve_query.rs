use crate::ports::RandomSource;
use crate::services::{Command, CommandResolver};
use gyip_domain::{
    AddressTokenizer, DnsRecord, DnsRequest, DomainError, ResponseSynthesizer, ServedZones,
};
use std::sync::Arc;
use tracing::debug;

/// Answers address questions from the addresses embedded in the query name.
pub struct ResolveQueryUseCase {
    zones: ServedZones,
    random: Arc<dyn RandomSource>,
}

impl ResolveQueryUseCase {
    pub fn new(zones: ServedZones, random: Arc<dyn RandomSource>) -> Self {
        Self { zones, random }
    }

    pub fn is_served(&self, domain: &str) -> bool {
        self.zones.find(domain).is_some()
    }

    /// Resolves one question.
    ///
    /// Fails only with `NotAuthoritative` when the name is outside every
    /// served zone. An empty answer means the name has no usable address.
    pub fn execute(&self, request: &DnsRequest) -> Result<Vec<DnsRecord>, DomainError> {
        let matched = self
            .zones
            .find(&request.domain)
            .ok_or_else(|| DomainError::NotAuthoritative(request.domain.to_string()))?;

        let (address_portion, command) = CommandResolver::resolve(matched.remainder);

        let addresses = match command {
            Command::Echo => Vec::new(),
            _ => AddressTokenizer::tokenize(address_portion),
        };

        debug!(
            domain = %request.domain,
            zone = matched.zone,
            command = %command,
            found = addresses.len(),
            "Addresses decoded from query name"
        );

        let resolved = command.execute(addresses, self.random.as_ref(), request.client_ip);

        let name = request.domain.strip_suffix('.').unwrap_or(&request.domain);
        Ok(ResponseSynthesizer::synthesize(
            &resolved.addresses,
            request.record_type,
            resolved.ttl,
            name,
        ))
    }

    /// Resolves every question of a message and concatenates the answers.
    ///
    /// Each answer keeps the owner name of its own question. Questions
    /// outside the served zones contribute nothing; if none of them is inside
    /// a served zone the whole message is `NotAuthoritative`.
    pub fn answer_questions(&self, requests: &[DnsRequest]) -> Result<Vec<DnsRecord>, DomainError> {
        let mut answers = Vec::new();
        let mut authoritative = false;

        for request in requests {
            match self.execute(request) {
                Ok(records) => {
                    authoritative = true;
                    answers.extend(records);
                }
                Err(DomainError::NotAuthoritative(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        if !authoritative {
            let names = requests
                .iter()
                .map(|r| r.domain.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(DomainError::NotAuthoritative(names));
        }

        Ok(answers)
    }
}
