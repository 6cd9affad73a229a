use gyip_application::use_cases::ResolveQueryUseCase;
use gyip_domain::Config;
use gyip_infrastructure::dns::DnsServerHandler;
use gyip_infrastructure::random::ThreadRandomSource;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let zones = config.zones.served_zones();
        for zone in zones.iter() {
            info!(zone, "Providing service for domain");
        }
        info!("All other domains will receive NOTZONE");

        let use_case = Arc::new(ResolveQueryUseCase::new(
            zones,
            Arc::new(ThreadRandomSource),
        ));
        let handler = DnsServerHandler::new(use_case);

        Self { handler }
    }
}
